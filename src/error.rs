use thiserror::Error;

/// Errors returned by the public translation API.
///
/// A missing translation is never an error: lookups return `Ok(None)` for that.
/// These variants describe caller mistakes and broken engine data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A lookup was made in a language whose table was never loaded.
    #[error("Language '{0}' is not loaded; call load() for it first")]
    LanguageNotLoaded(&'static str),

    /// Free text that does not name any known locale.
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    /// The engine declared a potion effect missing from the compatibility table.
    #[error("Potion effect '{0}' has no known translation key")]
    UnknownEffect(String),

    /// The engine declared an enchantment missing from the compatibility table.
    #[error("Enchantment '{0}' has no known translation key")]
    UnknownEnchantment(String),
}

pub type Result<T> = std::result::Result<T, Error>;
