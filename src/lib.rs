//! Localized names for game content.
//!
//! The game engine only exposes internal identifiers (`DAMAGE_ALL`, `WOOL`
//! with data value `1`, `ZOMBIE`). This crate turns them into the names
//! players see, in any of the game's languages, using the game's own
//! language files.
//!
//! # Example
//!
//! ```rust
//! use items_lang::object::{Enchantment, ItemStack, Material};
//! use items_lang::source::MemorySource;
//! use items_lang::{ItemsLang, Language, Settings};
//!
//! let source = MemorySource::new().with_language(
//!     Language::EN_US,
//!     r#"{"block.minecraft.stone": "Stone", "enchantment.minecraft.sharpness": "Sharpness"}"#,
//! );
//! let api = ItemsLang::init(&Settings::new("1.20.4"), source);
//!
//! let stone = ItemStack::new(Material::block("STONE"));
//! assert_eq!(api.translate(&stone, Language::EN_US).unwrap().as_deref(), Some("Stone"));
//!
//! let sharpness = Enchantment::new("DAMAGE_ALL");
//! assert_eq!(api.translate(&sharpness, "en_us").unwrap().as_deref(), Some("Sharpness"));
//!
//! assert_eq!(api.translate_anything("stone", "EN_US").unwrap().as_deref(), Some("Stone"));
//! ```

pub mod api;
pub mod category;
pub mod compat;
pub mod config;
pub mod error;
pub mod i18n;
pub mod object;
pub mod source;
pub mod store;

pub use api::{ItemsLang, LanguageArg};
pub use category::{Category, Classification};
pub use config::Settings;
pub use error::{Error, Result};
pub use i18n::Language;
pub use object::Translatable;
pub use store::LoadSummary;
