//! Language handling for translation lookups.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for every locale the game ships
//! - `language`: Type-safe `Language` handle validated against the registry
//! - `metrics`: Lookup counters for one translation context
//! - `validator`: Coverage and placeholder checks between two loaded tables
//!
//! # Example
//!
//! ```rust
//! use items_lang::i18n::Language;
//!
//! let spanish = Language::from_code("ES_ES").unwrap();
//! assert_eq!(spanish.code(), "es_es");
//! assert!(Language::from_code("elvish").is_err());
//! ```

mod language;
mod metrics;
mod registry;
mod validator;

pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{TableValidator, ValidationReport};
