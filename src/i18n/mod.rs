//! Internationalization (i18n) for the dashboard.
//!
//! # Architecture
//!
//! - `registry`: the supported languages, their metadata and embedded catalogs
//! - `language`: validated `Language` handle backed by the registry
//! - `catalog`: the locale table with default-language fallback
//! - `translator`: active language, `{{param}}` substitution, document resync
//! - `validator`: catalog consistency checks run at startup
//! - `metrics`: direct/fallback/miss counters for lookups
//!
//! # Example
//!
//! ```rust,ignore
//! use digipay_dashboard::i18n::{LocaleTable, Translator};
//! use digipay_dashboard::storage::MemoryStore;
//!
//! let translator = Translator::new(LocaleTable::bundled()?, Box::new(MemoryStore::new()));
//! assert_eq!(translator.resolve("dashboard", "es", &[]), "Panel de Control");
//! ```

mod catalog;
mod language;
mod metrics;
mod registry;
mod translator;
mod validator;

pub use catalog::{LocaleTable, Lookup};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use translator::Translator;
pub use validator::{LocaleValidator, ValidationReport};
