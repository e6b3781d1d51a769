//! The supported languages and their embedded catalogs.
//!
//! Immutable reference data in a static table. The *active* language is
//! not stored here; it belongs to the [`Translator`](crate::i18n::Translator)
//! that owns it.

/// One row of the language table.
#[derive(Debug, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 code, also the value of the language selector option
    pub code: &'static str,

    /// English name
    pub name: &'static str,

    /// Name shown in the language selector
    pub native_name: &'static str,

    /// Lookup fallback for every other language
    pub is_canonical: bool,

    /// Disabled languages are kept in the table but never offered
    pub enabled: bool,

    /// Embedded JSON catalog (flat key -> text map)
    pub catalog: &'static str,
}

pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
}

static LANGUAGES: [LanguageConfig; 6] = [
    LanguageConfig {
        code: "en",
        name: "English",
        native_name: "English",
        is_canonical: true,
        enabled: true,
        catalog: include_str!("../../locales/en.json"),
    },
    LanguageConfig {
        code: "es",
        name: "Spanish",
        native_name: "Español",
        is_canonical: false,
        enabled: true,
        catalog: include_str!("../../locales/es.json"),
    },
    LanguageConfig {
        code: "fr",
        name: "French",
        native_name: "Français",
        is_canonical: false,
        enabled: true,
        catalog: include_str!("../../locales/fr.json"),
    },
    LanguageConfig {
        code: "de",
        name: "German",
        native_name: "Deutsch",
        is_canonical: false,
        enabled: true,
        catalog: include_str!("../../locales/de.json"),
    },
    LanguageConfig {
        code: "it",
        name: "Italian",
        native_name: "Italiano",
        is_canonical: false,
        enabled: true,
        catalog: include_str!("../../locales/it.json"),
    },
    LanguageConfig {
        code: "pt",
        name: "Portuguese",
        native_name: "Português",
        is_canonical: false,
        enabled: true,
        catalog: include_str!("../../locales/pt.json"),
    },
];

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: &LANGUAGES,
};

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Exact, case-sensitive match: `"en-US"` and `"EN"` are unknown.
    pub fn find(&self, code: &str) -> Option<&'static LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Enabled languages in selector order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled)
    }

    /// The fallback language: the row flagged canonical, else the first row.
    pub fn canonical(&self) -> &'static LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_canonical)
            .unwrap_or(&self.languages[0])
    }

    pub fn is_enabled(&self, code: &str) -> bool {
        self.find(code).is_some_and(|lang| lang.enabled)
    }
}
