use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// An enabled, registered language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    config: &'static LanguageConfig,
}

impl Language {
    /// Parse a selector value.
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().find(code) {
            Some(config) if config.enabled => Ok(Language { config }),
            Some(_) => bail!("Language '{}' is disabled", code),
            None => bail!("Unknown language code '{}'", code),
        }
    }

    pub fn canonical() -> Language {
        Language {
            config: LanguageRegistry::get().canonical(),
        }
    }

    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .enabled()
            .map(|config| Language { config })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.config.code
    }

    pub fn name(&self) -> &'static str {
        self.config.name
    }

    pub fn native_name(&self) -> &'static str {
        self.config.native_name
    }

    pub fn catalog_source(&self) -> &'static str {
        self.config.catalog
    }

    pub fn is_canonical(&self) -> bool {
        self.config.is_canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_is_english() {
        let english = Language::canonical();
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_canonical());
    }

    #[test]
    fn test_from_code_italian() {
        let italian = Language::from_code("it").unwrap();
        assert_eq!(italian.native_name(), "Italiano");
        assert!(!italian.is_canonical());
    }

    #[test]
    fn test_from_code_rejects_unknown_and_regions() {
        for code in ["nl", "en-US", "pt-BR"] {
            let err = Language::from_code(code).unwrap_err();
            assert!(err.to_string().contains("Unknown"), "{}", code);
        }
    }

    #[test]
    fn test_all_starts_with_canonical() {
        let all = Language::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Language::canonical());
    }

    #[test]
    fn test_catalog_source_is_embedded() {
        let spanish = Language::from_code("es").unwrap();
        assert!(Language::canonical().catalog_source().contains("\"dashboard\""));
        assert!(spanish.catalog_source().contains("Panel de Control"));
    }
}
