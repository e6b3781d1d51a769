//! Locale table validation.
//!
//! Checks that every non-default table only uses keys the default table
//! knows, and that translations keep the same `{{param}}` placeholders as
//! the default text.

use crate::i18n::LocaleTable;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a locale table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    /// Broken invariants (e.g. a key the default table lacks)
    pub errors: Vec<String>,

    /// Suspicious but renderable entries (e.g. placeholder mismatch)
    pub warnings: Vec<String>,

    /// Share of default keys translated, per language (0-100)
    pub coverage: BTreeMap<String, f64>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for locale tables.
pub struct LocaleValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// `{{name}}` with no inner whitespace; capture 1 is the name. The same
/// pattern drives substitution, so anything this accepts gets replaced.
pub(crate) fn placeholder_pattern() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap())
}

impl LocaleValidator {
    pub fn validate(locales: &LocaleTable) -> ValidationReport {
        let mut report = ValidationReport::default();
        let default_language = locales.default_language();
        let defaults = locales.entries(default_language);

        for language in locales.languages() {
            if language == default_language {
                report.coverage.insert(language.to_string(), 100.0);
                continue;
            }

            let entries = locales.entries(language);
            let mut translated = 0usize;

            for (key, text) in &entries {
                let Some(default_text) = defaults.get(key) else {
                    report.errors.push(format!(
                        "{}: key '{}' is missing from the default table ({})",
                        language, key, default_language
                    ));
                    continue;
                };
                translated += 1;

                let expected = Self::extract_placeholders(default_text);
                let actual = Self::extract_placeholders(text);
                if expected != actual {
                    report.warnings.push(format!(
                        "{}: placeholder mismatch for '{}': default has {:?}, translation has {:?}",
                        language, key, expected, actual
                    ));
                }
            }

            let coverage = if defaults.is_empty() {
                100.0
            } else {
                (translated as f64 / defaults.len() as f64) * 100.0
            };
            report.coverage.insert(language.to_string(), coverage);
        }

        report
    }

    /// Names of all `{{name}}` placeholders in `text`.
    pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
        placeholder_pattern()
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_bundled_tables_have_no_errors() {
        let locales = LocaleTable::bundled().unwrap();
        let report = LocaleValidator::validate(&locales);

        assert!(!report.has_errors(), "errors: {:?}", report.errors);
        assert!(!report.has_warnings(), "warnings: {:?}", report.warnings);
        assert_eq!(report.coverage.get("en"), Some(&100.0));
        assert!(report.coverage["es"] > report.coverage["fr"]);
    }

    #[test]
    fn test_key_outside_default_is_an_error() {
        let locales = LocaleTable::new(
            "en",
            vec![
                ("en".to_string(), table(&[("a", "A")])),
                ("es".to_string(), table(&[("a", "A"), ("b", "B")])),
            ],
        );
        let report = LocaleValidator::validate(&locales);

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("'b'"));
    }

    #[test]
    fn test_placeholder_mismatch_is_a_warning() {
        let locales = LocaleTable::new(
            "en",
            vec![
                ("en".to_string(), table(&[("greet", "Hi {{name}}")])),
                ("es".to_string(), table(&[("greet", "Hola {{nombre}}")])),
            ],
        );
        let report = LocaleValidator::validate(&locales);

        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("greet"));
    }

    #[test]
    fn test_coverage_of_partial_table() {
        let locales = LocaleTable::new(
            "en",
            vec![
                ("en".to_string(), table(&[("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")])),
                ("de".to_string(), table(&[("a", "A")])),
            ],
        );
        let report = LocaleValidator::validate(&locales);
        assert_eq!(report.coverage.get("de"), Some(&25.0));
    }

    #[test]
    fn test_extract_placeholders() {
        let names = LocaleValidator::extract_placeholders("{{id}} by {{user}} and {{id}}");
        let expected: BTreeSet<String> = ["id", "user"].iter().map(|s| s.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_spaced_placeholder_is_not_a_placeholder() {
        assert!(LocaleValidator::extract_placeholders("Hello {{ name }}").is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_single_braces() {
        assert!(LocaleValidator::extract_placeholders("{id} costs €{amount}").is_empty());
    }
}
