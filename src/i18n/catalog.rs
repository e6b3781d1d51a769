//! Locale table: per-language key -> text maps with a default language.

use crate::error::{DashboardError, Result};
use crate::i18n::Language;
use std::collections::{BTreeMap, HashMap};

/// Outcome of a single key lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Found in the requested language.
    Direct(&'a str),
    /// Absent from the requested language, found in the default one.
    Fallback(&'a str),
    /// Absent everywhere.
    Missing,
}

/// The full set of per-language string tables.
///
/// The default language's table is expected to be a superset of every
/// other table; [`LocaleValidator`](crate::i18n::LocaleValidator) checks it.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    default_language: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl LocaleTable {
    /// Build a table from explicit per-language maps.
    ///
    /// The default language is always present, even if `tables` omits it.
    pub fn new<I>(default_language: &str, tables: I) -> Self
    where
        I: IntoIterator<Item = (String, HashMap<String, String>)>,
    {
        let mut tables: HashMap<_, _> = tables.into_iter().collect();
        tables.entry(default_language.to_string()).or_default();
        Self {
            default_language: default_language.to_string(),
            tables,
        }
    }

    /// The six catalogs shipped with the dashboard, with the canonical
    /// registry language as default.
    pub fn bundled() -> Result<Self> {
        let mut tables = HashMap::new();
        for language in Language::all() {
            let entries = parse_catalog(language.code(), language.catalog_source())?;
            tables.insert(language.code().to_string(), entries);
        }
        Ok(Self::new(Language::canonical().code(), tables))
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Whether `language` has a table. Exact, case-sensitive match.
    pub fn has_language(&self, language: &str) -> bool {
        self.tables.contains_key(language)
    }

    /// Language codes with a table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<_> = self.tables.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Entries for one language, sorted by key.
    pub fn entries(&self, language: &str) -> BTreeMap<&str, &str> {
        self.tables
            .get(language)
            .map(|table| {
                table
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Look `key` up in `language`, then in the default language.
    pub fn lookup(&self, language: &str, key: &str) -> Lookup<'_> {
        if let Some(text) = self.tables.get(language).and_then(|t| t.get(key)) {
            return Lookup::Direct(text);
        }
        match self.tables.get(&self.default_language).and_then(|t| t.get(key)) {
            Some(text) => Lookup::Fallback(text),
            None => Lookup::Missing,
        }
    }
}

fn parse_catalog(language: &str, source: &str) -> Result<HashMap<String, String>> {
    serde_json::from_str(source).map_err(|e| DashboardError::Catalog {
        language: language.to_string(),
        reason: e.to_string(),
    })
}
