//! The translation engine: active language, lookups with fallback, and
//! re-rendering of bound document nodes.

use crate::api::ApiClient;
use crate::dom::{Document, ElementId};
use crate::i18n::validator::placeholder_pattern;
use crate::i18n::{Language, LocaleTable, Lookup, TranslationMetrics};
use crate::storage::{PreferenceStore, LANGUAGE_KEY};
use regex::Captures;
use tracing::{debug, info, warn};

pub struct Translator {
    table: LocaleTable,
    active: String,
    store: Box<dyn PreferenceStore>,
    metrics: TranslationMetrics,
    backend: Option<ApiClient>,
}

impl Translator {
    /// Engine over `table`, starting in the table's default language.
    pub fn new(table: LocaleTable, store: Box<dyn PreferenceStore>) -> Self {
        let active = table.default_language().to_string();
        Self {
            table,
            active,
            store,
            metrics: TranslationMetrics::default(),
            backend: None,
        }
    }

    /// Notify `api` of every language change.
    pub fn with_backend(mut self, api: ApiClient) -> Self {
        self.backend = Some(api);
        self
    }

    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    pub fn active_language(&self) -> &str {
        &self.active
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Text for `key` in `language`, falling back to the default language
    /// and then to the key itself. Never fails.
    ///
    /// Every `{{name}}` occurrence is replaced for each supplied param;
    /// placeholders without a param stay as they are.
    pub fn resolve(&self, key: &str, language: &str, params: &[(&str, &str)]) -> String {
        let template = match self.table.lookup(language, key) {
            Lookup::Direct(text) => {
                self.metrics.record_direct_hit();
                text
            }
            Lookup::Fallback(text) => {
                self.metrics.record_fallback();
                debug!("Key '{}' missing in '{}', using default", key, language);
                text
            }
            Lookup::Missing => {
                self.metrics.record_miss();
                debug!("Key '{}' not found in any locale", key);
                key
            }
        };

        substitute(template, params)
    }

    /// [`resolve`](Self::resolve) against the active language.
    pub fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.resolve(key, &self.active, params)
    }

    /// Switch the active language.
    ///
    /// Returns `false` and changes nothing if `code` has no table.
    /// Otherwise persists the choice, re-renders `document` and then tells
    /// the backend; neither a storage nor a backend failure undoes the
    /// switch.
    pub async fn set_active_language(&mut self, code: &str, document: &mut dyn Document) -> bool {
        if !self.table.has_language(code) {
            warn!("Ignoring unsupported language '{}'", code);
            return false;
        }

        self.active = code.to_string();
        if let Err(e) = self.store.save(LANGUAGE_KEY, code) {
            warn!("Failed to persist language '{}': {}", code, e);
        }
        self.resync(document);
        info!("Active language set to '{}'", code);

        if let Some(api) = &self.backend {
            if let Err(e) = api.set_language(code).await {
                warn!("Failed to notify backend of language '{}': {}", code, e);
            }
        }
        true
    }

    /// Re-render every bound node in the active language. Idempotent.
    pub fn resync(&self, document: &mut dyn Document) {
        let nodes = document.bound_nodes();
        for node in &nodes {
            let text = self.t(&node.key, &[]);
            document.render_binding(&node.element, node.target, &text);
        }
        debug!("Resynced {} bound nodes in '{}'", nodes.len(), self.active);
    }

    /// Restore the persisted language (default language when missing or
    /// unsupported), render the document and sync the language selector.
    pub fn initialize(&mut self, document: &mut dyn Document) {
        let saved = match self.store.load(LANGUAGE_KEY) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Failed to read saved language: {}", e);
                None
            }
        };

        self.active = match saved {
            Some(code) if self.table.has_language(&code) => code,
            Some(code) => {
                warn!("Saved language '{}' is not supported, using default", code);
                self.table.default_language().to_string()
            }
            None => self.table.default_language().to_string(),
        };

        self.resync(document);
        document.set_value(ElementId::LanguageSelect.dom_id(), &self.active);
        info!("Translator initialized in '{}'", self.active);
    }

    /// Languages offered in the selector: registry order, limited to those
    /// with a table.
    pub fn available_languages(&self) -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|language| self.table.has_language(language.code()))
            .collect()
    }
}

/// Single pass over `template`: substituted values are never rescanned.
fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    placeholder_pattern()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match params.iter().find(|(param, _)| *param == name) {
                Some((_, value)) => value.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
