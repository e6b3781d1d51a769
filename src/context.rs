use crate::api::ApiClient;
use crate::config::Config;
use crate::dom::{Document, ElementRegistry};
use crate::error::Result;
use crate::i18n::{LocaleTable, Translator};
use crate::notify::Notifier;
use crate::retry::RetryConfig;
use crate::storage::PreferenceStore;
use crate::view::Charts;

/// Everything the dashboard owns: one instance per running dashboard, no
/// process-wide state.
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
    pub translator: Translator,
    pub document: Box<dyn Document>,
    pub notifier: Box<dyn Notifier>,
    pub charts: Charts,
    registry: ElementRegistry,
}

impl AppContext {
    /// Assemble a context, validating the document and the bundled locale
    /// catalogs up front.
    pub fn new(
        config: Config,
        document: Box<dyn Document>,
        store: Box<dyn PreferenceStore>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self> {
        Self::with_retry(config, document, store, notifier, RetryConfig::list_fetch())
    }

    /// Like [`AppContext::new`] with an explicit retry policy for list
    /// fetches.
    pub fn with_retry(
        config: Config,
        document: Box<dyn Document>,
        store: Box<dyn PreferenceStore>,
        notifier: Box<dyn Notifier>,
        retry: RetryConfig,
    ) -> Result<Self> {
        let registry = ElementRegistry::validate(document.as_ref())?;
        let api = ApiClient::new(&config)?.with_retry(retry);
        let translator = Translator::new(LocaleTable::bundled()?, store).with_backend(api.clone());

        Ok(Self {
            config,
            api,
            translator,
            document,
            notifier,
            charts: Charts::default(),
            registry,
        })
    }

    pub fn registry(&self) -> ElementRegistry {
        self.registry
    }
}
