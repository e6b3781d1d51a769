//! Renders one dashboard page against the configured API and prints the
//! resulting document.
//!
//! Usage:
//!   digipay-dashboard [page] [language]
//!
//! Defaults to the dashboard page in the saved (or default) language.
//!
//! Optional environment variables:
//! - API_BASE_URL (defaults to http://localhost:5000)
//! - REQUEST_TIMEOUT_SECS (defaults to 10)
//! - LANGUAGE_STORE_PATH (defaults to data/preferences.json)
//! - RECENT_TRANSACTIONS_LIMIT (defaults to 5)

use anyhow::{Context, Result};
use digipay_dashboard::config::Config;
use digipay_dashboard::context::AppContext;
use digipay_dashboard::dom::{standard_layout, Document, ElementId};
use digipay_dashboard::i18n::{LocaleTable, LocaleValidator};
use digipay_dashboard::notify::LogNotifier;
use digipay_dashboard::storage::FileStore;
use digipay_dashboard::view::{PageId, ViewController};
use tracing::{info, warn};

const CONTAINERS: [ElementId; 5] = [
    ElementId::RecentTransactionsBody,
    ElementId::TransactionsBody,
    ElementId::MerchantsGrid,
    ElementId::RecentInvoicesBody,
    ElementId::CalcMerchant,
];

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("digipay_dashboard=info".parse()?),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let page = args.next().unwrap_or_else(|| PageId::DEFAULT.as_str().to_string());
    let language = args.next();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Using API at {}", config.api_base_url);

    let report = LocaleValidator::validate(&LocaleTable::bundled()?);
    for warning in &report.warnings {
        warn!("Locale catalog: {}", warning);
    }
    if report.has_errors() {
        anyhow::bail!("Locale catalogs are invalid: {}", report.errors.join("; "));
    }

    let store = FileStore::new(&config.language_store_path);
    let ctx = AppContext::new(
        config,
        Box::new(standard_layout()),
        Box::new(store),
        Box::new(LogNotifier::new(false)),
    )
    .context("Failed to build dashboard context")?;

    let mut controller = ViewController::new(ctx);
    controller.start().await;

    if let Some(code) = language {
        if !controller.change_language(&code).await {
            warn!(
                "Language '{}' is not supported, keeping '{}'",
                code,
                controller.context().translator.active_language()
            );
        }
    }

    if page != PageId::DEFAULT.as_str() {
        controller.navigate_to(&page).await;
    }

    print_snapshot(controller.context().document.as_ref());

    let metrics = controller.context().translator.metrics().report();
    info!(
        "Translation lookups: {} ({} fallbacks, {} misses)",
        metrics.lookups, metrics.fallbacks, metrics.misses
    );

    Ok(())
}

fn print_snapshot(doc: &dyn Document) {
    let header = |id: ElementId| doc.text(id.dom_id()).unwrap_or_default();
    println!("{}", header(ElementId::PageTitle));
    println!("{}", header(ElementId::PageSubtitle));
    println!("{}", "=".repeat(60));

    for node in doc.bound_nodes() {
        if let Some(text) = doc.binding_text(&node.element, node.target) {
            println!("{:<32} {}", node.element, text);
        }
    }

    for id in CONTAINERS {
        let children = doc.children(id.dom_id());
        if children.is_empty() {
            continue;
        }
        println!();
        println!("[{}]", id.dom_id());
        for child in children {
            println!("  {}", child.text_content());
        }
    }
}
