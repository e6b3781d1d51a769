//! Integration tests for the dashboard core
//!
//! These tests drive a full [`ViewController`] over the standard layout
//! against a mocked REST API, checking what ends up in the document and
//! what the user is told.

use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use digipay_dashboard::{
    config::Config,
    context::AppContext,
    dom::{standard_layout, Document, ElementId},
    notify::{NotificationLog, RecordingNotifier},
    retry::RetryConfig,
    storage::{FileStore, MemoryStore, PreferenceStore},
    view::{Command, FormData, PageId, ViewController},
};

// ==================== Test Helpers ====================

fn create_controller(api_url: &str, store: Box<dyn PreferenceStore>) -> (ViewController, NotificationLog) {
    let notifier = RecordingNotifier::new(true);
    let log = notifier.messages();
    let ctx = AppContext::with_retry(
        Config::for_api(api_url),
        Box::new(standard_layout()),
        store,
        Box::new(notifier),
        RetryConfig::single_attempt(),
    )
    .expect("Failed to build context");
    (ViewController::new(ctx).with_seed(7), log)
}

fn create_test_controller(api_url: &str) -> (ViewController, NotificationLog) {
    create_controller(api_url, Box::new(MemoryStore::new()))
}

fn children(controller: &ViewController, id: ElementId) -> usize {
    controller.context().document.children(id.dom_id()).len()
}

fn bound_texts(doc: &dyn Document) -> Vec<(String, Option<String>)> {
    doc.bound_nodes()
        .into_iter()
        .map(|node| {
            let text = doc.binding_text(&node.element, node.target);
            (node.element, text)
        })
        .collect()
}

fn transaction_form(amount: &str) -> FormData {
    [
        ("merchant_id", "merchant_123"),
        ("amount", amount),
        ("currency", "EUR"),
        ("payment_method", "credit_card"),
    ]
    .into_iter()
    .collect()
}

// ==================== Demo Fallback Tests ====================

#[tokio::test]
async fn test_empty_transactions_show_demo_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let (mut controller, log) = create_test_controller(&server.uri());
    controller.navigate_to("transactions").await;

    assert_eq!(children(&controller, ElementId::TransactionsBody), 3);
    assert!(log.is_empty());
}

#[tokio::test]
async fn test_failed_transactions_show_demo_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (mut controller, log) = create_test_controller(&server.uri());
    controller.navigate_to("transactions").await;

    assert_eq!(children(&controller, ElementId::TransactionsBody), 3);
    assert!(log.is_empty(), "load failures are not user notifications");
}

#[tokio::test]
async fn test_empty_merchant_envelope_shows_demo_cards() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/merchants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
        .mount(&server)
        .await;

    let (mut controller, _) = create_test_controller(&server.uri());
    controller.navigate_to("merchants").await;

    assert_eq!(children(&controller, ElementId::MerchantsGrid), 2);
}

#[tokio::test]
async fn test_unknown_status_renders_pending_badge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"transaction_id": "txn_1", "amount": 10.0, "status": "unknown_status"}
        ])))
        .mount(&server)
        .await;

    let (mut controller, _) = create_test_controller(&server.uri());
    controller.navigate_to("transactions").await;

    let rows = controller
        .context()
        .document
        .children(ElementId::TransactionsBody.dom_id());
    assert_eq!(rows.len(), 1);

    let badges = rows[0].find_by_class("status-badge");
    assert_eq!(badges.len(), 1);
    assert!(badges[0].has_class("pending"));
    assert_eq!(badges[0].text.as_deref(), Some("unknown_status"));
    assert!(
        rows[0].find_by_tag("button").len() == 1,
        "no refund button for a non-completed payment"
    );
}

// ==================== Navigation Tests ====================

#[tokio::test]
async fn test_superseded_load_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let (mut controller, _) = create_test_controller(&server.uri());
    let stale = controller.begin_navigation("transactions");
    let current = controller.begin_navigation("security");

    controller.load(stale).await;
    controller.load(current).await;

    assert_eq!(children(&controller, ElementId::TransactionsBody), 0);
    assert_eq!(controller.current_page(), Some(PageId::Security));
    assert_eq!(
        controller.context().document.text("page-title").as_deref(),
        Some("Security & Compliance")
    );
}

#[tokio::test]
async fn test_billing_page_renders_revenue() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/billing/revenue/total"))
        .and(query_param("period", "month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"total_revenue": 12345.0, "total_transactions": 100, "transaction_fees": 1000.0}
        })))
        .mount(&server)
        .await;

    let (mut controller, _) = create_test_controller(&server.uri());
    controller.navigate_to("billing").await;

    let ctx = controller.context();
    assert_eq!(ctx.document.text("total-platform-revenue").as_deref(), Some("€12,345.00"));
    assert_eq!(ctx.document.text("average-fee-per-transaction").as_deref(), Some("€123.45"));
    assert_eq!(children(&controller, ElementId::RecentInvoicesBody), 2);
    assert_eq!(ctx.charts.fee_distribution.labels()[0], "European Cards");
    assert_eq!(ctx.charts.revenue_breakdown.revision(), 1);
}

// ==================== Language Tests ====================

#[tokio::test]
async fn test_language_round_trip_restores_bindings() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/set-language"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(2)
        .mount(&server)
        .await;

    let (mut controller, _) = create_test_controller(&server.uri());
    controller.start().await;
    let english = bound_texts(controller.context().document.as_ref());

    assert!(controller.change_language("es").await);
    let spanish = bound_texts(controller.context().document.as_ref());
    assert_ne!(english, spanish);
    assert_eq!(
        controller.context().document.text("page-title").as_deref(),
        Some("Panel de Control")
    );

    assert!(controller.change_language("en").await);
    assert_eq!(bound_texts(controller.context().document.as_ref()), english);
    assert_eq!(
        controller.context().document.value("languageSelect").as_deref(),
        Some("en")
    );
}

#[tokio::test]
async fn test_unsupported_language_changes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/set-language"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (mut controller, _) = create_test_controller(&server.uri());
    controller.start().await;
    let before = bound_texts(controller.context().document.as_ref());

    assert!(!controller.change_language("xx").await);
    assert_eq!(controller.context().translator.active_language(), "en");
    assert_eq!(bound_texts(controller.context().document.as_ref()), before);
}

#[tokio::test]
async fn test_language_preference_survives_restart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/set-language"))
        .and(body_json(json!({"language": "de"})))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("prefs.json");

    let (mut controller, _) = create_controller(&server.uri(), Box::new(FileStore::new(&store_path)));
    assert!(controller.change_language("de").await);

    let (mut restarted, _) = create_controller(&server.uri(), Box::new(FileStore::new(&store_path)));
    restarted.start().await;

    assert_eq!(restarted.context().translator.active_language(), "de");
    assert_eq!(
        restarted.context().document.value("languageSelect").as_deref(),
        Some("de")
    );
}

// ==================== Form Tests ====================

#[tokio::test]
async fn test_invalid_transaction_form_is_not_submitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payments"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (mut controller, log) = create_test_controller(&server.uri());
    controller
        .dispatch(Command::CreateTransaction(transaction_form("abc")))
        .await;

    assert_eq!(log.all(), vec!["Please enter a valid transaction amount"]);
}

#[tokio::test]
async fn test_server_rejection_message_is_shown() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payments"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"success": false, "error": "Merchant not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (mut controller, log) = create_test_controller(&server.uri());
    controller.dispatch(Command::ShowCreateTransaction).await;
    controller
        .dispatch(Command::CreateTransaction(transaction_form("25.00")))
        .await;

    assert_eq!(log.last().as_deref(), Some("Error: Merchant not found"));
    assert!(
        controller.context().document.has_class("modal-overlay", "active"),
        "modal stays open after a rejection"
    );
}

#[tokio::test]
async fn test_created_transaction_closes_modal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/payments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true, "data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let (mut controller, log) = create_test_controller(&server.uri());
    controller.dispatch(Command::ShowCreateTransaction).await;
    controller
        .dispatch(Command::CreateTransaction(transaction_form("25.00")))
        .await;

    assert_eq!(log.last().as_deref(), Some("Transaction created successfully!"));
    assert!(!controller.context().document.has_class("modal-overlay", "active"));
    assert_eq!(children(&controller, ElementId::RecentTransactionsBody), 3);
}

#[tokio::test]
async fn test_fee_calculation_shows_result() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/billing/fee-calculator"))
        .and(body_json(json!({"amount": 100.0, "is_european_card": true, "merchant_id": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"amount": 100.0, "fee": 0.6, "net_amount": 99.4}
        })))
        .mount(&server)
        .await;

    let (mut controller, log) = create_test_controller(&server.uri());
    {
        let doc = &mut controller.context_mut().document;
        doc.set_value("calc-amount", "100");
        doc.set_value("calc-card-type", "true");
    }
    controller.dispatch(Command::CalculateFee).await;

    let doc = &controller.context().document;
    assert!(log.is_empty());
    assert!(doc.is_visible("calculation-result"));
    assert_eq!(doc.text("result-fee").as_deref(), Some("€0.60"));
    assert_eq!(doc.text("result-net").as_deref(), Some("€99.40"));
}

#[tokio::test]
async fn test_fee_calculation_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/billing/fee-calculator"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Merchant has no billing profile"
        })))
        .mount(&server)
        .await;

    let (mut controller, log) = create_test_controller(&server.uri());
    controller
        .context_mut()
        .document
        .set_value("calc-amount", "50");
    controller.dispatch(Command::CalculateFee).await;

    assert_eq!(
        log.last().as_deref(),
        Some("Error calculating fee: Merchant has no billing profile")
    );
    assert!(!controller.context().document.is_visible("calculation-result"));
}
