use super::{BindingTarget, ElementId, MemoryDocument};
use crate::view::PageId;

/// Static translation bindings of the dashboard markup: (element, key).
const TEXT_BINDINGS: &[(&str, &str)] = &[
    ("title", "payment_gateway_dashboard"),
    ("brand", "payment_gateway_dashboard"),
    ("user-name", "admin_user"),
    // dashboard cards
    ("label-total-revenue", "total_revenue"),
    ("label-total-transactions", "total_transactions"),
    ("label-success-rate", "success_rate"),
    ("label-active-merchants", "active_merchants"),
    ("heading-transaction-volume", "transaction_volume"),
    ("heading-payment-methods", "payment_methods"),
    ("heading-recent-transactions", "recent_transactions"),
    ("link-view-all", "view_all"),
    ("option-7d", "last_7_days"),
    ("option-30d", "last_30_days"),
    ("option-90d", "last_90_days"),
    // transaction table
    ("th-transaction-id", "transaction_id"),
    ("th-merchant", "merchant"),
    ("th-customer", "customer"),
    ("th-amount", "amount"),
    ("th-payment-method", "payment_method"),
    ("th-status", "status"),
    ("th-date", "date"),
    ("th-actions", "actions"),
    ("option-all-statuses", "all_statuses"),
    ("option-all-merchants", "all_merchants"),
    ("btn-apply-filters", "apply_filters"),
    ("btn-new-transaction", "new_transaction"),
    ("btn-add-merchant", "add_merchant"),
    // analytics
    ("heading-revenue-trends", "revenue_trends"),
    ("heading-geographic-distribution", "geographic_distribution"),
    ("heading-fraud-detection", "fraud_detection"),
    ("label-fraud-rate", "fraud_rate"),
    ("label-prevented-losses", "prevented_losses"),
    ("btn-update-analytics", "update"),
    // security
    ("heading-pci-dss", "pci_dss_compliance"),
    ("label-compliant", "compliant"),
    ("label-last-audit", "last_audit"),
    ("label-next-audit", "next_audit"),
    ("label-data-retention", "data_retention"),
    ("label-right-to-be-forgotten", "right_to_be_forgotten"),
    ("heading-sca", "strong_customer_auth"),
    ("heading-open-banking", "open_banking_apis"),
    // settings
    ("heading-system-settings", "system_settings"),
    ("heading-api-configuration", "api_configuration"),
    ("label-rate-limiting", "rate_limiting"),
    ("label-timeout", "timeout"),
    ("heading-security-settings", "security_settings"),
    ("label-enable-2fa", "enable_2fa"),
    ("label-require-https", "require_https"),
    // billing
    ("label-total-platform-revenue", "total_platform_revenue"),
    ("label-monthly-revenue", "monthly_revenue"),
    ("label-avg-fee", "avg_fee_per_transaction"),
    ("label-pending-invoices", "pending_invoices"),
    ("heading-revenue-breakdown", "revenue_breakdown"),
    ("heading-fee-distribution", "fee_distribution"),
    ("heading-recent-invoices", "recent_invoices"),
    ("btn-generate-invoices", "generate_invoices"),
    ("btn-billing-settings", "billing_settings"),
    ("th-invoice-number", "invoice_number"),
    // fee calculator
    ("heading-calculate-fee", "calculate_transaction_fee"),
    ("label-transaction-amount", "transaction_amount"),
    ("label-card-type", "card_type"),
    ("option-european-card", "european_card"),
    ("option-non-european-card", "non_european_card"),
    ("label-merchant-optional", "merchant_optional"),
    ("option-default-rates", "default_rates"),
    ("btn-calculate", "calculate"),
    ("heading-calculation-result", "calculation_result"),
    ("label-processing-fee", "processing_fee"),
    ("label-merchant-receives", "merchant_receives"),
    // revenue analytics
    ("label-transaction-fees", "transaction_fees"),
    ("label-other-fees", "other_fees"),
    ("label-chargeback-fees", "chargeback_fees"),
    ("label-refund-fees", "refund_fees"),
    ("heading-merchant-metrics", "merchant_metrics"),
    ("label-avg-revenue-per-merchant", "avg_revenue_per_merchant"),
    ("label-to", "to"),
    // billing configuration modal
    ("heading-billing-configuration", "billing_configuration"),
    ("label-default-fee-structure", "default_fee_structure"),
    ("label-config-eu-percentage", "european_card_percentage"),
    ("label-config-eu-fixed", "european_card_fixed_fee"),
    ("label-config-non-eu-percentage", "non_european_card_percentage"),
    ("label-config-non-eu-fixed", "non_european_card_fixed_fee"),
    ("label-billing-cycle", "default_billing_cycle"),
    ("option-monthly", "monthly"),
    ("option-weekly", "weekly"),
    ("option-daily", "daily"),
    ("label-auto-billing", "enable_automatic_billing"),
    ("btn-cancel-config", "cancel"),
    ("btn-save-config", "save_configuration"),
];

const PLACEHOLDER_BINDINGS: &[(&str, &str)] = &[("search-transactions", "search_transactions")];

const TITLE_BINDINGS: &[(&str, &str)] = &[
    ("btn-new-transaction", "new_transaction"),
    ("btn-add-merchant", "add_merchant"),
    ("btn-generate-invoices", "generate_invoices"),
];

/// The dashboard markup as an in-memory document: every registered
/// element, the sidebar and panels, and all static translation bindings.
pub fn standard_layout() -> MemoryDocument {
    let mut doc = MemoryDocument::new();

    for id in ElementId::ALL {
        doc = doc.with_element(id.dom_id());
    }

    doc = doc
        .with_hidden(ElementId::CalculationResult.dom_id())
        .with_hidden(ElementId::BillingConfigModal.dom_id());

    for page in PageId::ALL {
        let (menu_classes, panel_classes): (&[&str], &[&str]) = if page == PageId::DEFAULT {
            (&["menu-item", "active"], &["page", "active"])
        } else {
            (&["menu-item"], &["page"])
        };
        doc = doc
            .with_classes(&page.menu_id(), menu_classes)
            .with_binding(&page.menu_id(), BindingTarget::Text, page.menu_label_key())
            .with_classes(&page.panel_id(), panel_classes);
    }

    for (id, key) in TEXT_BINDINGS {
        doc = doc.with_binding(id, BindingTarget::Text, key);
    }
    for (id, key) in PLACEHOLDER_BINDINGS {
        doc = doc.with_binding(id, BindingTarget::Placeholder, key);
    }
    for (id, key) in TITLE_BINDINGS {
        doc = doc.with_binding(id, BindingTarget::Title, key);
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;
    use crate::i18n::{LocaleTable, Lookup};

    #[test]
    fn test_every_bound_key_exists_in_default_table() {
        let locales = LocaleTable::bundled().unwrap();
        for node in standard_layout().bound_nodes() {
            assert_ne!(
                locales.lookup("en", &node.key),
                Lookup::Missing,
                "{} is bound to unknown key {}",
                node.element,
                node.key
            );
        }
    }

    #[test]
    fn test_dashboard_starts_active() {
        let doc = standard_layout();
        assert!(doc.has_class("menu-dashboard", "active"));
        assert!(doc.has_class("dashboard-page", "active"));
        assert!(!doc.has_class("menu-merchants", "active"));
        assert!(doc.has_class("merchants-page", "page"));
    }

    #[test]
    fn test_layout_has_all_binding_kinds() {
        let nodes = standard_layout().bound_nodes();
        assert!(nodes.iter().any(|n| n.target == BindingTarget::Placeholder));
        assert!(nodes.iter().any(|n| n.target == BindingTarget::Title));
        assert!(nodes.iter().any(|n| n.element == "title"));
    }

    #[test]
    fn test_result_panel_and_config_modal_start_hidden() {
        let doc = standard_layout();
        assert!(!doc.is_visible("calculation-result"));
        assert!(!doc.is_visible("billing-config-modal"));
        assert!(doc.is_visible("modal-overlay"));
    }
}
