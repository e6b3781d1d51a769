use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "EUR".to_string()
}

/// A payment as returned by `GET /api/payments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(default)]
    pub merchant_id: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub status: String,
    /// ISO-8601 timestamp; rendered as a date only.
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merchant {
    pub merchant_id: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_number: String,
    pub merchant_id: String,
    pub total_amount: f64,
    pub status: String,
    pub due_date: String,
}

/// Platform revenue for a period (`GET /api/billing/revenue/total`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevenueSummary {
    pub total_revenue: f64,
    pub total_transactions: u64,
    pub transaction_fees: f64,
    pub chargeback_fees: f64,
    pub refund_fees: f64,
    pub active_merchants: u64,
}

impl RevenueSummary {
    pub fn average_fee(&self) -> Option<f64> {
        (self.total_transactions > 0).then(|| self.total_revenue / self.total_transactions as f64)
    }

    pub fn average_per_merchant(&self) -> Option<f64> {
        (self.active_merchants > 0).then(|| self.total_revenue / self.active_merchants as f64)
    }

    pub fn other_fees(&self) -> f64 {
        self.chargeback_fees + self.refund_fees
    }

    /// Share of transaction fees attributed to European cards.
    pub fn european_fees(&self) -> f64 {
        self.transaction_fees * 0.7
    }

    pub fn non_european_fees(&self) -> f64 {
        self.transaction_fees * 0.3
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeCalculation {
    pub amount: f64,
    pub fee: f64,
    pub net_amount: f64,
}

/// Aggregate numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_revenue: f64,
    pub total_transactions: u64,
    pub success_rate: f64,
    pub active_merchants: u64,
}

/// CSS class of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeClass {
    Success,
    Pending,
    Failed,
    Warning,
}

impl BadgeClass {
    /// Badge for a transaction status. Unknown statuses render as pending.
    pub fn for_status(status: &str) -> Self {
        match status {
            "completed" => BadgeClass::Success,
            "failed" => BadgeClass::Failed,
            _ => BadgeClass::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeClass::Success => "success",
            BadgeClass::Pending => "pending",
            BadgeClass::Failed => "failed",
            BadgeClass::Warning => "warning",
        }
    }
}

/// Body of `POST /api/payments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub merchant_id: String,
    pub amount: f64,
    pub currency: String,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /api/merchants`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMerchant {
    pub business_name: String,
    pub contact_email: String,
    pub business_type: String,
    pub country: String,
}

/// Body of `POST /api/billing/fee-calculator`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeRequest {
    pub amount: f64,
    pub is_european_card: bool,
    pub merchant_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillingConfig {
    pub european_card_percentage: f64,
    pub european_card_fixed_fee: f64,
    pub non_european_card_percentage: f64,
    pub non_european_card_fixed_fee: f64,
    pub chargeback_fee: f64,
    pub refund_fee: f64,
    pub billing_cycle: String,
    pub auto_billing_enabled: bool,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            european_card_percentage: 0.5,
            european_card_fixed_fee: 0.10,
            non_european_card_percentage: 2.4,
            non_european_card_fixed_fee: 0.20,
            chargeback_fee: 9.00,
            refund_fee: 0.05,
            billing_cycle: "monthly".to_string(),
            auto_billing_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_mapping() {
        assert_eq!(BadgeClass::for_status("completed"), BadgeClass::Success);
        assert_eq!(BadgeClass::for_status("pending"), BadgeClass::Pending);
        assert_eq!(BadgeClass::for_status("failed"), BadgeClass::Failed);
        assert_eq!(BadgeClass::for_status("unknown_status"), BadgeClass::Pending);
        assert_eq!(BadgeClass::for_status(""), BadgeClass::Pending);
        assert_eq!(BadgeClass::for_status("Completed"), BadgeClass::Pending);
    }

    #[test]
    fn test_transaction_tolerates_missing_fields() {
        let txn: Transaction = serde_json::from_str(
            r#"{"transaction_id": "txn_1", "amount": 10.0, "status": "unknown_status"}"#,
        )
        .unwrap();

        assert_eq!(txn.transaction_id, "txn_1");
        assert_eq!(txn.merchant_id, "");
        assert_eq!(txn.currency, "EUR");
        assert_eq!(txn.customer_email, None);
        assert_eq!(txn.created_at, None);
    }

    #[test]
    fn test_merchant_flags_default_to_false() {
        let merchant: Merchant =
            serde_json::from_str(r#"{"merchant_id": "m_1", "business_name": "Shop"}"#).unwrap();
        assert!(!merchant.is_active);
        assert!(!merchant.is_verified);
    }

    #[test]
    fn test_revenue_summary_derived_values() {
        let revenue = RevenueSummary {
            total_revenue: 1000.0,
            total_transactions: 400,
            transaction_fees: 800.0,
            chargeback_fees: 18.0,
            refund_fees: 2.0,
            active_merchants: 4,
        };

        assert_eq!(revenue.average_fee(), Some(2.5));
        assert_eq!(revenue.average_per_merchant(), Some(250.0));
        assert_eq!(revenue.other_fees(), 20.0);
        assert!((revenue.european_fees() - 560.0).abs() < 1e-9);
        assert!((revenue.non_european_fees() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_revenue_summary_without_activity() {
        let revenue: RevenueSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(revenue.average_fee(), None);
        assert_eq!(revenue.average_per_merchant(), None);
    }

    #[test]
    fn test_new_transaction_omits_empty_optionals() {
        let body = NewTransaction {
            merchant_id: "m_1".to_string(),
            amount: 12.5,
            currency: "EUR".to_string(),
            payment_method: "credit_card".to_string(),
            customer_email: None,
            description: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("customer_email").is_none());
        assert_eq!(json["amount"], 12.5);
    }
}
