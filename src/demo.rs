//! Fixed demo records, rendered whenever the API is unreachable or returns
//! nothing.

use crate::models::{DashboardStats, Invoice, Merchant, Transaction};
use chrono::{DateTime, Duration, Utc};

pub fn stats() -> DashboardStats {
    DashboardStats {
        total_revenue: 125_430.50,
        total_transactions: 1247,
        success_rate: 98.2,
        active_merchants: 23,
    }
}

/// Demo payments, newest first, one hour apart ending at `now`.
pub fn transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    let rows = [
        ("txn_demo_001", "merchant_demo_001", "customer@example.com", 99.99, "credit_card", "completed"),
        ("txn_demo_002", "merchant_demo_002", "user@test.com", 249.50, "debit_card", "pending"),
        ("txn_demo_003", "merchant_demo_001", "buyer@shop.com", 75.25, "digital_wallet", "completed"),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (id, merchant, email, amount, method, status))| Transaction {
            transaction_id: id.to_string(),
            merchant_id: merchant.to_string(),
            customer_email: Some(email.to_string()),
            amount: *amount,
            currency: "EUR".to_string(),
            payment_method: Some(method.to_string()),
            status: status.to_string(),
            created_at: Some((now - Duration::hours(i as i64)).to_rfc3339()),
        })
        .collect()
}

pub fn merchants() -> Vec<Merchant> {
    vec![
        Merchant {
            merchant_id: "merchant_demo_001".to_string(),
            business_name: "Demo Store".to_string(),
            contact_email: "contact@demostore.com".to_string(),
            business_type: "E-commerce".to_string(),
            country: "DE".to_string(),
            is_active: true,
            is_verified: true,
        },
        Merchant {
            merchant_id: "merchant_demo_002".to_string(),
            business_name: "Test Shop".to_string(),
            contact_email: "info@testshop.com".to_string(),
            business_type: "Retail".to_string(),
            country: "FR".to_string(),
            is_active: true,
            is_verified: false,
        },
    ]
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            invoice_number: "INV-20250116-ABC123".to_string(),
            merchant_id: "MERCHANT001".to_string(),
            total_amount: 125.50,
            status: "pending".to_string(),
            due_date: "2025-02-15".to_string(),
        },
        Invoice {
            invoice_number: "INV-20250115-DEF456".to_string(),
            merchant_id: "MERCHANT002".to_string(),
            total_amount: 89.25,
            status: "paid".to_string(),
            due_date: "2025-02-14".to_string(),
        },
    ]
}

/// Payment method shares (%) for the doughnut chart, in
/// [`PAYMENT_METHODS`] order.
pub const PAYMENT_METHOD_SHARES: [f64; 4] = [45.0, 30.0, 15.0, 10.0];

pub const PAYMENT_METHODS: [&str; 4] = ["credit_card", "debit_card", "bank_transfer", "digital_wallet"];

pub const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub const MONTHLY_REVENUE: [f64; 6] = [12000.0, 15000.0, 18000.0, 14000.0, 22000.0, 25000.0];

pub const GEO_LABELS: [&str; 5] = ["Germany", "France", "Spain", "Italy", "Others"];

pub const GEO_SHARES: [f64; 5] = [35.0, 25.0, 15.0, 15.0, 10.0];

pub const MONTHLY_TRANSACTION_FEES: [f64; 6] = [1200.0, 1350.0, 1100.0, 1400.0, 1600.0, 1750.0];

pub const MONTHLY_OTHER_FEES: [f64; 6] = [200.0, 180.0, 220.0, 190.0, 210.0, 240.0];

/// Fee distribution (%) keyed by translation key.
pub const FEE_DISTRIBUTION: [(&str, f64); 4] = [
    ("european_cards", 65.0),
    ("non_european_cards", 25.0),
    ("chargeback_fees", 8.0),
    ("refund_fees", 2.0),
];
