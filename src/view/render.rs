//! Record -> fragment renderers and display formatting.
//!
//! Everything here is pure: text comes from the translator passed in, and
//! nothing touches the document.

use crate::dom::Fragment;
use crate::i18n::Translator;
use crate::models::{BadgeClass, DashboardStats, Invoice, Merchant, Transaction};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rand::Rng;

const KNOWN_PAYMENT_METHODS: [&str; 4] = ["credit_card", "debit_card", "bank_transfer", "digital_wallet"];

/// Attribute naming the command a button triggers.
pub const ACTION_ATTR: &str = "data-action";
/// Attribute carrying the record id a button acts on.
pub const ID_ATTR: &str = "data-id";

/// `€1,234.50`
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}€{}.{}", sign, group_thousands(whole), cents)
}

/// `1,247`
pub fn format_count(count: u64) -> String {
    group_thousands(&count.to_string())
}

/// `98.2%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Date part of an API timestamp as `YYYY-MM-DD`.
///
/// Accepts RFC 3339, naive ISO date-times and plain dates; anything else is
/// shown verbatim.
pub fn format_date(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.date_naive().to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d") {
        return date.to_string();
    }
    timestamp.to_string()
}

/// Translated label of a payment method; unknown methods verbatim.
pub fn payment_method_label(t: &Translator, method: Option<&str>) -> String {
    match method {
        Some(method) if KNOWN_PAYMENT_METHODS.contains(&method) => t.t(method, &[]),
        Some(method) if !method.is_empty() => method.to_string(),
        _ => t.t("not_available", &[]),
    }
}

/// Texts of the four dashboard stat cards, in card order.
pub fn stat_texts(stats: &DashboardStats) -> [String; 4] {
    [
        format_currency(stats.total_revenue),
        format_count(stats.total_transactions),
        format_percent(stats.success_rate),
        stats.active_merchants.to_string(),
    ]
}

fn status_badge(t: &Translator, status: &str) -> Fragment {
    Fragment::new("span")
        .class("status-badge")
        .class(BadgeClass::for_status(status).as_str())
        .text(t.t(status, &[]))
}

fn action_button(classes: &str, action: &str, id: &str, icon: &str) -> Fragment {
    Fragment::new("button")
        .class(classes)
        .attr(ACTION_ATTR, action)
        .attr(ID_ATTR, id)
        .child(Fragment::new("i").class(icon))
}

fn cell(text: impl Into<String>) -> Fragment {
    Fragment::new("td").text(text)
}

fn date_cell(t: &Translator, created_at: Option<&str>) -> Fragment {
    match created_at {
        Some(ts) => cell(format_date(ts)),
        None => cell(t.t("not_available", &[])),
    }
}

/// Row of the dashboard's recent transactions table.
pub fn transaction_row(t: &Translator, txn: &Transaction) -> Fragment {
    Fragment::new("tr")
        .child(Fragment::new("td").child(Fragment::new("code").text(&txn.transaction_id)))
        .child(cell(&txn.merchant_id))
        .child(cell(format_currency(txn.amount)))
        .child(Fragment::new("td").child(status_badge(t, &txn.status)))
        .child(date_cell(t, txn.created_at.as_deref()))
        .child(Fragment::new("td").child(action_button(
            "btn btn-secondary",
            "view-transaction",
            &txn.transaction_id,
            "fas fa-eye",
        )))
}

/// Row of the full transactions table. Only completed payments get a
/// refund button.
pub fn full_transaction_row(t: &Translator, txn: &Transaction) -> Fragment {
    let customer = txn
        .customer_email
        .as_deref()
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| t.t("not_available", &[]));

    let mut actions = Fragment::new("td").child(action_button(
        "btn btn-secondary",
        "view-transaction",
        &txn.transaction_id,
        "fas fa-eye",
    ));
    if txn.status == "completed" {
        actions = actions.child(action_button(
            "btn btn-danger",
            "refund-transaction",
            &txn.transaction_id,
            "fas fa-undo",
        ));
    }

    Fragment::new("tr")
        .child(Fragment::new("td").child(Fragment::new("code").text(&txn.transaction_id)))
        .child(cell(&txn.merchant_id))
        .child(cell(customer))
        .child(cell(format_currency(txn.amount)))
        .child(cell(payment_method_label(t, txn.payment_method.as_deref())))
        .child(Fragment::new("td").child(status_badge(t, &txn.status)))
        .child(date_cell(t, txn.created_at.as_deref()))
        .child(actions)
}

/// Card of the merchants grid. Volume and transaction count are demo
/// figures drawn from `rng`.
pub fn merchant_card<R: Rng>(t: &Translator, merchant: &Merchant, rng: &mut R) -> Fragment {
    let (active_class, active_key) = if merchant.is_active {
        (BadgeClass::Success, "active")
    } else {
        (BadgeClass::Failed, "inactive")
    };
    let (verified_class, verified_key) = if merchant.is_verified {
        (BadgeClass::Success, "verified")
    } else {
        (BadgeClass::Warning, "pending")
    };

    let volume: f64 = rng.gen_range(0.0..10_000.0);
    let transactions: u32 = rng.gen_range(0..100);

    let stat = |number: String, label: String| {
        Fragment::new("div")
            .class("merchant-stat")
            .child(Fragment::new("div").class("number").text(number))
            .child(Fragment::new("div").class("label").text(label))
    };

    Fragment::new("div")
        .class("merchant-card")
        .attr(ID_ATTR, &merchant.merchant_id)
        .child(
            Fragment::new("div")
                .class("merchant-header")
                .child(
                    Fragment::new("div")
                        .class("merchant-info")
                        .child(Fragment::new("h4").text(&merchant.business_name))
                        .child(Fragment::new("p").text(&merchant.contact_email))
                        .child(
                            Fragment::new("p")
                                .text(format!("{} • {}", merchant.business_type, merchant.country)),
                        ),
                )
                .child(
                    Fragment::new("div")
                        .class("merchant-status")
                        .child(
                            Fragment::new("span")
                                .class("status-badge")
                                .class(active_class.as_str())
                                .text(t.t(active_key, &[])),
                        )
                        .child(
                            Fragment::new("span")
                                .class("status-badge")
                                .class(verified_class.as_str())
                                .text(t.t(verified_key, &[])),
                        ),
                ),
        )
        .child(
            Fragment::new("div")
                .class("merchant-stats")
                .child(stat(format!("€{:.0}", volume), t.t("monthly_volume", &[])))
                .child(stat(transactions.to_string(), t.t("transactions", &[]))),
        )
        .child(
            Fragment::new("div")
                .class("merchant-actions")
                .child(
                    action_button("btn btn-secondary", "edit-merchant", &merchant.merchant_id, "fas fa-edit")
                        .text(t.t("edit", &[])),
                )
                .child(
                    action_button("btn btn-primary", "view-merchant", &merchant.merchant_id, "fas fa-eye")
                        .text(t.t("view", &[])),
                ),
        )
}

/// Row of the recent invoices table.
pub fn invoice_row(t: &Translator, invoice: &Invoice) -> Fragment {
    Fragment::new("tr")
        .child(cell(&invoice.invoice_number))
        .child(cell(&invoice.merchant_id))
        .child(cell(format_currency(invoice.total_amount)))
        .child(
            Fragment::new("td").child(
                Fragment::new("span")
                    .class("status")
                    .class(&invoice.status)
                    .text(t.t(&invoice.status, &[])),
            ),
        )
        .child(cell(&invoice.due_date))
        .child(
            Fragment::new("td").child(
                Fragment::new("button")
                    .class("btn btn-sm")
                    .attr(ACTION_ATTR, "view-invoice")
                    .attr(ID_ATTR, &invoice.invoice_number)
                    .text(t.t("view", &[])),
            ),
        )
}

/// Option of the fee calculator's merchant selector.
pub fn merchant_option(merchant: &Merchant) -> Fragment {
    Fragment::new("option")
        .attr("value", &merchant.merchant_id)
        .text(format!("{} ({})", merchant.business_name, merchant.merchant_id))
}

/// The selector's first option, meaning "no merchant".
pub fn default_rates_option(t: &Translator) -> Fragment {
    Fragment::new("option")
        .attr("value", "")
        .text(t.t("default_rates", &[]))
}

/// Paragraph shown in the generic modal.
pub fn modal_message(text: &str) -> Fragment {
    Fragment::new("p").text(text)
}

fn form_field(label: String, control: Fragment) -> Fragment {
    Fragment::new("div")
        .class("form-group")
        .child(Fragment::new("label").text(label))
        .child(control)
}

fn input(name: &str, kind: &str) -> Fragment {
    Fragment::new("input").attr("type", kind).attr("name", name)
}

fn select(name: &str, options: &[(&str, String)]) -> Fragment {
    Fragment::new("select").attr("name", name).children(
        options
            .iter()
            .map(|(value, label)| Fragment::new("option").attr("value", value).text(label.clone())),
    )
}

fn form_actions(t: &Translator, submit_key: &str) -> Fragment {
    Fragment::new("div")
        .class("form-actions")
        .child(
            Fragment::new("button")
                .class("btn btn-secondary")
                .attr(ACTION_ATTR, "close-modal")
                .text(t.t("cancel", &[])),
        )
        .child(
            Fragment::new("button")
                .class("btn btn-primary")
                .attr("type", "submit")
                .text(t.t(submit_key, &[])),
        )
}

/// Form of the "new transaction" modal.
pub fn transaction_form(t: &Translator) -> Fragment {
    let currencies = [("EUR", "EUR".to_string()), ("USD", "USD".to_string()), ("GBP", "GBP".to_string())];
    let methods: Vec<(&str, String)> = KNOWN_PAYMENT_METHODS
        .iter()
        .map(|m| (*m, t.t(m, &[])))
        .collect();

    Fragment::new("form")
        .attr(ACTION_ATTR, "create-transaction")
        .child(form_field(t.t("merchant", &[]), input("merchant_id", "text")))
        .child(form_field(t.t("amount", &[]), input("amount", "number").attr("step", "0.01")))
        .child(form_field("Currency".to_string(), select("currency", &currencies)))
        .child(form_field(t.t("payment_method", &[]), select("payment_method", &methods)))
        .child(form_field(t.t("customer", &[]), input("customer_email", "email")))
        .child(form_field("Description".to_string(), Fragment::new("textarea").attr("name", "description")))
        .child(form_actions(t, "new_transaction"))
}

/// Form of the "add merchant" modal.
pub fn merchant_form(t: &Translator) -> Fragment {
    let types: Vec<(&str, String)> = [
        ("E-commerce", "type_ecommerce"),
        ("Retail", "type_retail"),
        ("Services", "type_services"),
        ("SaaS", "type_saas"),
    ]
    .iter()
    .map(|(value, key)| (*value, t.t(key, &[])))
    .collect();
    let countries = [
        ("DE", "Germany".to_string()),
        ("FR", "France".to_string()),
        ("ES", "Spain".to_string()),
        ("IT", "Italy".to_string()),
        ("NL", "Netherlands".to_string()),
    ];

    Fragment::new("form")
        .attr(ACTION_ATTR, "create-merchant")
        .child(form_field(t.t("label_business_name", &[]), input("business_name", "text")))
        .child(form_field(t.t("label_email", &[]), input("contact_email", "email")))
        .child(form_field(t.t("label_business_type", &[]), select("business_type", &types)))
        .child(form_field("Country".to_string(), select("country", &countries)))
        .child(form_actions(t, "add_merchant"))
}
