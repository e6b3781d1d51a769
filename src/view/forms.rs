//! Local validation of form input. Nothing here reaches the network:
//! a form that fails validation is never submitted.

use crate::error::{DashboardError, Result};
use crate::models::{BillingConfig, FeeRequest, NewMerchant, NewTransaction};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Submitted form fields, by input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    /// Trimmed value of a field; blank counts as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, name: &str) -> Result<String> {
        self.get(name)
            .map(str::to_string)
            .ok_or_else(|| invalid(name, "is required"))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FormData {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FormData::new(), |form, (name, value)| form.with(name, value))
    }
}

fn invalid(field: &str, reason: &str) -> DashboardError {
    DashboardError::InvalidInput {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

/// A strictly positive, finite amount.
pub fn parse_amount(field: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or_else(|| invalid(field, "is required"))?;
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(invalid(field, "must be a positive number")),
    }
}

fn parse_rate(field: &str, raw: Option<&str>) -> Result<f64> {
    let raw = raw.ok_or_else(|| invalid(field, "is required"))?;
    match raw.parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate >= 0.0 => Ok(rate),
        _ => Err(invalid(field, "must be a non-negative number")),
    }
}

fn email(form: &FormData, name: &str) -> Result<Option<String>> {
    match form.get(name) {
        Some(value) if value.contains('@') => Ok(Some(value.to_string())),
        Some(_) => Err(invalid(name, "must be an email address")),
        None => Ok(None),
    }
}

pub fn new_transaction(form: &FormData) -> Result<NewTransaction> {
    Ok(NewTransaction {
        merchant_id: form.required("merchant_id")?,
        amount: parse_amount("amount", form.get("amount"))?,
        currency: form.get("currency").unwrap_or("EUR").to_string(),
        payment_method: form.required("payment_method")?,
        customer_email: email(form, "customer_email")?,
        description: form.get("description").map(str::to_string),
    })
}

pub fn new_merchant(form: &FormData) -> Result<NewMerchant> {
    let business_name = form.required("business_name")?;
    let contact_email = email(form, "contact_email")?
        .ok_or_else(|| invalid("contact_email", "is required"))?;
    Ok(NewMerchant {
        business_name,
        contact_email,
        business_type: form.required("business_type")?,
        country: form.required("country")?,
    })
}

/// Fee calculator input. `card_type` is the selector value (`"true"` for
/// European cards); an empty merchant means default rates.
pub fn fee_request(amount: Option<&str>, card_type: Option<&str>, merchant: Option<&str>) -> Result<FeeRequest> {
    Ok(FeeRequest {
        amount: parse_amount("amount", amount.map(str::trim).filter(|a| !a.is_empty()))?,
        is_european_card: card_type.map(str::trim) == Some("true"),
        merchant_id: merchant
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string),
    })
}

pub fn billing_config(form: &FormData) -> Result<BillingConfig> {
    Ok(BillingConfig {
        european_card_percentage: parse_rate("european_card_percentage", form.get("european_card_percentage"))?,
        european_card_fixed_fee: parse_rate("european_card_fixed_fee", form.get("european_card_fixed_fee"))?,
        non_european_card_percentage: parse_rate(
            "non_european_card_percentage",
            form.get("non_european_card_percentage"),
        )?,
        non_european_card_fixed_fee: parse_rate(
            "non_european_card_fixed_fee",
            form.get("non_european_card_fixed_fee"),
        )?,
        chargeback_fee: parse_rate("chargeback_fee", form.get("chargeback_fee"))?,
        refund_fee: parse_rate("refund_fee", form.get("refund_fee"))?,
        billing_cycle: form.get("billing_cycle").unwrap_or("monthly").to_string(),
        auto_billing_enabled: form.get("auto_billing_enabled") == Some("true"),
    })
}

/// Both ends of a revenue range, `YYYY-MM-DD`, start not after end.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> Result<(NaiveDate, NaiveDate)> {
    let parse = |field: &str, raw: Option<&str>| -> Result<NaiveDate> {
        let raw = raw
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or_else(|| invalid(field, "is required"))?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid(field, "must be a YYYY-MM-DD date"))
    };

    let start = parse("start_date", start)?;
    let end = parse("end_date", end)?;
    if start > end {
        return Err(invalid("start_date", "must not be after the end date"));
    }
    Ok((start, end))
}
