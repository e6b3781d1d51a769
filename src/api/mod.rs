//! REST API access.

mod client;
mod envelope;

pub use client::{
    ApiClient, RevenueQuery, FEE_CALCULATOR, MERCHANTS, PAYMENTS, REVENUE_TOTAL, SET_LANGUAGE,
};
pub use envelope::{decode_envelope, decode_list};
