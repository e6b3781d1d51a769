use super::envelope::{decode_envelope, decode_list, error_message};
use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::models::{
    FeeCalculation, FeeRequest, Merchant, NewMerchant, NewTransaction, RevenueSummary, Transaction,
};
use crate::retry::{with_retry_if, RetryConfig};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const PAYMENTS: &str = "/api/payments";
pub const MERCHANTS: &str = "/api/merchants";
pub const REVENUE_TOTAL: &str = "/api/billing/revenue/total";
pub const FEE_CALCULATOR: &str = "/api/billing/fee-calculator";
pub const SET_LANGUAGE: &str = "/api/set-language";

/// Period selector for the revenue endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueQuery {
    Month,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl RevenueQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            RevenueQuery::Month => vec![("period", "month".to_string())],
            RevenueQuery::Custom { start, end } => vec![
                ("period", "custom".to_string()),
                ("start_date", start.format("%Y-%m-%d").to_string()),
                ("end_date", end.format("%Y-%m-%d").to_string()),
            ],
        }
    }
}

#[derive(Debug, Serialize)]
struct SetLanguageRequest<'a> {
    language: &'a str,
}

/// Client for the dashboard's REST API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|source| DashboardError::Network {
                endpoint: config.api_base_url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            retry: RetryConfig::list_fetch(),
        })
    }

    /// Override the retry policy used for list fetches.
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/payments[?limit=N]`
    pub async fn payments(&self, limit: Option<u32>) -> Result<Vec<Transaction>> {
        let query: Vec<(&str, String)> = limit.map(|n| ("limit", n.to_string())).into_iter().collect();
        let body = self.get_with_retry("Fetch payments", PAYMENTS, &query).await?;
        decode_list(PAYMENTS, body)
    }

    /// `GET /api/merchants`
    pub async fn merchants(&self) -> Result<Vec<Merchant>> {
        let body = self.get_with_retry("Fetch merchants", MERCHANTS, &[]).await?;
        decode_list(MERCHANTS, body)
    }

    /// `GET /api/billing/revenue/total`
    pub async fn revenue_total(&self, query: RevenueQuery) -> Result<RevenueSummary> {
        let body = self
            .get_with_retry("Fetch revenue", REVENUE_TOTAL, &query.params())
            .await?;
        decode_envelope(REVENUE_TOTAL, body)
    }

    /// `POST /api/billing/fee-calculator`
    pub async fn calculate_fee(&self, request: &FeeRequest) -> Result<FeeCalculation> {
        let body = self.post(FEE_CALCULATOR, request).await?;
        decode_envelope(FEE_CALCULATOR, json_body(FEE_CALCULATOR, &body)?)
    }

    /// `POST /api/payments`; returns the created record as sent back, or
    /// `Null` for an empty body.
    pub async fn create_payment(&self, transaction: &NewTransaction) -> Result<Value> {
        let body = self.post(PAYMENTS, transaction).await?;
        created_body(PAYMENTS, &body)
    }

    /// `POST /api/merchants`; same response handling as payments.
    pub async fn create_merchant(&self, merchant: &NewMerchant) -> Result<Value> {
        let body = self.post(MERCHANTS, merchant).await?;
        created_body(MERCHANTS, &body)
    }

    /// `POST /api/set-language`. The response body is ignored.
    pub async fn set_language(&self, code: &str) -> Result<()> {
        self.post(SET_LANGUAGE, &SetLanguageRequest { language: code })
            .await
            .map(|_| ())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get_with_retry(
        &self,
        operation: &str,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Value> {
        with_retry_if(
            &self.retry,
            operation,
            || async move {
                let response = self
                    .client
                    .get(self.url(endpoint))
                    .query(query)
                    .send()
                    .await
                    .map_err(|source| DashboardError::Network {
                        endpoint: endpoint.to_string(),
                        source,
                    })?;
                let body = read_success(endpoint, response).await?;
                json_body(endpoint, &body)
            },
            DashboardError::is_retryable,
        )
        .await
    }

    async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<String> {
        debug!("POST {}", endpoint);
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|source| DashboardError::Network {
                endpoint: endpoint.to_string(),
                source,
            })?;
        read_success(endpoint, response).await
    }
}

/// Body of a 2xx response, or [`DashboardError::Rejected`] with the
/// server's `error` text when it supplied one.
async fn read_success(endpoint: &str, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| DashboardError::Network {
            endpoint: endpoint.to_string(),
            source,
        })?;

    if status.is_success() {
        Ok(body)
    } else {
        Err(DashboardError::Rejected {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

fn created_body(endpoint: &str, body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    json_body(endpoint, body)
}

fn json_body(endpoint: &str, body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| DashboardError::Decode {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&Config::for_api(&server.uri()))
            .unwrap()
            .with_retry(RetryConfig::new(2, Duration::from_millis(10)))
    }

    #[tokio::test]
    async fn test_payments_with_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PAYMENTS))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"transaction_id": "txn_1", "merchant_id": "m_1", "amount": 10.0, "status": "completed"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let payments = client_for(&server).payments(Some(5)).await.unwrap();
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].transaction_id, "txn_1");
    }

    #[tokio::test]
    async fn test_merchants_enveloped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(MERCHANTS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"merchant_id": "m_1", "business_name": "Shop", "is_active": true}]
            })))
            .mount(&server)
            .await;

        let merchants = client_for(&server).merchants().await.unwrap();
        assert_eq!(merchants[0].business_name, "Shop");
        assert!(merchants[0].is_active);
    }

    #[tokio::test]
    async fn test_server_error_is_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PAYMENTS))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let err = client_for(&server).payments(None).await.unwrap_err();
        assert!(matches!(err, DashboardError::Rejected { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(MERCHANTS))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).merchants().await.unwrap_err();
        assert!(matches!(err, DashboardError::Rejected { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_custom_revenue_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(REVENUE_TOTAL))
            .and(query_param("period", "custom"))
            .and(query_param("start_date", "2025-01-01"))
            .and(query_param("end_date", "2025-01-16"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"total_revenue": 500.0, "transaction_fees": 400.0, "active_merchants": 2}
            })))
            .mount(&server)
            .await;

        let query = RevenueQuery::Custom {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(),
        };
        let revenue = client_for(&server).revenue_total(query).await.unwrap();
        assert_eq!(revenue.total_revenue, 500.0);
        assert_eq!(revenue.active_merchants, 2);
        assert_eq!(revenue.total_transactions, 0);
    }

    #[tokio::test]
    async fn test_revenue_requires_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(REVENUE_TOTAL))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .revenue_total(RevenueQuery::Month)
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_rejection_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MERCHANTS))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "contact_email is required"})),
            )
            .mount(&server)
            .await;

        let merchant = NewMerchant {
            business_name: "Shop".to_string(),
            contact_email: String::new(),
            business_type: "Retail".to_string(),
            country: "DE".to_string(),
        };
        let err = client_for(&server).create_merchant(&merchant).await.unwrap_err();
        assert_eq!(err.server_message(), Some("contact_email is required"));
    }

    #[tokio::test]
    async fn test_fee_calculation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(FEE_CALCULATOR))
            .and(body_json(json!({"amount": 100.0, "is_european_card": true, "merchant_id": null})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": {"amount": 100.0, "fee": 0.6, "net_amount": 99.4}
            })))
            .mount(&server)
            .await;

        let request = FeeRequest {
            amount: 100.0,
            is_european_card: true,
            merchant_id: None,
        };
        let result = client_for(&server).calculate_fee(&request).await.unwrap();
        assert_eq!(result.fee, 0.6);
        assert_eq!(result.net_amount, 99.4);
    }

    #[tokio::test]
    async fn test_set_language_posts_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SET_LANGUAGE))
            .and(body_json(json!({"language": "fr"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        tokio_test::assert_ok!(client_for(&server).set_language("fr").await);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = ApiClient::new(&Config::for_api("http://127.0.0.1:9"))
            .unwrap()
            .with_retry(RetryConfig::single_attempt());

        let err = client.merchants().await.unwrap_err();
        assert!(matches!(err, DashboardError::Network { .. }));
    }
}
