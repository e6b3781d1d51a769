use thiserror::Error;

/// Errors surfaced by the dashboard core.
///
/// Most of these never reach the user: list loaders swallow them and render
/// demo data instead. Only form validation and server rejections end up in
/// a blocking notification.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The request never produced an HTTP response (DNS, refused, timeout).
    #[error("network error calling {endpoint}: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{endpoint} rejected the request ({status}){}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Rejected {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },

    /// A `{success: false, error}` envelope.
    #[error("{endpoint} reported failure: {message}")]
    Envelope { endpoint: String, message: String },

    /// Local form validation failed; nothing was sent.
    #[error("invalid value for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Required document elements are absent.
    #[error("document is missing required elements: {}", .0.join(", "))]
    MissingElements(Vec<String>),

    /// A locale catalog could not be parsed.
    #[error("locale catalog '{language}' is malformed: {reason}")]
    Catalog { language: String, reason: String },

    /// The preference store could not be read or written.
    #[error("preference store error: {0}")]
    Storage(String),
}

impl DashboardError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Network failures, rate limiting and 5xx responses are retryable;
    /// other rejections and local errors are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            DashboardError::Network { .. } => true,
            DashboardError::Rejected { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// The message the server supplied with a rejection, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            DashboardError::Rejected { message, .. } => message.as_deref(),
            DashboardError::Envelope { message, .. } => Some(message),
            _ => None,
        }
    }
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
