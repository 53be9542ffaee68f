//! Error types for the dashboard
//!
//! Uses thiserror for ergonomic error definitions.
//! Every failure is recoverable: the controller turns each one into an
//! error panel or a toast, never a panic.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The request never completed (connection refused, DNS, CORS, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered, but reported failure or returned no usable data
    #[error("{0}")]
    Protocol(String),

    /// Malformed response body
    #[error("Invalid response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Browser host errors (missing slot, failed DOM call)
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Network(err.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DashboardError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        DashboardError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_shows_backend_message() {
        let err = DashboardError::Protocol("rate limited".to_string());
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid response"));
    }
}
