//! Dashboard backend client
//!
//! Implements the backend API for:
//! - Latest records (`/api/cryptos`)
//! - Manual re-scrape (`/api/scrape-now`)
//! - Per-symbol price history (`/api/crypto/{symbol}/history`)
//!
//! No retries: every call is independent and the scheduler polls again later.

use std::future::Future;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::types::{CryptosResponse, HistoryPoint, HistoryResponse, ScrapeResponse};

/// Backend operations the controller depends on
pub trait CryptoApi {
    /// Fetch the latest records envelope
    fn fetch_cryptos(&self) -> impl Future<Output = Result<CryptosResponse>>;

    /// Ask the backend to re-scrape prices now
    fn trigger_scrape(&self) -> impl Future<Output = Result<ScrapeResponse>>;
}

/// HTTP client for the dashboard backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create new client for the configured backend
    pub fn new(config: Config) -> Result<Self> {
        #[allow(unused_mut)]
        let mut builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(std::time::Duration::from_secs(30));
        }

        Ok(Self {
            config,
            http: builder.build()?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get stored price history for a symbol, newest first
    pub async fn fetch_history(&self, symbol: &str) -> Result<Vec<HistoryPoint>> {
        let response: HistoryResponse = self.get(&self.config.history_url(symbol)).await?;
        response.into_points()
    }

    /// Perform GET request and decode the JSON envelope
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode_envelope(status.as_u16(), status.is_success(), &body)
    }
}

impl CryptoApi for ApiClient {
    async fn fetch_cryptos(&self) -> Result<CryptosResponse> {
        self.get(&self.config.cryptos_url()).await
    }

    async fn trigger_scrape(&self) -> Result<ScrapeResponse> {
        self.get(&self.config.scrape_url()).await
    }
}

/// Decode a response body
///
/// The backend reports its own failures as `500` with a `{success: false}`
/// envelope, so the body is decoded before the status is considered.
fn decode_envelope<T: DeserializeOwned>(status: u16, is_success: bool, body: &str) -> Result<T> {
    match serde_json::from_str(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !is_success => Err(DashboardError::Protocol(format!("HTTP {status}"))),
        Err(e) => Err(DashboardError::Parse(e)),
    }
}
