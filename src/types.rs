//! Wire types for the dashboard backend
//!
//! The backend serves SQLite rows as JSON. Numeric columns are nullable, so
//! every number decodes through [`null_as_zero`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{DashboardError, Result};

/// One cryptocurrency's snapshot as served by `/api/cryptos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoRecord {
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,
    /// 24h change in percent
    #[serde(default, deserialize_with = "null_as_zero")]
    pub change_24h: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub volume_24h: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Envelope of `GET /api/cryptos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptosResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<CryptoRecord>>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope of `GET /api/scrape-now`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One stored price point from `/api/crypto/{symbol}/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub market_cap: f64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub volume_24h: f64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Envelope of `GET /api/crypto/{symbol}/history`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<HistoryPoint>>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A validated, non-empty response ready to be committed
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub records: Vec<CryptoRecord>,
    pub timestamp: Option<String>,
}

impl TryFrom<CryptosResponse> for Snapshot {
    type Error = DashboardError;

    fn try_from(response: CryptosResponse) -> Result<Self> {
        if !response.success {
            return Err(DashboardError::Protocol(
                response
                    .error
                    .unwrap_or_else(|| "Failed to load data".to_string()),
            ));
        }

        match response.data {
            None => Err(DashboardError::Protocol("Failed to load data".to_string())),
            Some(records) if records.is_empty() => {
                Err(DashboardError::Protocol("No data available".to_string()))
            }
            Some(records) => Ok(Snapshot {
                records,
                timestamp: response.timestamp,
            }),
        }
    }
}

impl ScrapeResponse {
    /// Turn a reported failure into an error
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(DashboardError::Protocol(
                self.error.unwrap_or_else(|| "Refresh failed".to_string()),
            ))
        }
    }
}

impl HistoryResponse {
    /// Points newest-first, or the backend's error
    pub fn into_points(self) -> Result<Vec<HistoryPoint>> {
        if !self.success {
            return Err(DashboardError::Protocol(
                self.error
                    .unwrap_or_else(|| "Failed to load history".to_string()),
            ));
        }
        Ok(self.data.unwrap_or_default())
    }
}

/// Deserializes a nullable number, mapping `null` to `0.0`
pub fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
