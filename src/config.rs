//! Configuration management for the dashboard

use std::time::Duration;

use crate::error::{DashboardError, Result};

/// Backend used when the page is not served from a local host
pub const REMOTE_API_BASE: &str = "https://deploython2171025.onrender.com";

/// Backend the terminal host talks to when nothing is configured
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:5000";

/// Hostnames that talk to the same-origin backend
const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin without trailing slash
    pub api_base: String,

    /// Auto-refresh period
    pub refresh_interval: Duration,

    /// Pause between a successful re-scrape and the reload
    pub scrape_grace: Duration,

    /// How long a toast stays on screen
    pub toast_duration: Duration,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: LOCAL_API_BASE.to_string(),
            refresh_interval: Duration::from_millis(120_000),
            scrape_grace: Duration::from_millis(1_000),
            toast_duration: Duration::from_millis(3_000),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Configuration for a page served from `hostname`
    ///
    /// Local pages use their own origin; anything else goes to the remote backend.
    pub fn for_page(hostname: &str, origin: &str) -> Self {
        let api_base = if LOCAL_HOSTS.contains(&hostname) {
            origin.trim_end_matches('/').to_string()
        } else {
            REMOTE_API_BASE.to_string()
        };

        Self {
            api_base,
            ..Self::default()
        }
    }

    /// Load configuration from `CRYPTO_DASHBOARD_*` environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let config = Self {
            api_base: var("CRYPTO_DASHBOARD_API_BASE")
                .map_or(defaults.api_base, |v| v.trim().trim_end_matches('/').to_string()),

            refresh_interval: var("CRYPTO_DASHBOARD_REFRESH_SECS")
                .map(|v| v.parse().map(Duration::from_secs).unwrap_or(defaults.refresh_interval))
                .unwrap_or(defaults.refresh_interval),

            scrape_grace: var("CRYPTO_DASHBOARD_SCRAPE_GRACE_MS")
                .map(|v| v.parse().map(Duration::from_millis).unwrap_or(defaults.scrape_grace))
                .unwrap_or(defaults.scrape_grace),

            toast_duration: var("CRYPTO_DASHBOARD_TOAST_MS")
                .map(|v| v.parse().map(Duration::from_millis).unwrap_or(defaults.toast_duration))
                .unwrap_or(defaults.toast_duration),

            log_level: var("CRYPTO_DASHBOARD_LOG").unwrap_or(defaults.log_level),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval.is_zero() {
            return Err(DashboardError::Config(
                "refresh_interval must be positive".into(),
            ));
        }
        if !self.api_base.is_empty()
            && !self.api_base.starts_with("http://")
            && !self.api_base.starts_with("https://")
        {
            return Err(DashboardError::Config(format!(
                "api_base must be an http(s) origin, got {:?}",
                self.api_base
            )));
        }
        Ok(())
    }

    pub fn cryptos_url(&self) -> String {
        format!("{}/api/cryptos", self.api_base)
    }

    pub fn scrape_url(&self) -> String {
        format!("{}/api/scrape-now", self.api_base)
    }

    pub fn history_url(&self, symbol: &str) -> String {
        format!(
            "{}/api/crypto/{}/history",
            self.api_base,
            symbol.trim().to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.refresh_interval, Duration::from_secs(120));
        assert_eq!(config.scrape_grace, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_local_page_uses_own_origin() {
        let config = Config::for_page("localhost", "http://localhost:5000/");
        assert_eq!(config.cryptos_url(), "http://localhost:5000/api/cryptos");

        let config = Config::for_page("127.0.0.1", "http://127.0.0.1:8080");
        assert_eq!(config.scrape_url(), "http://127.0.0.1:8080/api/scrape-now");
    }

    #[test]
    fn test_deployed_page_uses_remote_backend() {
        let config = Config::for_page("dashboard.example.com", "https://dashboard.example.com");
        assert_eq!(config.api_base, REMOTE_API_BASE);
    }

    #[test]
    fn test_history_url_uppercases_symbol() {
        let config = Config::default();
        assert_eq!(
            config.history_url("btc"),
            "http://127.0.0.1:5000/api/crypto/BTC/history"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config {
            refresh_interval: Duration::ZERO,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));

        let config = Config {
            api_base: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
