//! Display seam and view models
//!
//! The controller only ever hands plain text to a [`DashboardView`]. Each
//! host decides how to put that text on screen.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::format::{ChangeBadge, format_change, format_currency, format_time_ago};
use crate::stats::DashboardStats;
use crate::types::CryptoRecord;

/// Icon shown when a record has no usable image
pub const PLACEHOLDER_ICON: &str = "https://via.placeholder.com/32";

/// Toast flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient, auto-dismissing status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            duration,
        }
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
            duration,
        }
    }
}

/// One table row, fully formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub rank: usize,
    pub name: String,
    pub symbol: String,
    pub image_src: String,
    pub price: String,
    pub change: ChangeBadge,
    pub market_cap: String,
    pub volume: String,
    pub updated: String,
}

impl TableRow {
    pub fn from_record(rank: usize, record: &CryptoRecord, now: DateTime<Utc>) -> Self {
        Self {
            rank,
            name: record.name.clone(),
            symbol: record.symbol.clone(),
            image_src: image_src(record.image_url.as_deref()),
            price: format_currency(record.price),
            change: format_change(record.change_24h),
            market_cap: format_currency(record.market_cap),
            volume: format_currency(record.volume_24h),
            updated: format_time_ago(record.last_updated.as_deref(), now),
        }
    }

    /// Rows in backend order, ranked from 1
    pub fn build_all(records: &[CryptoRecord], now: DateTime<Utc>) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| Self::from_record(i + 1, record, now))
            .collect()
    }
}

/// Only http(s) images are loaded; anything else gets the placeholder
fn image_src(url: Option<&str>) -> String {
    match url.map(str::trim) {
        Some(url) if url.starts_with("https://") || url.starts_with("http://") => url.to_string(),
        _ => PLACEHOLDER_ICON.to_string(),
    }
}

/// Stat card values, fully formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDisplay {
    pub total_cryptos: String,
    pub gainers: String,
    pub losers: String,
    pub total_market_cap: String,
}

impl From<&DashboardStats> for StatsDisplay {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_cryptos: stats.total.to_string(),
            gainers: stats.gainers.to_string(),
            losers: stats.losers.to_string(),
            total_market_cap: stats.total_market_cap_display(),
        }
    }
}

/// Display surface driven by the controller
///
/// Methods take `&self`: views are shared handles (DOM nodes, stdout) and
/// keep any bookkeeping behind interior mutability.
pub trait DashboardView {
    /// Show the loading panel, hide the table and error panels
    fn show_loading(&self);

    /// Show the error panel with `message`, hide the rest
    fn show_error(&self, message: &str);

    /// Fill the four stat cards
    fn render_stats(&self, stats: &StatsDisplay);

    /// Replace every table row with `rows`
    fn render_table(&self, rows: &[TableRow]);

    /// Hide the loading panel and show the table
    fn show_table(&self);

    /// Relative time of the backend snapshot
    fn set_last_update(&self, text: &str);

    /// Busy state of the refresh control; `false` restores its original label
    fn set_refreshing(&self, busy: bool);

    /// Show a toast; the view dismisses it after `toast.duration`
    fn notify(&self, toast: &Toast);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bitcoin(image_url: Option<&str>) -> CryptoRecord {
        CryptoRecord {
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            price: 65_000.0,
            change_24h: 2.5,
            market_cap: 1.2e12,
            volume_24h: 3e10,
            image_url: image_url.map(String::from),
            last_updated: Some("2025-10-17T11:57:00Z".to_string()),
        }
    }

    #[test]
    fn test_row_formatting() {
        let now = Utc.with_ymd_and_hms(2025, 10, 17, 12, 0, 0).unwrap();
        let row = TableRow::from_record(1, &bitcoin(Some("https://cdn.example.com/btc.png")), now);

        assert_eq!(row.rank, 1);
        assert_eq!(row.price, "$65.00K");
        assert_eq!(row.change.text, "▲ 2.50%");
        assert_eq!(row.market_cap, "$1.20T");
        assert_eq!(row.volume, "$30.00B");
        assert_eq!(row.updated, "3 min ago");
        assert_eq!(row.image_src, "https://cdn.example.com/btc.png");
    }

    #[test]
    fn test_non_http_images_fall_back_to_placeholder() {
        let now = Utc::now();
        for url in [None, Some(""), Some("javascript:alert(1)"), Some("data:image/png;base64,AAAA")] {
            let row = TableRow::from_record(1, &bitcoin(url), now);
            assert_eq!(row.image_src, PLACEHOLDER_ICON);
        }
    }

    #[test]
    fn test_ranks_follow_input_order() {
        let mut eth = bitcoin(None);
        eth.symbol = "ETH".to_string();
        let rows = TableRow::build_all(&[bitcoin(None), eth], Utc::now());
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].symbol, "ETH");
    }

    #[test]
    fn test_stats_display() {
        let stats = DashboardStats {
            total: 1,
            gainers: 1,
            losers: 0,
            total_market_cap: 1.2e12,
        };
        let display = StatsDisplay::from(&stats);
        assert_eq!(display.total_cryptos, "1");
        assert_eq!(display.total_market_cap, "$1.20T");
    }
}
