//! Summary statistics for the stat cards

use crate::format::format_currency;
use crate::types::CryptoRecord;

/// Aggregates shown above the table
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub gainers: usize,
    pub losers: usize,
    pub total_market_cap: f64,
}

impl DashboardStats {
    /// Count gainers/losers and sum market caps. Flat records are neither.
    pub fn from_records(records: &[CryptoRecord]) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut stats, record| {
                if record.change_24h > 0.0 {
                    stats.gainers += 1;
                } else if record.change_24h < 0.0 {
                    stats.losers += 1;
                }
                if record.market_cap.is_finite() {
                    stats.total_market_cap += record.market_cap;
                }
                stats
            },
        )
    }

    pub fn total_market_cap_display(&self) -> String {
        format_currency(self.total_market_cap)
    }
}
