//! Crypto Dashboard - live cryptocurrency prices in the browser and terminal
//!
//! Polls the dashboard backend for the latest scraped records and renders
//! summary statistics plus a ranked table.
//!
//! # Architecture
//! - `DashboardController` owns the session: loads, manual refresh,
//!   auto-refresh timer, stale-response ordering
//! - `CryptoApi`, `DashboardView` and `Runtime` are the seams to the
//!   backend, the display and the event loop
//! - Browser host (wasm32): DOM view and gloo timers, entry at `start`
//! - Terminal host: tokio `LocalSet`, stdout view, clap CLI
//!
//! # Features
//! - Compact currency and percentage formatting
//! - Relative "time ago" labels
//! - Auto-refresh every 120 seconds, manual re-scrape with toasts

#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::future_not_send)] // Single-threaded hosts by construction

pub mod client;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod logging;
pub mod runtime;
pub mod stats;
pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
mod web;

pub use client::{ApiClient, CryptoApi};
pub use config::Config;
pub use controller::{DashboardController, DashboardState, LoadOutcome, RefreshOutcome};
pub use dashboard::{DashboardView, StatsDisplay, TableRow, Toast, ToastKind, dashboard_html};
pub use error::{DashboardError, Result};
pub use runtime::Runtime;
pub use stats::DashboardStats;
pub use types::{CryptoRecord, CryptosResponse, HistoryPoint, ScrapeResponse, Snapshot};
