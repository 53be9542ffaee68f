//! Dashboard controller
//!
//! Owns the page session: the committed records, the request sequence
//! counter and the auto-refresh timer. Every entry point handles its own
//! errors and reports them through the view, so nothing propagates to
//! the host.
//!
//! # Lifecycle
//! - `init`: first load plus the auto-refresh timer
//! - `manual_refresh`: re-scrape, grace period, reload, toast
//! - `teardown`: cancel the timer
//!
//! # Ordering
//! Each load takes the next sequence number before it is dispatched. A
//! response is committed only if no newer load was dispatched while it was
//! in flight, so overlapping polls and manual refreshes cannot roll the
//! table back to older data.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::client::CryptoApi;
use crate::config::Config;
use crate::dashboard::{DashboardView, StatsDisplay, TableRow, Toast};
use crate::error::DashboardError;
use crate::format::format_time_ago;
use crate::runtime::Runtime;
use crate::stats::DashboardStats;
use crate::types::{CryptoRecord, Snapshot};

const REFRESH_SUCCESS: &str = "✅ Data refreshed successfully!";
const REFRESH_FAILURE: &str = "❌ Failed to refresh data";

/// Last committed backend snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Records in backend rank order
    pub records: Vec<CryptoRecord>,
    /// Backend timestamp of the response
    pub timestamp: Option<String>,
    /// Sequence number of the request that produced it (0 = nothing yet)
    pub sequence: u64,
}

/// Result of one data load
#[derive(Debug)]
pub enum LoadOutcome {
    /// Response committed and rendered
    Rendered,
    /// A newer load was dispatched before this one resolved; result dropped
    Superseded,
    /// Load failed; the error panel is showing
    Failed(DashboardError),
}

/// Result of a manual refresh
#[derive(Debug)]
pub enum RefreshOutcome {
    /// Scrape accepted and the reload rendered (or was superseded)
    Refreshed,
    /// Scrape or reload failed; an error toast is showing
    Failed(DashboardError),
    /// Another manual refresh is still running
    AlreadyRunning,
}

/// Session controller shared by the browser and terminal hosts
pub struct DashboardController<A, V, R: Runtime> {
    api: A,
    view: V,
    runtime: R,
    config: Config,
    state: RefCell<DashboardState>,
    latest_request: Cell<u64>,
    refreshing: Cell<bool>,
    refresh_timer: RefCell<Option<R::Interval>>,
}

/// Restores the refresh control however `manual_refresh` exits
struct RefreshGuard<'a, V: DashboardView> {
    view: &'a V,
    refreshing: &'a Cell<bool>,
}

impl<V: DashboardView> Drop for RefreshGuard<'_, V> {
    fn drop(&mut self) {
        self.refreshing.set(false);
        self.view.set_refreshing(false);
    }
}

impl<A, V, R> DashboardController<A, V, R>
where
    A: CryptoApi,
    V: DashboardView,
    R: Runtime,
{
    pub fn new(api: A, view: V, runtime: R, config: Config) -> Self {
        Self {
            api,
            view,
            runtime,
            config,
            state: RefCell::new(DashboardState::default()),
            latest_request: Cell::new(0),
            refreshing: Cell::new(false),
            refresh_timer: RefCell::new(None),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Copy of the committed state
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn is_auto_refreshing(&self) -> bool {
        self.refresh_timer.borrow().is_some()
    }

    /// Fetch the latest records and render them, or show the error panel
    pub async fn load(&self) -> LoadOutcome {
        let sequence = self.latest_request.get() + 1;
        self.latest_request.set(sequence);

        self.view.show_loading();

        let result = self
            .api
            .fetch_cryptos()
            .await
            .and_then(Snapshot::try_from);

        let latest = self.latest_request.get();
        if sequence != latest {
            debug!(sequence, latest, "Discarding superseded response");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(snapshot) => {
                self.commit(sequence, snapshot);
                LoadOutcome::Rendered
            }
            Err(e) => {
                warn!(sequence, error = %e, "Error loading crypto data");
                self.view.show_error(&e.to_string());
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Replace the state wholesale and redraw everything
    fn commit(&self, sequence: u64, snapshot: Snapshot) {
        let now = self.runtime.now();
        let stats = DashboardStats::from_records(&snapshot.records);
        let rows = TableRow::build_all(&snapshot.records, now);

        self.view.render_stats(&StatsDisplay::from(&stats));
        self.view.render_table(&rows);
        if let Some(timestamp) = snapshot.timestamp.as_deref() {
            self.view
                .set_last_update(&format_time_ago(Some(timestamp), now));
        }
        self.view.show_table();

        *self.state.borrow_mut() = DashboardState {
            records: snapshot.records,
            timestamp: snapshot.timestamp,
            sequence,
        };

        info!(
            sequence,
            records = stats.total,
            gainers = stats.gainers,
            losers = stats.losers,
            "Dashboard updated"
        );
    }

    /// Re-scrape on the backend, wait for it to persist, then reload
    pub async fn manual_refresh(&self) -> RefreshOutcome {
        if self.refreshing.replace(true) {
            debug!("Manual refresh already running");
            return RefreshOutcome::AlreadyRunning;
        }
        self.view.set_refreshing(true);
        let _guard = RefreshGuard {
            view: &self.view,
            refreshing: &self.refreshing,
        };

        match self.scrape_and_reload().await {
            Ok(()) => {
                info!("Manual refresh complete");
                self.view
                    .notify(&Toast::success(REFRESH_SUCCESS, self.config.toast_duration));
                RefreshOutcome::Refreshed
            }
            Err(e) => {
                warn!(error = %e, "Error refreshing data");
                self.view
                    .notify(&Toast::error(REFRESH_FAILURE, self.config.toast_duration));
                RefreshOutcome::Failed(e)
            }
        }
    }

    async fn scrape_and_reload(&self) -> Result<(), DashboardError> {
        self.api.trigger_scrape().await?.into_result()?;

        self.runtime.sleep(self.config.scrape_grace).await;

        match self.load().await {
            LoadOutcome::Failed(e) => Err(e),
            LoadOutcome::Rendered | LoadOutcome::Superseded => Ok(()),
        }
    }

    /// Cancel the auto-refresh timer
    pub fn stop_auto_refresh(&self) {
        if self.refresh_timer.borrow_mut().take().is_some() {
            info!("Auto-refresh stopped");
        }
    }

    /// End of the page session
    pub fn teardown(&self) {
        self.stop_auto_refresh();
    }
}

impl<A, V, R> DashboardController<A, V, R>
where
    A: CryptoApi + 'static,
    V: DashboardView + 'static,
    R: Runtime + 'static,
{
    /// Start of the page session: first load plus auto-refresh
    pub fn init(self: &Rc<Self>) {
        info!(api_base = %self.config.api_base, "Starting dashboard");
        let this = Rc::clone(self);
        self.runtime.spawn(async move {
            this.load().await;
        });
        self.start_auto_refresh();
    }

    /// (Re)start the periodic reload; any previous timer is cancelled
    ///
    /// Ticks never wait for the previous load, so a hung request does not
    /// delay the schedule.
    pub fn start_auto_refresh(self: &Rc<Self>) {
        let weak = Rc::downgrade(self);
        let timer = self
            .runtime
            .interval(self.config.refresh_interval, move || {
                let Some(this) = weak.upgrade() else {
                    return;
                };
                info!("Auto-refreshing data");
                let task = Rc::clone(&this);
                this.runtime.spawn(async move {
                    task.load().await;
                });
            });

        let previous = self.refresh_timer.borrow_mut().replace(timer);
        drop(previous);
        info!(
            interval_secs = self.config.refresh_interval.as_secs(),
            "Auto-refresh started"
        );
    }
}
