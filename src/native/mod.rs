//! Terminal host
//!
//! `watch` drives the same controller as the browser build, rendering to
//! stdout and reading single-letter commands from stdin.

pub mod cli;
mod runtime;
mod terminal;

use std::error::Error;
use std::io::{self, BufRead};
use std::rc::Rc;
use std::thread;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::LocalSet;
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::config::Config;
use crate::controller::DashboardController;
use crate::dashboard::dashboard_html;
use crate::format::{format_currency, format_time_ago};
use crate::logging::init_logging;
use crate::types::HistoryPoint;

pub use runtime::{TokioInterval, TokioRuntime};
pub use terminal::{TerminalView, format_table};

/// Command read from stdin while watching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchCommand {
    Refresh,
    Quit,
    Ignore,
    Unknown,
}

impl WatchCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "refresh" => Self::Refresh,
            "q" | "quit" | "exit" => Self::Quit,
            "" => Self::Ignore,
            _ => Self::Unknown,
        }
    }
}

/// Parse arguments, set up logging and dispatch the subcommand
pub fn run() -> Result<(), Box<dyn Error>> {
    let matches = cli::build_cli().get_matches();

    let mut config = Config::from_env()?;
    if matches.get_flag("verbose") {
        config.log_level = "debug".to_string();
    }
    init_logging(&config.log_level);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    match matches.subcommand() {
        Some(("page", sub)) => {
            let bundle = sub
                .get_one::<String>("bundle")
                .map_or(cli::DEFAULT_BUNDLE, String::as_str);
            println!("{}", dashboard_html(bundle));
            Ok(())
        }
        Some(("history", sub)) => {
            let symbol = sub
                .get_one::<String>("symbol")
                .ok_or("missing symbol")?;
            runtime.block_on(print_history(config, symbol))
        }
        _ => LocalSet::new().block_on(&runtime, watch(config)),
    }
}

/// Run the dashboard until `q`, end of input or Ctrl-C
pub async fn watch(config: Config) -> Result<(), Box<dyn Error>> {
    let api = ApiClient::new(config.clone())?;
    let controller = Rc::new(DashboardController::new(
        api,
        TerminalView::stdout(),
        TokioRuntime,
        config,
    ));
    controller.init();

    let mut lines = spawn_line_reader(io::BufReader::new(io::stdin()));
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.recv() => match line {
                Some(line) => match WatchCommand::parse(&line) {
                    WatchCommand::Refresh => {
                        let controller = Rc::clone(&controller);
                        tokio::task::spawn_local(async move {
                            controller.manual_refresh().await;
                        });
                    }
                    WatchCommand::Quit => break,
                    WatchCommand::Ignore => {}
                    WatchCommand::Unknown => {
                        warn!(command = %line.trim(), "Unknown command (r = refresh, q = quit)");
                    }
                },
                None => break,
            },
        }
    }

    controller.teardown();
    info!("Dashboard stopped");
    Ok(())
}

/// Forward lines from `reader` over a channel, closing it at end of input
///
/// Reads happen on a plain thread: a blocking read cannot be cancelled, and
/// inside the runtime's blocking pool it would hold up shutdown after Ctrl-C.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::UnboundedReceiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read stdin");
                    break;
                }
            }
        }
    });
    rx
}

async fn print_history(config: Config, symbol: &str) -> Result<(), Box<dyn Error>> {
    let client = ApiClient::new(config)?;
    let points = client.fetch_history(symbol).await?;
    for line in history_lines(symbol, &points, Utc::now()) {
        println!("{line}");
    }
    Ok(())
}

/// Text rendering of a price history, newest entries as the backend sent them
pub fn history_lines(symbol: &str, points: &[HistoryPoint], now: DateTime<Utc>) -> Vec<String> {
    if points.is_empty() {
        return vec![format!("No history for {}", symbol.to_uppercase())];
    }

    let mut lines = vec![format!(
        "{} price history ({} points)",
        symbol.to_uppercase(),
        points.len()
    )];
    lines.extend(points.iter().map(|point| {
        format!(
            "{:>12}  {:>12}  {:>12}  {}",
            format_currency(point.price),
            format_currency(point.market_cap),
            format_currency(point.volume_24h),
            format_time_ago(point.timestamp.as_deref(), now)
        )
    }));
    lines
}
