//! `DashboardView` that prints to a terminal
//!
//! Each render is a plain text block. Backend strings are stripped of
//! control characters so a record name cannot inject escape sequences.

use std::cell::RefCell;
use std::io::{self, Write};

use tracing::warn;

use crate::dashboard::{DashboardView, StatsDisplay, TableRow, Toast, ToastKind};

const HEADERS: [&str; 7] = ["#", "Name", "Price", "24h Change", "Market Cap", "Volume (24h)", "Updated"];

/// Terminal rendering of the dashboard panels
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "{text}").and_then(|()| out.flush()) {
            warn!(error = %e, "Terminal write failed");
        }
    }
}

/// Drop control characters (ESC, CR, ...) from backend text
fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}

/// Column-aligned table: `#` right-aligned, the rest left-aligned
pub fn format_table(rows: &[TableRow]) -> String {
    let cells: Vec<[String; 7]> = rows
        .iter()
        .map(|row| {
            [
                row.rank.to_string(),
                format!("{} ({})", sanitize(&row.name), sanitize(&row.symbol)),
                row.price.clone(),
                row.change.text.clone(),
                row.market_cap.clone(),
                row.volume.clone(),
                row.updated.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |line: &[&str]| {
        line.iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{cell:>width$}")
                } else {
                    format!("{cell:<width$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(&HEADERS)];
    let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    lines.push("-".repeat(rule));
    for line in &cells {
        let refs: Vec<&str> = line.iter().map(String::as_str).collect();
        lines.push(render(&refs));
    }
    lines.join("\n")
}

impl<W: Write> DashboardView for TerminalView<W> {
    fn show_loading(&self) {
        self.emit("Loading cryptocurrency data...");
    }

    fn show_error(&self, message: &str) {
        self.emit(&format!("⚠️  Unable to load data: {}", sanitize(message)));
    }

    fn render_stats(&self, stats: &StatsDisplay) {
        self.emit(&format!(
            "Total: {} | Gainers: {} | Losers: {} | Market Cap: {}",
            stats.total_cryptos, stats.gainers, stats.losers, stats.total_market_cap
        ));
    }

    fn render_table(&self, rows: &[TableRow]) {
        self.emit(&format_table(rows));
    }

    fn show_table(&self) {
        self.emit("");
    }

    fn set_last_update(&self, text: &str) {
        self.emit(&format!("Last update: {text}"));
    }

    fn set_refreshing(&self, busy: bool) {
        if busy {
            self.emit("⏳ Refreshing...");
        }
    }

    fn notify(&self, toast: &Toast) {
        let tag = match toast.kind {
            ToastKind::Success => "SUCCESS",
            ToastKind::Error => "ERROR",
        };
        self.emit(&format!("[{tag}] {}", toast.message));
    }
}
