//! Dashboard module - crypto tracker web interface
//!
//! Provides the single-page shell the browser host renders into, plus the
//! view seam both hosts implement.
//!
//! # Architecture
//! - `html.rs`: Page structure and element ids
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: WASM bootstrap script
//! - `view.rs`: `DashboardView` trait and row/stat view models

mod css;
mod html;
mod js;
mod view;

pub use view::{
    DashboardView, PLACEHOLDER_ICON, StatsDisplay, TableRow, Toast, ToastKind,
};

/// Element ids shared by the template and the DOM view
pub mod slots {
    pub const TOTAL_CRYPTOS: &str = "totalCryptos";
    pub const GAINERS: &str = "gainers";
    pub const LOSERS: &str = "losers";
    pub const TOTAL_MARKET_CAP: &str = "totalMarketCap";
    pub const LAST_UPDATE: &str = "lastUpdate";
    pub const TABLE_BODY: &str = "cryptoTableBody";
    pub const TABLE_CONTAINER: &str = "tableContainer";
    pub const LOADING: &str = "loadingState";
    pub const ERROR: &str = "errorState";
    pub const ERROR_MESSAGE: &str = "errorMessage";
    pub const REFRESH_BUTTON: &str = "refreshBtn";

    pub const ALL: [&str; 11] = [
        TOTAL_CRYPTOS,
        GAINERS,
        LOSERS,
        TOTAL_MARKET_CAP,
        LAST_UPDATE,
        TABLE_BODY,
        TABLE_CONTAINER,
        LOADING,
        ERROR,
        ERROR_MESSAGE,
        REFRESH_BUTTON,
    ];
}

/// Generate the complete dashboard HTML page
///
/// `bundle` is the path of the wasm-bindgen JS glue, e.g. `/static/pkg/crypto_dashboard.js`.
pub fn dashboard_html(bundle: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Crypto Price Tracker</title>
    <style>
{css}
    </style>
</head>
<body>
{html}
    <script type="module">
{js}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::TEMPLATE,
        js = js::bootstrap_script(bundle)
    )
}
