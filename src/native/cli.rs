use clap::{Arg, ArgAction, Command};

/// Default path of the wasm-bindgen module referenced by `page`
pub const DEFAULT_BUNDLE: &str = "/static/pkg/crypto_dashboard.js";

pub fn build_cli() -> Command {
    Command::new("crypto-dashboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live cryptocurrency prices from the dashboard backend")
        .long_about("Polls the dashboard backend and renders the top cryptocurrencies with 24h change, market cap and volume. Runs in the terminal, or prints the page that hosts the browser build.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("watch")
                .about("Render the dashboard in the terminal and refresh it periodically (default)")
                .after_help("Commands on stdin: r = refresh now, q = quit"),
        )
        .subcommand(
            Command::new("page")
                .about("Print the dashboard HTML page for the browser build")
                .arg(
                    Arg::new("bundle")
                        .long("bundle")
                        .help("URL of the wasm-bindgen JS module")
                        .default_value(DEFAULT_BUNDLE),
                ),
        )
        .subcommand(
            Command::new("history")
                .about("Print the stored price history of one cryptocurrency")
                .arg(
                    Arg::new("symbol")
                        .help("Ticker symbol, e.g. BTC")
                        .required(true)
                        .index(1),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "crypto-dashboard");
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let matches = build_cli().try_get_matches_from(vec!["crypto-dashboard"]);
        assert!(matches.is_ok());
        assert!(matches.unwrap().subcommand().is_none());
    }

    #[test]
    fn test_page_bundle_default() {
        let matches = build_cli()
            .try_get_matches_from(vec!["crypto-dashboard", "page"])
            .unwrap();
        let page = matches.subcommand_matches("page").unwrap();
        assert_eq!(page.get_one::<String>("bundle").unwrap(), DEFAULT_BUNDLE);
    }

    #[test]
    fn test_history_requires_symbol() {
        assert!(
            build_cli()
                .try_get_matches_from(vec!["crypto-dashboard", "history"])
                .is_err()
        );

        let matches = build_cli()
            .try_get_matches_from(vec!["crypto-dashboard", "history", "btc", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        let history = matches.subcommand_matches("history").unwrap();
        assert_eq!(history.get_one::<String>("symbol").unwrap(), "btc");
    }
}
