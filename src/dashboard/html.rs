//! Dashboard HTML template
//!
//! Contains the main page structure including:
//! - Header with last-update time and refresh button
//! - Total / gainers / losers / market-cap cards
//! - Loading and error panels
//! - Price table (rows are built by the DOM view)

pub const TEMPLATE: &str = r#"
    <div class="container">
        <header>
            <div>
                <h1>🪙 Crypto Price Tracker</h1>
                <span class="refresh-time">Last update: <span id="lastUpdate">--</span></span>
            </div>
            <div class="header-controls">
                <button class="btn btn-primary" id="refreshBtn"><span class="btn-icon">🔄</span> Refresh Now</button>
            </div>
        </header>

        <div class="grid">
            <div class="card">
                <span class="card-title">Total Cryptos</span>
                <div class="card-value" id="totalCryptos">--</div>
            </div>
            <div class="card">
                <span class="card-title">📈 Gainers (24h)</span>
                <div class="card-value positive" id="gainers">--</div>
            </div>
            <div class="card">
                <span class="card-title">📉 Losers (24h)</span>
                <div class="card-value negative" id="losers">--</div>
            </div>
            <div class="card">
                <span class="card-title">💰 Total Market Cap</span>
                <div class="card-value" id="totalMarketCap">--</div>
            </div>
        </div>

        <div class="panel" id="loadingState">
            <div class="spinner"></div>
            <p>Loading cryptocurrency data...</p>
        </div>

        <div class="panel panel-error" id="errorState" style="display: none;">
            <p>⚠️ Could not load data</p>
            <p class="error-message" id="errorMessage"></p>
        </div>

        <div class="card wide" id="tableContainer" style="display: none;">
            <table class="crypto-table">
                <thead>
                    <tr>
                        <th>#</th>
                        <th>Name</th>
                        <th>Price</th>
                        <th>24h Change</th>
                        <th>Market Cap</th>
                        <th>Volume (24h)</th>
                        <th>Updated</th>
                    </tr>
                </thead>
                <tbody id="cryptoTableBody"></tbody>
            </table>
        </div>
    </div>
"#;
