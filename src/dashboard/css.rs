//! Dashboard CSS styles
//!
//! Contains all styling for the price tracker UI.
//! Uses CSS custom properties (variables) for theming.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --green: #10b981;
    --red: #ef4444;
    --blue: #58a6ff;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1200px; margin: 0 auto; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.header-controls { display: flex; align-items: center; gap: 12px; }

.refresh-time { font-size: 12px; color: var(--text-dim); }

/* Buttons */
.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
}

.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-primary { background: var(--blue); color: #fff; }
.btn-primary:hover:not(:disabled) { background: #4c9aed; }
.btn-icon { margin-right: 4px; }

/* Stat cards */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 16px;
    margin-bottom: 16px;
}

.wide { grid-column: 1 / -1; }

.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-title {
    font-size: 14px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.card-value { font-size: 28px; font-weight: 700; margin-top: 8px; }

.positive { color: var(--green); }
.negative { color: var(--red); }

/* Loading / error panels */
.panel { text-align: center; padding: 48px 16px; color: var(--text-dim); }
.panel-error { color: var(--red); }
.error-message { margin-top: 8px; font-size: 13px; color: var(--text); }

.spinner {
    width: 32px;
    height: 32px;
    margin: 0 auto 12px;
    border: 3px solid var(--border);
    border-top-color: var(--blue);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

/* Price table */
.crypto-table { width: 100%; border-collapse: collapse; }

.crypto-table th,
.crypto-table td {
    text-align: left;
    padding: 10px 8px;
    border-bottom: 1px solid var(--border);
}

.crypto-table th {
    color: var(--text-dim);
    font-weight: 500;
    font-size: 12px;
    text-transform: uppercase;
}

.crypto-table tr:last-child td { border-bottom: none; }

.crypto-info { display: flex; align-items: center; gap: 10px; }
.crypto-icon { width: 32px; height: 32px; border-radius: 50%; }
.crypto-name { display: flex; flex-direction: column; }
.crypto-symbol { font-size: 12px; color: var(--text-dim); }
.price { font-weight: 600; }

.badge {
    padding: 3px 8px;
    border-radius: 4px;
    font-size: 12px;
    font-weight: 600;
}

.badge-positive { background: rgba(16, 185, 129, 0.2); color: var(--green); }
.badge-negative { background: rgba(239, 68, 68, 0.2); color: var(--red); }

/* Toasts */
.toast {
    position: fixed;
    top: 20px;
    right: 20px;
    padding: 16px 24px;
    color: white;
    border-radius: 8px;
    font-weight: 600;
    z-index: 1000;
    animation: fadeIn 0.3s ease;
}

.toast-success { background: var(--green); }
.toast-error { background: var(--red); }
.toast-leaving { animation: fadeOut 0.3s ease forwards; }

@keyframes fadeIn { from { opacity: 0; transform: translateY(-8px); } to { opacity: 1; } }
@keyframes fadeOut { to { opacity: 0; transform: translateY(-8px); } }

/* Responsive */
@media (max-width: 600px) {
    .grid { grid-template-columns: 1fr; }
    header { flex-direction: column; gap: 12px; }
    .crypto-table th:nth-child(6),
    .crypto-table td:nth-child(6) { display: none; }
}
";
