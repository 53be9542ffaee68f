//! `DashboardView` over the page DOM
//!
//! Rows and toasts are assembled from elements and text nodes only.
//! Backend strings never pass through `innerHTML`.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use crate::dashboard::{DashboardView, StatsDisplay, TableRow, Toast, ToastKind, slots};
use crate::error::{DashboardError, Result};

/// Fade-out animation length in `css::STYLES`
const TOAST_FADE_MS: u32 = 300;

const BUSY_LABEL: &str = "⏳ Refreshing...";

/// Page elements the dashboard writes to, looked up once
pub struct DomView {
    document: Document,
    total_cryptos: Element,
    gainers: Element,
    losers: Element,
    total_market_cap: Element,
    last_update: Element,
    table_body: Element,
    table_container: HtmlElement,
    loading: HtmlElement,
    error: HtmlElement,
    error_message: Element,
    refresh_button: HtmlButtonElement,
    /// Button markup from the template, restored after a refresh
    refresh_label: RefCell<Option<String>>,
}

impl DomView {
    /// Bind to the page; fails if any slot is missing
    pub fn new(document: Document) -> Result<Self> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| DashboardError::Dom(format!("missing element #{id}")))
        };
        let find_html = |id: &str| {
            find(id)?
                .dyn_into::<HtmlElement>()
                .map_err(|_| DashboardError::Dom(format!("#{id} is not an HTML element")))
        };

        Ok(Self {
            total_cryptos: find(slots::TOTAL_CRYPTOS)?,
            gainers: find(slots::GAINERS)?,
            losers: find(slots::LOSERS)?,
            total_market_cap: find(slots::TOTAL_MARKET_CAP)?,
            last_update: find(slots::LAST_UPDATE)?,
            table_body: find(slots::TABLE_BODY)?,
            table_container: find_html(slots::TABLE_CONTAINER)?,
            loading: find_html(slots::LOADING)?,
            error: find_html(slots::ERROR)?,
            error_message: find(slots::ERROR_MESSAGE)?,
            refresh_button: find(slots::REFRESH_BUTTON)?
                .dyn_into::<HtmlButtonElement>()
                .map_err(|_| DashboardError::Dom("#refreshBtn is not a button".into()))?,
            refresh_label: RefCell::new(None),
            document: document.clone(),
        })
    }

    pub fn refresh_button(&self) -> &HtmlButtonElement {
        &self.refresh_button
    }

    fn element(&self, tag: &str, class: Option<&str>, text: Option<&str>) -> Result<Element> {
        let el = self.document.create_element(tag)?;
        if let Some(class) = class {
            el.set_class_name(class);
        }
        if text.is_some() {
            el.set_text_content(text);
        }
        Ok(el)
    }

    fn cell(&self, class: Option<&str>, text: &str) -> Result<Element> {
        self.element("td", class, Some(text))
    }

    fn build_row(&self, row: &TableRow) -> Result<Element> {
        let tr = self.element("tr", None, None)?;
        tr.append_child(&self.cell(None, &row.rank.to_string())?)?;

        let icon = self.element("img", Some("crypto-icon"), None)?;
        icon.set_attribute("src", &row.image_src)?;
        icon.set_attribute("alt", &row.name)?;
        let name = self.element("div", Some("crypto-name"), None)?;
        name.append_child(&self.element("strong", None, Some(&row.name))?)?;
        name.append_child(&self.element("span", Some("crypto-symbol"), Some(&row.symbol))?)?;
        let info = self.element("div", Some("crypto-info"), None)?;
        info.append_child(&icon)?;
        info.append_child(&name)?;
        let name_cell = self.element("td", None, None)?;
        name_cell.append_child(&info)?;
        tr.append_child(&name_cell)?;

        tr.append_child(&self.cell(Some("price"), &row.price)?)?;

        let badge = self.element(
            "span",
            Some(row.change.direction.badge_class()),
            Some(&row.change.text),
        )?;
        let change_cell = self.element("td", None, None)?;
        change_cell.append_child(&badge)?;
        tr.append_child(&change_cell)?;

        tr.append_child(&self.cell(None, &row.market_cap)?)?;
        tr.append_child(&self.cell(None, &row.volume)?)?;
        tr.append_child(&self.cell(None, &row.updated)?)?;
        Ok(tr)
    }

    fn try_render_table(&self, rows: &[TableRow]) -> Result<()> {
        self.table_body.set_text_content(None);
        for row in rows {
            self.table_body.append_child(&self.build_row(row)?)?;
        }
        Ok(())
    }

    fn try_notify(&self, toast: &Toast) -> Result<()> {
        let class = match toast.kind {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        };
        let el = self.element("div", Some(class), Some(&toast.message))?;
        let body = self
            .document
            .body()
            .ok_or_else(|| DashboardError::Dom("document has no body".into()))?;
        body.append_child(&el)?;

        let visible_ms = u32::try_from(toast.duration.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(visible_ms, move || {
            let _ = el.class_list().add_1("toast-leaving");
            let _ = Timeout::new(TOAST_FADE_MS, move || el.remove()).forget();
        });
        let _ = timeout.forget();
        Ok(())
    }

    fn toggle_refreshing(&self, busy: bool) {
        if busy {
            self.refresh_label
                .borrow_mut()
                .get_or_insert_with(|| self.refresh_button.inner_html());
            self.refresh_button.set_disabled(true);
            self.refresh_button.set_text_content(Some(BUSY_LABEL));
        } else {
            self.refresh_button.set_disabled(false);
            // Template markup captured above, not backend data
            if let Some(label) = self.refresh_label.borrow_mut().take() {
                self.refresh_button.set_inner_html(&label);
            }
        }
    }
}

fn set_display(el: &HtmlElement, value: &str) {
    if let Err(e) = el.style().set_property("display", value) {
        log_dom_error("set display", &DashboardError::from(e));
    }
}

fn log_dom_error(action: &str, error: &DashboardError) {
    warn!(action, error = %error, "DOM update failed");
}

impl DashboardView for DomView {
    fn show_loading(&self) {
        set_display(&self.loading, "block");
        set_display(&self.error, "none");
        set_display(&self.table_container, "none");
    }

    fn show_error(&self, message: &str) {
        set_display(&self.loading, "none");
        set_display(&self.table_container, "none");
        set_display(&self.error, "block");
        self.error_message.set_text_content(Some(message));
    }

    fn render_stats(&self, stats: &StatsDisplay) {
        self.total_cryptos.set_text_content(Some(&stats.total_cryptos));
        self.gainers.set_text_content(Some(&stats.gainers));
        self.losers.set_text_content(Some(&stats.losers));
        self.total_market_cap
            .set_text_content(Some(&stats.total_market_cap));
    }

    fn render_table(&self, rows: &[TableRow]) {
        if let Err(e) = self.try_render_table(rows) {
            log_dom_error("render table", &e);
        }
    }

    fn show_table(&self) {
        set_display(&self.loading, "none");
        set_display(&self.table_container, "block");
    }

    fn set_last_update(&self, text: &str) {
        self.last_update.set_text_content(Some(text));
    }

    fn set_refreshing(&self, busy: bool) {
        self.toggle_refreshing(busy);
    }

    fn notify(&self, toast: &Toast) {
        if let Err(e) = self.try_notify(toast) {
            log_dom_error("toast", &e);
        }
    }
}
