//! Browser host
//!
//! `start` runs when the wasm-bindgen bundle is initialised: it reads the
//! page location, binds the DOM, wires the refresh button and
//! `beforeunload`, then hands over to the controller.

mod dom;
mod runtime;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use tracing::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::client::ApiClient;
use crate::config::Config;
use crate::controller::DashboardController;
use crate::error::DashboardError;
use crate::logging::init_logging;

pub use dom::DomView;
pub use runtime::BrowserRuntime;

type BrowserController = DashboardController<ApiClient, DomView, BrowserRuntime>;

thread_local! {
    /// The page session; dropped on `beforeunload`
    static CONTROLLER: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

impl From<DashboardError> for JsValue {
    fn from(err: DashboardError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// WASM entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let location = window.location();
    let config = Config::for_page(&location.hostname()?, &location.origin()?);
    init_logging(&config.log_level);
    config.validate()?;

    let view = DomView::new(document)?;
    let api = ApiClient::new(config.clone())?;
    let controller = Rc::new(DashboardController::new(api, view, BrowserRuntime, config));

    wire_refresh_button(&controller)?;
    wire_unload(&window)?;

    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&controller)));
    controller.init();
    Ok(())
}

fn wire_refresh_button(controller: &Rc<BrowserController>) -> Result<(), JsValue> {
    let weak = Rc::downgrade(controller);
    let on_click = Closure::<dyn FnMut()>::new(move || {
        if let Some(controller) = weak.upgrade() {
            wasm_bindgen_futures::spawn_local(async move {
                controller.manual_refresh().await;
            });
        }
    });

    controller
        .view()
        .refresh_button()
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_click.forget();
    Ok(())
}

fn wire_unload(window: &web_sys::Window) -> Result<(), JsValue> {
    let on_unload = Closure::<dyn FnMut()>::new(|| {
        if let Some(controller) = CONTROLLER.with(|slot| slot.borrow_mut().take()) {
            controller.teardown();
            info!("Dashboard torn down");
        }
    });

    window.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref())?;
    on_unload.forget();
    Ok(())
}

/// `MakeWriter` target sending each formatted event to `console.log`
#[derive(Default)]
pub(crate) struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
            self.buffer.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}
