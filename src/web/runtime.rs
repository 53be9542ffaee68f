//! Browser event loop: `setTimeout`/`setInterval` via gloo-timers

use std::future::Future;
use std::time::Duration;

use gloo_timers::callback::Interval;

use crate::runtime::Runtime;

/// Runtime backed by the page's event loop
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserRuntime;

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Runtime for BrowserRuntime {
    type Interval = Interval;

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        gloo_timers::future::sleep(duration)
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn interval(&self, period: Duration, tick: impl FnMut() + 'static) -> Interval {
        Interval::new(millis(period), tick)
    }
}
