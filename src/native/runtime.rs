//! Tokio event loop for the terminal host
//!
//! Tasks are `!Send`, so everything runs on a current-thread runtime
//! inside a `LocalSet`. Calling these methods outside one panics.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::runtime::Runtime;

/// Runtime backed by `tokio::task::spawn_local`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRuntime;

/// Periodic task; aborted on drop
#[derive(Debug)]
pub struct TokioInterval(JoinHandle<()>);

impl Drop for TokioInterval {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Runtime for TokioRuntime {
    type Interval = TokioInterval;

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }

    fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        tokio::task::spawn_local(task);
    }

    fn interval(&self, period: Duration, mut tick: impl FnMut() + 'static) -> TokioInterval {
        TokioInterval(tokio::task::spawn_local(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tick();
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tokio::task::LocalSet;

    #[tokio::test(start_paused = true)]
    async fn test_interval_ticks_until_dropped() {
        LocalSet::new()
            .run_until(async {
                let ticks = Rc::new(Cell::new(0));
                let counter = Rc::clone(&ticks);
                let timer = TokioRuntime.interval(Duration::from_secs(10), move || {
                    counter.set(counter.get() + 1);
                });

                tokio::time::sleep(Duration::from_secs(5)).await;
                assert_eq!(ticks.get(), 0, "first tick waits a full period");

                tokio::time::sleep(Duration::from_secs(26)).await;
                assert_eq!(ticks.get(), 3);

                drop(timer);
                tokio::time::sleep(Duration::from_secs(60)).await;
                assert_eq!(ticks.get(), 3);
            })
            .await;
    }
}
