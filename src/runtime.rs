//! Timer and task seam between the controller and its host
//!
//! Both hosts are single-threaded: nothing here is `Send`.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Host event loop: sleeping, spawning local tasks, periodic timers
pub trait Runtime {
    /// Periodic timer handle. Dropping it cancels the timer.
    type Interval: 'static;

    /// Resolve after `duration`
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;

    /// Run a task on the current thread without awaiting it
    fn spawn(&self, task: impl Future<Output = ()> + 'static);

    /// Call `tick` every `period`, first after one full period
    fn interval(&self, period: Duration, tick: impl FnMut() + 'static) -> Self::Interval;

    /// Wall clock used for relative times
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
