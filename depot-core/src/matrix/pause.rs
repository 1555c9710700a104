//! Fixed inter-request pacing.

use std::time::Duration;

/// Wait between consecutive provider requests.
///
/// The calculator calls [`Pause::pause`] once after every pair attempt. The
/// default [`ThreadSleep`] blocks the current thread; tests substitute a
/// recording implementation.
pub trait Pause {
    /// Block for `duration`.
    fn pause(&self, duration: Duration);
}

/// Sleep the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
