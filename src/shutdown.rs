//! Cooperative shutdown signal
//!
//! The operator stops the bot with Ctrl+C. The handler only raises a flag;
//! the monitor loop notices it at its blocking points (waiting for new
//! submissions, or pausing before a resubscribe).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Granularity of interruptible sleeps
const TICK: Duration = Duration::from_millis(100);

/// Shared stop flag
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    requested: Arc<AtomicBool>,
}

impl Shutdown {
    /// A flag that has not been raised
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the flag when the process receives Ctrl+C
    ///
    /// A second Ctrl+C exits immediately with status 130.
    pub fn install_ctrlc_handler(&self) -> Result<(), ctrlc::Error> {
        let flag = Arc::clone(&self.requested);
        ctrlc::set_handler(move || {
            if flag.swap(true, Ordering::SeqCst) {
                std::process::exit(130);
            }
        })
    }

    /// Ask the bot to stop
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// Whether a stop was requested
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Sleep for `duration` unless a stop is requested first
    ///
    /// Returns `true` if the sleep was cut short by a stop request.
    #[must_use]
    pub fn wait(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.is_requested() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            std::thread::sleep(TICK.min(deadline - now));
        }
    }
}
