use crate::modules::brewing::core::ports::ScreenWakeLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Holds the screen wake lock for as long as it lives.
///
/// Acquisition failures are logged and leave the guard empty. Release happens at
/// most once, on `release` or on drop.
pub struct WakeLockGuard {
    lock: Arc<dyn ScreenWakeLock>,
    held: bool,
}

impl WakeLockGuard {
    pub fn acquire(lock: Arc<dyn ScreenWakeLock>) -> Self {
        let held = match lock.acquire() {
            Ok(()) => {
                debug!("screen wake lock acquired");
                true
            }
            Err(e) => {
                warn!(error = %e, "screen wake lock unavailable");
                false
            }
        };
        Self { lock, held }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        self.held = false;
        match self.lock.release() {
            Ok(()) => debug!("screen wake lock released"),
            Err(e) => warn!(error = %e, "failed to release screen wake lock"),
        }
    }
}

impl Drop for WakeLockGuard {
    fn drop(&mut self) {
        self.release();
    }
}
