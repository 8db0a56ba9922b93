// Best-effort platform capabilities used while brewing.
//
// Boundaries
// - Failures are reported to the caller, which logs and carries on. Nothing in
//   the session depends on a capability succeeding.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("capability not supported on this platform")]
    Unsupported,

    #[error("capability request denied: {0}")]
    Denied(String),
}

/// Keeps the display awake.
pub trait ScreenWakeLock: Send + Sync {
    fn acquire(&self) -> Result<(), CapabilityError>;
    fn release(&self) -> Result<(), CapabilityError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    Start,
    Finish,
    Toggle,
    Reset,
}

impl HapticPattern {
    /// Alternating vibrate/pause durations.
    pub fn durations(self) -> Vec<Duration> {
        let ms = |v| Duration::from_millis(v);
        match self {
            HapticPattern::Start => vec![ms(100)],
            HapticPattern::Finish => vec![ms(200)],
            HapticPattern::Toggle => vec![ms(50)],
            HapticPattern::Reset => vec![ms(50), ms(50), ms(50)],
        }
    }
}

/// Fire-and-forget vibration.
pub trait Haptics: Send + Sync {
    fn pulse(&self, pattern: HapticPattern) -> Result<(), CapabilityError>;
}
