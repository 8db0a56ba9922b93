// No-op capabilities for platforms without a screen or vibration motor.

use crate::modules::brewing::core::ports::{CapabilityError, HapticPattern, Haptics, ScreenWakeLock};
use std::time::Duration;
use tracing::trace;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScreenWakeLock;

impl ScreenWakeLock for NoopScreenWakeLock {
    fn acquire(&self) -> Result<(), CapabilityError> {
        trace!("wake lock acquire ignored");
        Ok(())
    }

    fn release(&self) -> Result<(), CapabilityError> {
        trace!("wake lock release ignored");
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHaptics;

impl Haptics for NoopHaptics {
    fn pulse(&self, pattern: HapticPattern) -> Result<(), CapabilityError> {
        let total: Duration = pattern.durations().into_iter().sum();
        trace!(?pattern, millis = total.as_millis() as u64, "haptic pulse ignored");
        Ok(())
    }
}
