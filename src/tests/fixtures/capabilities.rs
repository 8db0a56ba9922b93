// Capability fakes: recording ones to observe calls, failing ones to check
// that errors never escape.

use crate::modules::brewing::core::ports::{CapabilityError, HapticPattern, Haptics, ScreenWakeLock};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct RecordingWakeLock {
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl RecordingWakeLock {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Outstanding acquisitions.
    pub fn active(&self) -> usize {
        self.acquired() - self.released()
    }
}

impl ScreenWakeLock for RecordingWakeLock {
    fn acquire(&self) -> Result<(), CapabilityError> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn release(&self) -> Result<(), CapabilityError> {
        self.released.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct FailingWakeLock;

impl ScreenWakeLock for FailingWakeLock {
    fn acquire(&self) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported)
    }

    fn release(&self) -> Result<(), CapabilityError> {
        Err(CapabilityError::Unsupported)
    }
}

#[derive(Default)]
pub struct RecordingHaptics {
    pulses: Mutex<Vec<HapticPattern>>,
}

impl RecordingHaptics {
    pub fn pulses(&self) -> Vec<HapticPattern> {
        self.pulses.lock().unwrap().clone()
    }
}

impl Haptics for RecordingHaptics {
    fn pulse(&self, pattern: HapticPattern) -> Result<(), CapabilityError> {
        self.pulses.lock().unwrap().push(pattern);
        Ok(())
    }
}

pub struct FailingHaptics;

impl Haptics for FailingHaptics {
    fn pulse(&self, _pattern: HapticPattern) -> Result<(), CapabilityError> {
        Err(CapabilityError::Denied("vibration blocked".to_string()))
    }
}
