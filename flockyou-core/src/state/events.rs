//! Events raised by the detection feed

use crate::detection::DetectionRecord;

/// Last scan status reported by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanStatus {
    /// Current Wi-Fi channel
    pub channel: u8,
    /// BLE scanning active
    pub ble_active: bool,
}

impl ScanStatus {
    pub const fn new(channel: u8, ble_active: bool) -> Self {
        Self {
            channel,
            ble_active,
        }
    }
}

/// Events fanned out to both presenters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedbackEvent {
    /// Periodic scan status refresh
    ScanStatus(ScanStatus),
    /// A device was detected
    Detection(DetectionRecord),
    /// The detected device is gone
    DetectionCleared,
    /// The detected device is still in range
    StillInRange,
}
