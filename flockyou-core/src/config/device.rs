//! Device identity shown on the boot screen

/// Static identity strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceInfo {
    /// Title bar text
    pub title: &'static str,
    /// Version badge
    pub version: &'static str,
    /// Board name
    pub name: &'static str,
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            title: "FLOCK YOU",
            version: "v1.0",
            name: "T-Dongle S3",
        }
    }
}
