//! Configuration types
//!
//! Timing thresholds, brightness levels, colors and device identity used by
//! the presenters. Defaults match the T-Dongle S3 build.

pub mod device;
pub mod palette;
pub mod timing;

pub use device::DeviceInfo;
pub use timing::*;
