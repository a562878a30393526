//! Board-agnostic feedback logic for the Flock You detector
//!
//! This crate contains the presentation logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display surface, status LED, clock)
//! - Display presenter (boot, scanning and alert screens, header flash)
//! - LED presenter (detection strobe, in-range pulse)
//! - Mode machines and detection feed events
//! - Timing, brightness and color configuration
//!
//! Everything is polled: the application calls `tick(now)` from its main
//! loop and forwards detection feed events. Nothing here blocks except the
//! one-time LED boot sequence.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod logging;

pub mod config;
pub mod detection;
pub mod feedback;
pub mod presenter;
pub mod state;
pub mod traits;

#[cfg(test)]
mod mock;

pub use detection::DetectionRecord;
pub use feedback::{Feedback, FeedbackError};
pub use presenter::{DisplayPresenter, InitError, LedPresenter};
pub use state::{FeedbackEvent, ScanStatus};
