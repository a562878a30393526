//! Display and LED presenters
//!
//! Each presenter is a small state machine polled from the main loop. It
//! owns its output device exclusively and only measures time by comparing
//! the `now` passed to `tick` against its last transition.

pub mod display;
pub mod layout;
pub mod led;

pub use display::{DisplayPresenter, HeaderStyle};
pub use led::LedPresenter;

use crate::traits::{LightError, SurfaceError};

/// Hardware failed to come up
///
/// There is no fallback rendering path; the application decides whether to
/// halt or run without the failed channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// Display panel or backlight failed
    Display(SurfaceError),
    /// Status LED failed
    Light(LightError),
}
