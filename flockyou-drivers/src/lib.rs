//! Hardware adapters for the Flock You presenters
//!
//! This crate provides concrete implementations of the traits defined
//! in flockyou-core:
//!
//! - Display surface over any embedded-graphics RGB565 draw target
//! - GPIO backlight switch (active-high or active-low)
//! - Single addressable LED over any smart-leds writer (APA102, WS2812)
//! - Embassy monotonic clock (`embassy` feature)

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod display;
pub mod led;

#[cfg(feature = "embassy")]
pub use clock::EmbassyClock;
pub use display::{Backlight, FixedBacklight, GraphicsSurface, PinBacklight};
pub use led::SmartLed;
