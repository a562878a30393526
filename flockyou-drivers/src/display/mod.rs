//! Display surface implementations

pub mod backlight;
pub mod graphics;

pub use backlight::{Backlight, FixedBacklight, PinBacklight};
pub use graphics::GraphicsSurface;
