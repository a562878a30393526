//! Hardware abstraction traits
//!
//! These traits define the interface between the presenters and the
//! board-specific display, LED and clock implementations.

pub mod clock;
pub mod light;
pub mod surface;

pub use clock::{elapsed_ms, Clock, ManualClock};
pub use light::{LightDevice, LightError, Rgb};
pub use surface::{
    Color565, Rect, Surface, SurfaceError, SurfaceExt, TextSize, TextStyle, SURFACE_HEIGHT,
    SURFACE_WIDTH,
};
