//! Screen regions and text runs
//!
//! Every screen is built from a handful of filled regions and lines of
//! colored text runs. A line keeps the cursor between runs so a label and
//! its value can be drawn in different colors.

use core::fmt::Write;

use heapless::String;

use crate::traits::{Rect, Surface, SurfaceError, TextStyle, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Left text margin
pub const MARGIN_X: u16 = 4;

/// Title bar on the boot and scanning screens
pub const TITLE_BAR: Rect = Rect::new(0, 0, SURFACE_WIDTH, 16);

/// Area below the title bar
pub const BODY: Rect = Rect::new(0, 16, SURFACE_WIDTH, SURFACE_HEIGHT - 16);

/// Flashing header band on the alert screen
pub const HEADER_BAND: Rect = Rect::new(0, 0, SURFACE_WIDTH, 14);

/// Baseline row of the alert header caption
pub const HEADER_TEXT_Y: u16 = 2;

/// A run of text in a single style
#[derive(Debug, Clone, Copy)]
pub struct Run<'a> {
    pub text: &'a str,
    pub style: TextStyle,
}

impl<'a> Run<'a> {
    pub const fn new(text: &'a str, style: TextStyle) -> Self {
        Self { text, style }
    }
}

/// Draw runs left to right starting at (`x`, `y`)
///
/// Returns the x position after the last run.
pub fn draw_line<S: Surface>(
    surface: &mut S,
    x: u16,
    y: u16,
    runs: &[Run<'_>],
) -> Result<u16, SurfaceError> {
    let mut cursor = x;
    for run in runs {
        cursor = surface.draw_text(cursor, y, run.text, run.style)?;
    }
    Ok(cursor)
}

/// Decimal text for a number, with an optional suffix
pub fn number<const N: usize>(value: u32, suffix: &str) -> String<N> {
    let mut out = String::new();
    // Capacity is chosen by the caller for the largest value shown
    let written = write!(out, "{}{}", value, suffix);
    debug_assert!(written.is_ok(), "number does not fit in {} bytes", N);
    out
}
