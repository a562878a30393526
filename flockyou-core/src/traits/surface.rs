//! Graphics surface trait for the status display

/// Logical width of the status display in landscape orientation
pub const SURFACE_WIDTH: u16 = 160;

/// Logical height of the status display in landscape orientation
pub const SURFACE_HEIGHT: u16 = 80;

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Bus or controller write failed
    Communication,
    /// Panel does not match the expected logical resolution
    InvalidDimensions,
    /// Backlight control failed
    Backlight,
}

/// A 16-bit RGB565 color, as used by ST77xx panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color565(pub u16);

impl Color565 {
    /// Build a color from 8-bit channels, dropping the low bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 >> 3) << 11;
        let g = (g as u16 >> 2) << 5;
        let b = b as u16 >> 3;
        Self(r | g | b)
    }

    /// Raw 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole logical surface
    pub const fn full() -> Self {
        Self::new(0, 0, SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

/// Text scale
///
/// `Small` is a 6x8 cell, `Large` doubles both dimensions. Layouts advance
/// the cursor by the cell width, so backends should use a font whose
/// advance matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    Small,
    Large,
}

impl TextSize {
    /// Horizontal advance per character in pixels
    pub const fn char_width(self) -> u16 {
        match self {
            TextSize::Small => 6,
            TextSize::Large => 12,
        }
    }
}

/// Foreground color and scale for a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub color: Color565,
    pub size: TextSize,
}

impl TextStyle {
    pub const fn small(color: Color565) -> Self {
        Self {
            color,
            size: TextSize::Small,
        }
    }

    pub const fn large(color: Color565) -> Self {
        Self {
            color,
            size: TextSize::Large,
        }
    }
}

/// Trait for the color display
///
/// This trait abstracts the panel controller. The presenter never talks to
/// a specific controller; it only fills rectangles and draws text inside a
/// [`SURFACE_WIDTH`] x [`SURFACE_HEIGHT`] coordinate space.
pub trait Surface {
    /// Bring up the panel in landscape orientation
    fn init(&mut self) -> Result<(), SurfaceError>;

    /// Turn the backlight on or off
    fn set_backlight(&mut self, on: bool) -> Result<(), SurfaceError>;

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color565) -> Result<(), SurfaceError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    ///
    /// Text is drawn with a transparent background. Returns the x position
    /// directly after the last character.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, style: TextStyle)
        -> Result<u16, SurfaceError>;

    /// Get the logical dimensions as (width, height)
    fn size(&self) -> (u16, u16) {
        (SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

/// Helper methods for common drawing operations
pub trait SurfaceExt: Surface {
    /// Fill the entire surface
    fn fill_screen(&mut self, color: Color565) -> Result<(), SurfaceError> {
        let (width, height) = self.size();
        self.fill_rect(Rect::new(0, 0, width, height), color)
    }
}

// Blanket implementation for all Surface types
impl<T: Surface> SurfaceExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_matches_panel_constants() {
        assert_eq!(Color565::from_rgb(255, 0, 0), Color565(0xF800));
        assert_eq!(Color565::from_rgb(0, 255, 255), Color565(0x07FF));
        assert_eq!(Color565::from_rgb(255, 255, 255), Color565(0xFFFF));
        assert_eq!(Color565::from_rgb(0, 0, 0), Color565(0x0000));
    }

    #[test]
    fn test_text_size_metrics() {
        assert_eq!(TextSize::Small.char_width(), 6);
        assert_eq!(TextSize::Large.char_width(), 12);
    }

    #[test]
    fn test_full_rect() {
        let r = Rect::full();
        assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 160, 80));
    }
}
