//! Surface over an embedded-graphics draw target
//!
//! Any RGB565 panel driver that implements `DrawTarget` (ST7735, ST7789
//! via mipidsi, a simulator window) can back the display presenter. The
//! panel driver is expected to be configured for landscape orientation
//! before it is handed over.
//!
//! # Example
//!
//! ```ignore
//! let backlight = PinBacklight::new_active_low(bl_pin)?;
//! let surface = GraphicsSurface::new(panel, backlight);
//! let mut display = DisplayPresenter::new(surface, clock);
//! display.initialize()?;
//! ```

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use flockyou_core::traits::{
    Color565, Rect, Surface, SurfaceError, TextSize, TextStyle, SURFACE_HEIGHT, SURFACE_WIDTH,
};

use super::backlight::Backlight;

/// 6px advance, 8px cell
const SMALL_FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

/// 12px advance, 15px cell
const LARGE_FONT: MonoFont<'static> = MonoFont {
    character_spacing: 3,
    ..FONT_9X15
};

fn font(size: TextSize) -> &'static MonoFont<'static> {
    match size {
        TextSize::Small => &SMALL_FONT,
        TextSize::Large => &LARGE_FONT,
    }
}

fn rgb565(color: Color565) -> Rgb565 {
    Rgb565::from(RawU16::new(color.raw()))
}

/// Display surface backed by a `DrawTarget` and a backlight switch
pub struct GraphicsSurface<D, B> {
    target: D,
    backlight: B,
}

impl<D, B> GraphicsSurface<D, B>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
    B: Backlight,
{
    pub fn new(target: D, backlight: B) -> Self {
        Self { target, backlight }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn backlight(&self) -> &B {
        &self.backlight
    }

    /// Release the draw target and backlight
    pub fn release(self) -> (D, B) {
        (self.target, self.backlight)
    }
}

impl<D, B> Surface for GraphicsSurface<D, B>
where
    D: DrawTarget<Color = Rgb565> + OriginDimensions,
    B: Backlight,
{
    fn init(&mut self) -> Result<(), SurfaceError> {
        let size = self.target.size();
        if size.width != u32::from(SURFACE_WIDTH) || size.height != u32::from(SURFACE_HEIGHT) {
            return Err(SurfaceError::InvalidDimensions);
        }
        self.target
            .clear(Rgb565::BLACK)
            .map_err(|_| SurfaceError::Communication)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), SurfaceError> {
        self.backlight.set_on(on)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color565) -> Result<(), SurfaceError> {
        let area = Rectangle::new(
            Point::new(i32::from(rect.x), i32::from(rect.y)),
            Size::new(u32::from(rect.width), u32::from(rect.height)),
        );
        self.target
            .fill_solid(&area, rgb565(color))
            .map_err(|_| SurfaceError::Communication)
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: TextStyle,
    ) -> Result<u16, SurfaceError> {
        let character_style = MonoTextStyle::new(font(style.size), rgb565(style.color));
        Text::with_baseline(
            text,
            Point::new(i32::from(x), i32::from(y)),
            character_style,
            Baseline::Top,
        )
        .draw(&mut self.target)
        .map_err(|_| SurfaceError::Communication)?;

        let chars = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        Ok(x.saturating_add(chars.saturating_mul(style.size.char_width())))
    }
}
