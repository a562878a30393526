//! Recording devices for unit tests

use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::traits::{Color565, LightDevice, LightError, Rect, Rgb, Surface, SurfaceError, TextStyle};

/// One call made against [`MockSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Init,
    Backlight(bool),
    Fill(Rect, Color565),
    Text {
        x: u16,
        y: u16,
        text: String,
        style: TextStyle,
    },
}

/// Surface that records every call
#[derive(Debug, Default)]
pub struct MockSurface {
    pub ops: Vec<Op>,
    pub fail: bool,
    pub backlight: bool,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// All text drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All fills, in order
    pub fn fills(&self) -> Vec<(Rect, Color565)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Fill(rect, color) => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Style of the first run of `text`
    pub fn style_of(&self, text: &str) -> Option<TextStyle> {
        self.ops.iter().find_map(|op| match op {
            Op::Text { text: t, style, .. } if t == text => Some(*style),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    fn check(&self) -> Result<(), SurfaceError> {
        if self.fail {
            Err(SurfaceError::Communication)
        } else {
            Ok(())
        }
    }
}

impl Surface for MockSurface {
    fn init(&mut self) -> Result<(), SurfaceError> {
        self.check()?;
        self.ops.push(Op::Init);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), SurfaceError> {
        self.check()?;
        self.backlight = on;
        self.ops.push(Op::Backlight(on));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color565) -> Result<(), SurfaceError> {
        self.check()?;
        self.ops.push(Op::Fill(rect, color));
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        style: TextStyle,
    ) -> Result<u16, SurfaceError> {
        self.check()?;
        self.ops.push(Op::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
        Ok(x + style.size.char_width() * text.chars().count() as u16)
    }
}

/// LED that records every frame pushed by `show`
#[derive(Debug, Default)]
pub struct MockLight {
    pub color: Rgb,
    pub brightness: u8,
    pub frames: Vec<(Rgb, u8)>,
    pub inits: usize,
    pub fail: bool,
}

impl MockLight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> Option<(Rgb, u8)> {
        self.frames.last().copied()
    }
}

impl LightDevice for MockLight {
    fn init(&mut self) -> Result<(), LightError> {
        if self.fail {
            return Err(LightError::Communication);
        }
        self.inits += 1;
        Ok(())
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn show(&mut self) -> Result<(), LightError> {
        if self.fail {
            return Err(LightError::Communication);
        }
        self.frames.push((self.color, self.brightness));
        Ok(())
    }
}

/// Delay that only accumulates the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}
