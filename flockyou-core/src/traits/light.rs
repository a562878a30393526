//! Status LED trait

/// Errors that can occur while driving the status LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightError {
    /// Bus write to the LED failed
    Communication,
}

/// 24-bit RGB color for the status LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Check if the color is fully dark
    pub const fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Trait for a single addressable LED
///
/// Color and brightness are latched by the implementation and only take
/// effect on the next [`LightDevice::show`], mirroring how APA102/WS2812
/// pixels are pushed out in one frame.
pub trait LightDevice {
    /// Bring up the LED bus
    fn init(&mut self) -> Result<(), LightError>;

    /// Latch the pixel color
    fn set_color(&mut self, color: Rgb);

    /// Latch the global brightness (0-255)
    fn set_brightness(&mut self, level: u8);

    /// Push the latched color and brightness out to the LED
    fn show(&mut self) -> Result<(), LightError>;
}
