//! Single addressable LED over a smart-leds writer
//!
//! Works with any `SmartLedsWrite` whose color type is `RGB8`: the APA102
//! on the T-Dongle S3, WS2812 over RMT or PIO. Global brightness is applied
//! in software with `smart_leds::brightness` before each frame is written.

use flockyou_core::traits::{LightDevice, LightError, Rgb};
use smart_leds::{brightness, SmartLedsWrite, RGB8};

/// One-pixel LED strip
pub struct SmartLed<W> {
    writer: W,
    color: Rgb,
    brightness: u8,
}

impl<W> SmartLed<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wrap a writer; latched color is black at full brightness
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: Rgb::BLACK,
            brightness: u8::MAX,
        }
    }

    /// Latched color
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Latched brightness
    pub fn level(&self) -> u8 {
        self.brightness
    }

    pub fn release(self) -> W {
        self.writer
    }

    fn write(&mut self, color: Rgb, level: u8) -> Result<(), LightError> {
        let pixel = RGB8::new(color.r, color.g, color.b);
        self.writer
            .write(brightness(core::iter::once(pixel), level))
            .map_err(|_| LightError::Communication)
    }
}

impl<W> LightDevice for SmartLed<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn init(&mut self) -> Result<(), LightError> {
        // Pixels power up with random contents
        self.write(Rgb::BLACK, 0)
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn show(&mut self) -> Result<(), LightError> {
        self.write(self.color, self.brightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flockyou_core::config::palette;

    /// Writer that keeps the last frame
    struct MockWriter {
        last: Option<RGB8>,
        frames: usize,
        fail: bool,
    }

    impl MockWriter {
        fn new() -> Self {
            Self {
                last: None,
                frames: 0,
                fail: false,
            }
        }
    }

    impl SmartLedsWrite for MockWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            for pixel in iterator {
                self.last = Some(pixel.into());
            }
            self.frames += 1;
            Ok(())
        }
    }

    #[test]
    fn test_init_writes_dark_frame() {
        let mut led = SmartLed::new(MockWriter::new());
        led.init().unwrap();

        let writer = led.release();
        assert_eq!(writer.frames, 1);
        assert_eq!(writer.last, Some(RGB8::new(0, 0, 0)));
    }

    #[test]
    fn test_latch_until_show() {
        let mut led = SmartLed::new(MockWriter::new());
        led.set_color(palette::LED_RED);
        led.set_brightness(255);
        assert_eq!(led.color(), palette::LED_RED);
        assert_eq!(led.level(), 255);

        let writer = led.release();
        assert_eq!(writer.frames, 0);
    }

    #[test]
    fn test_full_brightness_is_exact() {
        let mut led = SmartLed::new(MockWriter::new());
        led.set_color(Rgb::new(255, 100, 0));
        led.set_brightness(255);
        led.show().unwrap();

        assert_eq!(led.release().last, Some(RGB8::new(255, 100, 0)));
    }

    #[test]
    fn test_brightness_scales_channels() {
        let mut led = SmartLed::new(MockWriter::new());
        led.set_color(Rgb::new(255, 0, 255));
        led.set_brightness(50);
        led.show().unwrap();

        let pixel = led.release().last.unwrap();
        assert!(pixel.r > 0 && pixel.r <= 51);
        assert_eq!(pixel.g, 0);
        assert_eq!(pixel.r, pixel.b);
    }

    #[test]
    fn test_zero_brightness_is_dark() {
        let mut led = SmartLed::new(MockWriter::new());
        led.set_color(Rgb::new(255, 255, 255));
        led.set_brightness(0);
        led.show().unwrap();

        assert_eq!(led.release().last, Some(RGB8::new(0, 0, 0)));
    }

    #[test]
    fn test_write_error() {
        let mut writer = MockWriter::new();
        writer.fail = true;
        let mut led = SmartLed::new(writer);
        assert_eq!(led.init(), Err(LightError::Communication));
        assert_eq!(led.show(), Err(LightError::Communication));
    }
}
