//! Display backlight control
//!
//! The T-Dongle S3 drives its TFT backlight from a GPIO that is active-low.

use embedded_hal::digital::OutputPin;
use flockyou_core::traits::SurfaceError;

/// Backlight switch
pub trait Backlight {
    /// Turn the backlight on or off
    fn set_on(&mut self, on: bool) -> Result<(), SurfaceError>;

    /// Check if the backlight is currently on
    fn is_on(&self) -> bool;
}

/// Backlight on a GPIO pin
///
/// The pin can be configured as active-high or active-low.
pub struct PinBacklight<P> {
    pin: P,
    /// If true, backlight ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> PinBacklight<P> {
    /// Create a new backlight, initially dark
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the backlight is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, SurfaceError> {
        let mut backlight = Self {
            pin,
            inverted,
            on: false,
        };
        backlight.set_on(false)?;
        Ok(backlight)
    }

    pub fn new_active_high(pin: P) -> Result<Self, SurfaceError> {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Result<Self, SurfaceError> {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Backlight for PinBacklight<P> {
    fn set_on(&mut self, on: bool) -> Result<(), SurfaceError> {
        // Normal: on=true, inverted=false -> high
        // Inverted: on=true, inverted=true -> low
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| SurfaceError::Backlight)?;
        self.on = on;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

/// Panel whose backlight is hard-wired on
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedBacklight;

impl Backlight for FixedBacklight {
    fn set_on(&mut self, _on: bool) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn is_on(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_active_high_backlight() {
        let mut backlight = PinBacklight::new_active_high(MockPin::new()).unwrap();

        // Initially dark
        assert!(!backlight.is_on());
        assert!(!backlight.pin.high);

        backlight.set_on(true).unwrap();
        assert!(backlight.is_on());
        assert!(backlight.pin.high);
    }

    #[test]
    fn test_active_low_backlight() {
        let mut backlight = PinBacklight::new_active_low(MockPin::new()).unwrap();

        // Dark means pin high for active-low
        assert!(!backlight.is_on());
        assert!(backlight.pin.high);

        backlight.set_on(true).unwrap();
        assert!(backlight.is_on());
        assert!(!backlight.pin.high);

        let pin = backlight.release();
        assert!(!pin.high);
    }

    #[test]
    fn test_fixed_backlight() {
        let mut backlight = FixedBacklight;
        backlight.set_on(false).unwrap();
        assert!(backlight.is_on());
    }
}
