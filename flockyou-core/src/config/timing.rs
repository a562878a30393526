//! Animation timing and brightness levels

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display header flash interval (2 Hz)
pub const DISPLAY_FLASH_INTERVAL_MS: u64 = 500;

/// LED red/blue strobe interval
pub const LED_STROBE_INTERVAL_MS: u64 = 50;

/// LED heartbeat pulse interval
pub const LED_PULSE_INTERVAL_MS: u64 = 500;

/// Strobe ticks allowed before demoting to heartbeat (~3 s at 50 ms)
pub const LED_STROBE_BUDGET: u8 = 60;

/// Duration of each color in the LED boot sequence
pub const LED_BOOT_STEP_MS: u32 = 100;

/// Display presenter timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayTiming {
    /// Header flash toggle interval while a detection is active
    pub flash_interval_ms: u64,
}

impl Default for DisplayTiming {
    fn default() -> Self {
        Self {
            flash_interval_ms: DISPLAY_FLASH_INTERVAL_MS,
        }
    }
}

/// LED presenter timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LedTiming {
    /// Strobe toggle interval during a detection
    pub strobe_interval_ms: u64,
    /// Pulse toggle interval while in range
    pub pulse_interval_ms: u64,
    /// Strobe ticks before the strobe demotes to a pulse
    ///
    /// The demotion happens on the tick that pushes the count past this
    /// value, so the strobe runs for `strobe_budget + 1` ticks.
    pub strobe_budget: u8,
    /// Duration of each boot sequence color
    pub boot_step_ms: u32,
}

impl Default for LedTiming {
    fn default() -> Self {
        Self {
            strobe_interval_ms: LED_STROBE_INTERVAL_MS,
            pulse_interval_ms: LED_PULSE_INTERVAL_MS,
            strobe_budget: LED_STROBE_BUDGET,
            boot_step_ms: LED_BOOT_STEP_MS,
        }
    }
}

/// LED global brightness levels (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LedLevels {
    /// Resting brightness after init, boot and strobe
    pub default: u8,
    /// Brightness during the boot sequence
    pub boot: u8,
    /// Brightness during the detection strobe
    pub strobe: u8,
    /// Bright half of the heartbeat pulse
    pub pulse_bright: u8,
    /// Dim half of the heartbeat pulse
    pub pulse_dim: u8,
}

impl Default for LedLevels {
    fn default() -> Self {
        Self {
            default: 50,
            boot: 100,
            strobe: 255,
            pulse_bright: 80,
            pulse_dim: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let display = DisplayTiming::default();
        assert_eq!(display.flash_interval_ms, 500);

        let led = LedTiming::default();
        assert_eq!(led.strobe_interval_ms, 50);
        assert_eq!(led.pulse_interval_ms, 500);
        assert_eq!(led.strobe_budget, 60);

        let levels = LedLevels::default();
        assert_eq!(levels.default, 50);
        assert_eq!(levels.strobe, 255);
        assert!(levels.pulse_bright > levels.pulse_dim);
    }

    #[test]
    fn test_strobe_budget_covers_three_seconds() {
        let led = LedTiming::default();
        assert_eq!(led.strobe_interval_ms * led.strobe_budget as u64, 3000);
    }
}
