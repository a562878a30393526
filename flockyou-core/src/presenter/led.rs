//! Status LED presenter
//!
//! A fresh detection strobes red/blue at full brightness. After the strobe
//! budget is spent the LED demotes itself to a slow orange pulse that runs
//! until the caller turns it off or sets a static color.

use embedded_hal::delay::DelayNs;

use super::InitError;
use crate::config::{palette, LedLevels, LedTiming};
use crate::state::{LedMode, LedTrigger};
use crate::traits::{elapsed_ms, Clock, LightDevice, LightError, Rgb};

/// Presenter for the status LED
pub struct LedPresenter<L, C> {
    device: L,
    clock: C,
    timing: LedTiming,
    levels: LedLevels,
    mode: LedMode,
    color: Rgb,
    brightness: u8,
    /// Strobe ticks since the last detection
    flash_count: u8,
    strobe_red: bool,
    pulse_on: bool,
    last_transition_ms: u64,
}

impl<L: LightDevice, C: Clock> LedPresenter<L, C> {
    /// Create a presenter with default timing and levels
    pub fn new(device: L, clock: C) -> Self {
        Self::with_config(device, clock, LedTiming::default(), LedLevels::default())
    }

    pub fn with_config(device: L, clock: C, timing: LedTiming, levels: LedLevels) -> Self {
        let last_transition_ms = clock.now_ms();
        Self {
            device,
            clock,
            timing,
            levels,
            mode: LedMode::Idle,
            color: Rgb::BLACK,
            brightness: levels.default,
            flash_count: 0,
            strobe_red: true,
            pulse_on: false,
            last_transition_ms,
        }
    }

    /// Bring up the LED at the default brightness, turned off
    pub fn initialize(&mut self) -> Result<(), InitError> {
        self.device.init().map_err(InitError::Light)?;
        self.brightness = self.levels.default;
        self.off().map_err(InitError::Light)?;
        info!("led: initialized");
        Ok(())
    }

    /// Cycle red, blue, cyan to prove the LED works
    ///
    /// Blocks for three boot steps. Call once before periodic polling starts.
    pub fn boot_sequence<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), LightError> {
        self.brightness = self.levels.boot;
        for color in palette::LED_BOOT_SEQUENCE {
            self.color = color;
            self.push()?;
            delay.delay_ms(self.timing.boot_step_ms);
        }
        self.brightness = self.levels.default;
        self.off()
    }

    /// Start (or restart) the detection strobe
    pub fn detection_flash(&mut self) -> Result<(), LightError> {
        self.enter(LedTrigger::Detection);
        self.flash_count = 0;
        self.strobe_red = true;
        self.last_transition_ms = self.clock.now_ms();
        self.color = palette::LED_RED;
        self.brightness = self.levels.strobe;
        info!("led: strobe started");
        self.push()
    }

    /// Start the in-range pulse, unless a strobe is running
    pub fn heartbeat_pulse(&mut self) {
        if self.mode == LedMode::Heartbeat {
            return;
        }
        self.enter(LedTrigger::Heartbeat);
        if self.mode == LedMode::Heartbeat {
            self.pulse_on = false;
        }
    }

    /// Show a static color at the current brightness
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) -> Result<(), LightError> {
        self.enter(LedTrigger::Manual);
        self.color = Rgb::new(r, g, b);
        self.push()
    }

    /// Turn the LED off
    pub fn off(&mut self) -> Result<(), LightError> {
        self.enter(LedTrigger::Manual);
        self.color = Rgb::BLACK;
        self.push()
    }

    /// Advance the strobe or pulse animation
    ///
    /// `now` must come from the same time base as the presenter's clock.
    pub fn tick(&mut self, now: u64) -> Result<(), LightError> {
        if !self.mode.is_animated() {
            return Ok(());
        }
        let elapsed = elapsed_ms(now, self.last_transition_ms);
        match self.mode {
            LedMode::Detecting if elapsed >= self.timing.strobe_interval_ms => {
                self.strobe_red = !self.strobe_red;
                self.color = if self.strobe_red {
                    palette::LED_RED
                } else {
                    palette::LED_BLUE
                };
                self.brightness = self.levels.strobe;
                self.last_transition_ms = now;
                self.flash_count = self.flash_count.saturating_add(1);
                self.push()?;

                if self.flash_count > self.timing.strobe_budget {
                    self.enter(LedTrigger::StrobeExhausted);
                    self.pulse_on = false;
                    // Latched only; the next pulse frame carries it out
                    self.brightness = self.levels.default;
                    self.device.set_brightness(self.brightness);
                    info!("led: strobe budget spent, pulsing");
                }
                Ok(())
            }
            LedMode::Heartbeat if elapsed >= self.timing.pulse_interval_ms => {
                self.pulse_on = !self.pulse_on;
                let (color, level) = if self.pulse_on {
                    (palette::LED_ORANGE, self.levels.pulse_bright)
                } else {
                    (palette::LED_DIM_ORANGE, self.levels.pulse_dim)
                };
                self.color = color;
                self.brightness = level;
                self.last_transition_ms = now;
                self.push()
            }
            _ => Ok(()),
        }
    }

    /// Push the current color and brightness again
    pub fn refresh(&mut self) -> Result<(), LightError> {
        self.push()
    }

    pub fn mode(&self) -> LedMode {
        self.mode
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn flash_count(&self) -> u8 {
        self.flash_count
    }

    pub fn device(&self) -> &L {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut L {
        &mut self.device
    }

    fn enter(&mut self, trigger: LedTrigger) {
        let next = self.mode.transition(trigger);
        if next != self.mode {
            debug!("led: {} -> {}", self.mode, next);
        }
        self.mode = next;
    }

    fn push(&mut self) -> Result<(), LightError> {
        self.device.set_color(self.color);
        self.device.set_brightness(self.brightness);
        self.device.show().map_err(|e| {
            warn!("led: show failed");
            e
        })
    }
}
