//! Event fan-out to both presenters
//!
//! The detection feed raises one event; the display and the LED each get
//! the call that matches it. The presenters never talk to each other.

use embedded_hal::delay::DelayNs;

use crate::presenter::{DisplayPresenter, InitError, LedPresenter};
use crate::state::FeedbackEvent;
use crate::traits::{Clock, LightDevice, LightError, Surface, SurfaceError};

/// Render failure on one or both channels
///
/// When both channels fail the display error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedbackError {
    Display(SurfaceError),
    Light(LightError),
}

impl From<SurfaceError> for FeedbackError {
    fn from(e: SurfaceError) -> Self {
        FeedbackError::Display(e)
    }
}

impl From<LightError> for FeedbackError {
    fn from(e: LightError) -> Self {
        FeedbackError::Light(e)
    }
}

/// Both presenters, driven by one event feed and one loop
pub struct Feedback<S, L, C> {
    display: DisplayPresenter<S, C>,
    led: LedPresenter<L, C>,
}

impl<S, L, C> Feedback<S, L, C>
where
    S: Surface,
    L: LightDevice,
    C: Clock + Clone,
{
    /// Build both presenters with default configuration on a shared clock
    pub fn new(surface: S, light: L, clock: C) -> Self {
        Self {
            display: DisplayPresenter::new(surface, clock.clone()),
            led: LedPresenter::new(light, clock),
        }
    }

    pub fn from_presenters(display: DisplayPresenter<S, C>, led: LedPresenter<L, C>) -> Self {
        Self { display, led }
    }

    /// Bring up the display, then the LED
    pub fn initialize(&mut self) -> Result<(), InitError> {
        self.display.initialize()?;
        self.led.initialize()
    }

    /// Show the boot screen and run the blocking LED boot sequence
    pub fn boot<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), FeedbackError> {
        let display = self.display.show_boot();
        let led = self.led.boot_sequence(delay);
        display?;
        led?;
        Ok(())
    }

    /// Dispatch one feed event
    pub fn handle(&mut self, event: FeedbackEvent) -> Result<(), FeedbackError> {
        let (display, led) = match event {
            FeedbackEvent::ScanStatus(status) => (
                self.display.show_scanning(status.channel, status.ble_active),
                Ok(()),
            ),
            FeedbackEvent::Detection(record) => (
                self.display.show_detection(record),
                self.led.detection_flash(),
            ),
            FeedbackEvent::DetectionCleared => {
                let status = self.display.scan_status();
                self.display.clear_detection();
                (
                    self.display
                        .show_scanning(status.channel, status.ble_active),
                    self.led.off(),
                )
            }
            FeedbackEvent::StillInRange => {
                self.led.heartbeat_pulse();
                (self.display.heartbeat_pulse(), Ok(()))
            }
        };
        display?;
        led?;
        Ok(())
    }

    /// Advance both animations
    pub fn tick(&mut self, now: u64) -> Result<(), FeedbackError> {
        let display = self.display.tick(now);
        let led = self.led.tick(now);
        display?;
        led?;
        Ok(())
    }

    pub fn display(&self) -> &DisplayPresenter<S, C> {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayPresenter<S, C> {
        &mut self.display
    }

    pub fn led(&self) -> &LedPresenter<L, C> {
        &self.led
    }

    pub fn led_mut(&mut self) -> &mut LedPresenter<L, C> {
        &mut self.led
    }
}
