//! Display presenter
//!
//! Renders the boot, scanning and alert screens and flashes the alert
//! header while a detection is active.
//!
//! There is a single header flash routine. `tick` drives it every
//! [`DisplayTiming::flash_interval_ms`]; `heartbeat_pulse` switches it to
//! the in-range style and steps it once immediately. Both share the phase
//! flag and the transition timestamp, so they never fight over the band.

use heapless::String;

use super::layout::{self, Run, BODY, HEADER_BAND, HEADER_TEXT_Y, MARGIN_X, TITLE_BAR};
use super::InitError;
use crate::config::{palette, DeviceInfo, DisplayTiming};
use crate::detection::DetectionRecord;
use crate::state::{DisplayMode, DisplayTrigger, ScanStatus};
use crate::traits::{elapsed_ms, Clock, Color565, Surface, SurfaceError, SurfaceExt, TextStyle};

/// Caption and colors used by the flashing header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaderStyle {
    /// Fresh detection
    #[default]
    Alert,
    /// Detected device still in range
    InRange,
}

impl HeaderStyle {
    pub fn caption(&self) -> &'static str {
        match self {
            HeaderStyle::Alert => "!! DETECTED !!",
            HeaderStyle::InRange => "!! IN RANGE !!",
        }
    }

    /// (background, foreground) for the given flash phase
    pub fn colors(&self, flash_on: bool) -> (Color565, Color565) {
        match (self, flash_on) {
            (HeaderStyle::Alert, true) => (palette::ALERT_BG, palette::ALERT_FG),
            (HeaderStyle::Alert, false) => (palette::HEARTBEAT, palette::ALERT_FG),
            (HeaderStyle::InRange, true) => (palette::HEARTBEAT, palette::BACKGROUND),
            (HeaderStyle::InRange, false) => (palette::ALERT_BG, palette::ALERT_FG),
        }
    }
}

/// Presenter for the status display
pub struct DisplayPresenter<S, C> {
    surface: S,
    clock: C,
    timing: DisplayTiming,
    device: DeviceInfo,
    mode: DisplayMode,
    record: DetectionRecord,
    scan: ScanStatus,
    flash_on: bool,
    header_style: HeaderStyle,
    last_transition_ms: u64,
}

impl<S: Surface, C: Clock> DisplayPresenter<S, C> {
    /// Create a presenter with default timing and device info
    pub fn new(surface: S, clock: C) -> Self {
        Self::with_config(surface, clock, DisplayTiming::default(), DeviceInfo::default())
    }

    pub fn with_config(surface: S, clock: C, timing: DisplayTiming, device: DeviceInfo) -> Self {
        let last_transition_ms = clock.now_ms();
        Self {
            surface,
            clock,
            timing,
            device,
            mode: DisplayMode::Boot,
            record: DetectionRecord::default(),
            scan: ScanStatus::default(),
            flash_on: false,
            header_style: HeaderStyle::Alert,
            last_transition_ms,
        }
    }

    /// Bring up the panel, clear it and turn the backlight on
    pub fn initialize(&mut self) -> Result<(), InitError> {
        self.surface.init().map_err(InitError::Display)?;
        self.surface
            .fill_screen(palette::BACKGROUND)
            .map_err(InitError::Display)?;
        self.surface
            .set_backlight(true)
            .map_err(InitError::Display)?;
        info!("display: initialized");
        Ok(())
    }

    /// Show the boot screen
    pub fn show_boot(&mut self) -> Result<(), SurfaceError> {
        self.enter(DisplayTrigger::Boot);
        self.draw_boot()
    }

    /// Show scan status, unless an alert is on screen
    ///
    /// While an alert is on screen the status is only stored, so the
    /// scanning screen is current once the detection clears.
    pub fn show_scanning(&mut self, channel: u8, ble_active: bool) -> Result<(), SurfaceError> {
        self.scan = ScanStatus::new(channel, ble_active);
        if !self.mode.accepts_scan_status() {
            debug!("display: scan status stored during detection");
            return Ok(());
        }
        self.enter(DisplayTrigger::ScanStatus);
        self.draw_scanning()
    }

    /// Show the alert screen for a new detection
    pub fn show_detection(&mut self, record: DetectionRecord) -> Result<(), SurfaceError> {
        info!(
            "display: detection {} score={}",
            record.kind.as_str(),
            record.threat_score
        );
        self.record = record;
        self.flash_on = true;
        self.header_style = HeaderStyle::Alert;
        self.enter(DisplayTrigger::Detection);
        self.draw_detection()
    }

    /// Advance the header flash
    ///
    /// `now` must come from the same time base as the presenter's clock;
    /// transitions are stamped with `Clock::now_ms` and compared to `now`.
    pub fn tick(&mut self, now: u64) -> Result<(), SurfaceError> {
        if self.mode != DisplayMode::Detecting {
            return Ok(());
        }
        if elapsed_ms(now, self.last_transition_ms) < self.timing.flash_interval_ms {
            return Ok(());
        }
        self.flash_on = !self.flash_on;
        self.last_transition_ms = now;
        self.draw_header()
    }

    /// Drop the active detection
    ///
    /// Does not redraw; follow with [`Self::show_scanning`].
    pub fn clear_detection(&mut self) {
        self.mode = self.mode.transition(DisplayTrigger::Cleared);
        self.record.clear();
        debug!("display: detection cleared");
    }

    /// Flash the header once in the in-range style
    pub fn heartbeat_pulse(&mut self) -> Result<(), SurfaceError> {
        if self.mode != DisplayMode::Detecting {
            return Ok(());
        }
        self.header_style = HeaderStyle::InRange;
        self.flash_on = !self.flash_on;
        self.last_transition_ms = self.clock.now_ms();
        self.draw_header()
    }

    /// Re-render the whole screen for the current mode
    pub fn redraw(&mut self) -> Result<(), SurfaceError> {
        match self.mode {
            DisplayMode::Boot => self.draw_boot(),
            DisplayMode::Scanning => self.draw_scanning(),
            DisplayMode::Detecting => {
                self.draw_detection()?;
                self.draw_header()
            }
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn record(&self) -> &DetectionRecord {
        &self.record
    }

    pub fn scan_status(&self) -> ScanStatus {
        self.scan
    }

    pub fn flash_on(&self) -> bool {
        self.flash_on
    }

    pub fn header_style(&self) -> HeaderStyle {
        self.header_style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn enter(&mut self, trigger: DisplayTrigger) {
        let next = self.mode.transition(trigger);
        if next != self.mode {
            debug!("display: {} -> {}", self.mode, next);
        }
        self.mode = next;
        self.last_transition_ms = self.clock.now_ms();
    }

    fn draw_title_bar(&mut self) -> Result<(), SurfaceError> {
        self.surface.fill_rect(TITLE_BAR, palette::TITLE_BG)?;
        self.surface.draw_text(
            MARGIN_X,
            4,
            self.device.title,
            TextStyle::small(palette::TITLE_FG),
        )?;
        Ok(())
    }

    fn draw_boot(&mut self) -> Result<(), SurfaceError> {
        let device = self.device;
        self.surface.fill_screen(palette::BACKGROUND)?;
        self.draw_title_bar()?;

        let s = &mut self.surface;
        s.draw_text(100, 4, device.version, TextStyle::small(palette::MAGENTA))?;
        s.draw_text(MARGIN_X, 24, device.name, TextStyle::small(palette::ACCENT))?;
        s.draw_text(MARGIN_X, 38, "Initializing...", TextStyle::small(palette::WARN))?;
        s.draw_text(MARGIN_X, 56, "WiFi + BLE Scanner", TextStyle::small(palette::CYAN))?;
        Ok(())
    }

    fn draw_scanning(&mut self) -> Result<(), SurfaceError> {
        self.surface.fill_rect(BODY, palette::BACKGROUND)?;
        self.draw_title_bar()?;

        let channel: String<4> = layout::number(self.scan.channel as u32, "");
        let (ble_text, ble_color) = if self.scan.ble_active {
            (" ON", palette::GREEN)
        } else {
            (" --", palette::RED)
        };

        let s = &mut self.surface;
        layout::draw_line(
            s,
            MARGIN_X,
            20,
            &[
                Run::new("SCANNING", TextStyle::large(palette::CYAN)),
                Run::new("...", TextStyle::large(palette::MAGENTA)),
            ],
        )?;
        layout::draw_line(
            s,
            MARGIN_X,
            46,
            &[
                Run::new("WiFi:", TextStyle::small(palette::WARN)),
                Run::new(" Ch ", TextStyle::small(palette::WHITE)),
                Run::new(&channel, TextStyle::small(palette::CYAN)),
            ],
        )?;
        layout::draw_line(
            s,
            80,
            46,
            &[
                Run::new("BLE:", TextStyle::small(palette::WARN)),
                Run::new(ble_text, TextStyle::small(ble_color)),
            ],
        )?;
        s.draw_text(
            MARGIN_X,
            64,
            "Hunting Flock cameras...",
            TextStyle::small(palette::DARK_GRAY),
        )?;
        Ok(())
    }

    fn draw_detection(&mut self) -> Result<(), SurfaceError> {
        let fg = TextStyle::small(palette::ALERT_FG);
        let threat: String<8> = layout::number(self.record.threat_score as u32, "%");

        let s = &mut self.surface;
        s.fill_screen(palette::ALERT_BG)?;
        s.draw_text(MARGIN_X, HEADER_TEXT_Y, HeaderStyle::Alert.caption(), fg)?;
        s.draw_text(MARGIN_X, 16, &self.record.kind, fg)?;
        s.draw_text(MARGIN_X, 30, self.record.visible_name(), fg)?;
        s.draw_text(
            MARGIN_X,
            44,
            &self.record.mac,
            TextStyle::small(palette::YELLOW),
        )?;
        layout::draw_line(
            s,
            MARGIN_X,
            62,
            &[Run::new("Threat: ", fg), Run::new(&threat, fg)],
        )?;
        Ok(())
    }

    fn draw_header(&mut self) -> Result<(), SurfaceError> {
        let (bg, fg) = self.header_style.colors(self.flash_on);
        self.surface.fill_rect(HEADER_BAND, bg)?;
        self.surface.draw_text(
            MARGIN_X,
            HEADER_TEXT_Y,
            self.header_style.caption(),
            TextStyle::small(fg),
        )?;
        Ok(())
    }
}
