//! Presenter mode machines
//!
//! What each presenter renders is a function of its current mode. The
//! transitions are pure so the guard policy can be tested without a device.

/// Display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Title and device info after power-on
    #[default]
    Boot,
    /// Routine scan status
    Scanning,
    /// Alert screen for an active detection
    Detecting,
}

/// Triggers for display mode changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayTrigger {
    /// Boot screen requested
    Boot,
    /// Periodic scan status refresh
    ScanStatus,
    /// New detection event
    Detection,
    /// Detection no longer active
    Cleared,
}

impl DisplayMode {
    /// Check if scan status refreshes are allowed to redraw
    pub fn accepts_scan_status(&self) -> bool {
        !matches!(self, DisplayMode::Detecting)
    }

    /// Process a trigger and return the next mode
    pub fn transition(self, trigger: DisplayTrigger) -> Self {
        use DisplayMode::*;
        use DisplayTrigger as T;

        match (self, trigger) {
            (_, T::Boot) => Boot,
            // An active alert is never replaced by a routine refresh
            (Detecting, T::ScanStatus) => Detecting,
            (_, T::ScanStatus) => Scanning,
            (_, T::Detection) => Detecting,
            (_, T::Cleared) => Scanning,
        }
    }
}

/// Status LED modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedMode {
    /// Off or showing a static color; no animation
    #[default]
    Idle,
    /// Red/blue strobe for a fresh detection
    Detecting,
    /// Slow orange pulse while the device stays in range
    Heartbeat,
}

/// Triggers for LED mode changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedTrigger {
    /// New detection event
    Detection,
    /// Device still in range
    Heartbeat,
    /// Static color or off requested
    Manual,
    /// Strobe ran past its flash budget
    StrobeExhausted,
}

impl LedMode {
    /// Check if the mode animates on tick
    pub fn is_animated(&self) -> bool {
        !matches!(self, LedMode::Idle)
    }

    /// Process a trigger and return the next mode
    pub fn transition(self, trigger: LedTrigger) -> Self {
        use LedMode::*;
        use LedTrigger as T;

        match (self, trigger) {
            (_, T::Detection) => Detecting,
            // A running strobe finishes before the pulse starts
            (Detecting, T::Heartbeat) => Detecting,
            (_, T::Heartbeat) => Heartbeat,
            (_, T::Manual) => Idle,
            (Detecting, T::StrobeExhausted) => Heartbeat,
            (mode, T::StrobeExhausted) => mode,
        }
    }
}
