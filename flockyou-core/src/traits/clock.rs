//! Monotonic millisecond clock

use core::cell::Cell;

/// Source of monotonic time in milliseconds
///
/// The presenters never sleep on the clock; they only stamp transitions
/// with it and compare against the `now` passed to `tick`.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Clock advanced by hand
///
/// Used by host simulations and tests. Share it by reference:
/// `&ManualClock` is itself a [`Clock`].
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Create a clock starting at `start_ms`
    pub const fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    /// Move forward by `delta_ms`, returning the new time
    pub fn advance(&self, delta_ms: u64) -> u64 {
        let now = self.now.get().saturating_add(delta_ms);
        self.now.set(now);
        now
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Milliseconds elapsed from `since` to `now`
///
/// A `now` earlier than `since` counts as no time elapsed.
pub fn elapsed_ms(now: u64, since: u64) -> u64 {
    now.saturating_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);
        assert_eq!(clock.advance(50), 150);
        clock.set(20);
        assert_eq!(clock.now_ms(), 20);
    }

    #[test]
    fn test_clock_by_reference() {
        fn read<C: Clock>(c: C) -> u64 {
            c.now_ms()
        }

        let clock = ManualClock::new(42);
        assert_eq!(read(&clock), 42);
    }

    #[test]
    fn test_elapsed_saturates() {
        assert_eq!(elapsed_ms(1000, 500), 500);
        assert_eq!(elapsed_ms(500, 1000), 0);
    }
}
