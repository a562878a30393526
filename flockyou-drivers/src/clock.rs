//! Clock implementations

#[cfg(feature = "embassy")]
pub use embassy::EmbassyClock;

#[cfg(feature = "embassy")]
mod embassy {
    use flockyou_core::traits::Clock;

    /// Monotonic clock backed by the embassy time driver
    ///
    /// Zero-sized, so every presenter can hold its own copy.
    #[derive(Debug, Default, Clone, Copy)]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    pub struct EmbassyClock;

    impl Clock for EmbassyClock {
        fn now_ms(&self) -> u64 {
            embassy_time::Instant::now().as_millis()
        }
    }
}
