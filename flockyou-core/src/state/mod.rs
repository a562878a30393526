//! Presenter modes and feed events

pub mod events;
pub mod machine;

pub use events::{FeedbackEvent, ScanStatus};
pub use machine::{DisplayMode, DisplayTrigger, LedMode, LedTrigger};
