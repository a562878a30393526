//! Status LED implementations

pub mod smart;

pub use smart::SmartLed;
