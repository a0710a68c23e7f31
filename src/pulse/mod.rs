//! Pulse-generator module for drv8825-driver.
//!
//! Provides the capability trait over the timer peripheral and the
//! frequency-to-register math.

mod channel;
mod generator;
mod timing;

pub use channel::PulseChannel;
pub use generator::PulseGenerator;
pub use timing::PulseTiming;
