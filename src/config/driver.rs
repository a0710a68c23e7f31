//! Driver configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::error::DriverError;
use crate::pulse::{PulseChannel, PulseTiming};

use super::units::{Microsteps, Rpm, StepFrequency};

/// Complete driver configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Base steps per revolution (typically 200 for 1.8° motors).
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u16,

    /// Microstep resolution (1, 2, 4, 8, 16, 32).
    #[serde(default)]
    pub microsteps: Microsteps,

    /// Timer input clock in Hz.
    #[serde(default = "default_clock_hz", rename = "timer_clock_hz")]
    pub clock_hz: u32,

    /// Fixed prescaler increment programmed into the timer (divide-by-(N+1)).
    #[serde(default = "default_prescaler")]
    pub prescaler: u16,

    /// Output-compare channel carrying the pulse train.
    #[serde(default)]
    pub channel: PulseChannel,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,
}

fn default_steps_per_revolution() -> u16 {
    200
}

fn default_clock_hz() -> u32 {
    84_000_000
}

fn default_prescaler() -> u16 {
    209
}

impl DriverConfig {
    /// Timer math derived from this configuration.
    pub fn timing(&self) -> PulseTiming {
        PulseTiming::new(self.clock_hz, self.prescaler)
    }

    /// Pulse frequency this configuration would request at a given speed.
    ///
    /// Useful for checking a planned speed against the realizable range
    /// before touching hardware.
    pub fn step_frequency_at(&self, rpm: Rpm) -> Result<StepFrequency, DriverError> {
        StepFrequency::from_rpm(rpm, self.steps_per_revolution, self.microsteps)
    }
}
