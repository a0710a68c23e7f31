//! Builder pattern for Drv8825.

use embedded_hal::digital::OutputPin;

use crate::config::units::Microsteps;
use crate::config::{DriverConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::pulse::{PulseChannel, PulseGenerator, PulseTiming};

use super::drv8825::Drv8825;

/// Builder for creating Drv8825 instances.
pub struct Drv8825Builder<DIR, EN, PULSE>
where
    DIR: OutputPin,
    EN: OutputPin,
    PULSE: PulseGenerator,
{
    dir_pin: Option<DIR>,
    enable_pin: Option<EN>,
    pulse: Option<PULSE>,
    channel: PulseChannel,
    name: Option<heapless::String<32>>,
    steps_per_revolution: u16,
    microsteps: Microsteps,
    prescaler: u16,
    invert_direction: bool,
}

impl<DIR, EN, PULSE> Default for Drv8825Builder<DIR, EN, PULSE>
where
    DIR: OutputPin,
    EN: OutputPin,
    PULSE: PulseGenerator,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<DIR, EN, PULSE> Drv8825Builder<DIR, EN, PULSE>
where
    DIR: OutputPin,
    EN: OutputPin,
    PULSE: PulseGenerator,
{
    /// Create a new builder with the chip's power-on defaults:
    /// 200 steps per revolution, 1/32 microstepping, prescaler 209,
    /// channel 1.
    pub fn new() -> Self {
        Self {
            dir_pin: None,
            enable_pin: None,
            pulse: None,
            channel: PulseChannel::Ch1,
            name: None,
            steps_per_revolution: 200,
            microsteps: Microsteps::THIRTY_SECOND,
            prescaler: 209,
            invert_direction: false,
        }
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the nENBL pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set the pulse-generator peripheral.
    pub fn pulse(mut self, pulse: PULSE) -> Self {
        self.pulse = Some(pulse);
        self
    }

    /// Set the output-compare channel carrying the pulse train.
    pub fn channel(mut self, channel: PulseChannel) -> Self {
        self.channel = channel;
        self
    }

    /// Set the driver name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Set steps per revolution (base motor steps before microstepping).
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.steps_per_revolution = steps;
        self
    }

    /// Set the microstep resolution.
    pub fn microsteps(mut self, microsteps: Microsteps) -> Self {
        self.microsteps = microsteps;
        self
    }

    /// Set the fixed prescaler increment.
    pub fn prescaler(mut self, prescaler: u16) -> Self {
        self.prescaler = prescaler;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Configure from a DriverConfig.
    pub fn from_driver_config(mut self, config: &DriverConfig) -> Self {
        self.name = Some(config.name.clone());
        self.steps_per_revolution = config.steps_per_revolution;
        self.microsteps = config.microsteps;
        self.prescaler = config.prescaler;
        self.channel = config.channel;
        self.invert_direction = config.invert_direction;
        self
    }

    /// Configure from SystemConfig by driver name.
    pub fn from_config(self, config: &SystemConfig, driver_name: &str) -> Result<Self> {
        let driver_config = config.driver(driver_name).ok_or_else(|| {
            Error::Config(ConfigError::DriverNotFound(
                heapless::String::try_from(driver_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_driver_config(driver_config))
    }

    /// Build the Drv8825.
    ///
    /// The timer math is constructed from the clock rate the pulse
    /// generator reports. Building asserts the safe startup state on the
    /// pins (direction forward, output stage stopped) without touching the
    /// pulse generator.
    ///
    /// # Errors
    ///
    /// Returns an error if required handles are missing, or if a startup
    /// pin write fails.
    pub fn build(self) -> Result<Drv8825<DIR, EN, PULSE>> {
        let dir_pin = self.dir_pin.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("dir_pin is required").unwrap(),
            ))
        })?;

        let enable_pin = self.enable_pin.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("enable_pin is required").unwrap(),
            ))
        })?;

        let pulse = self.pulse.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("pulse generator is required").unwrap(),
            ))
        })?;

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("driver").unwrap());

        let timing = PulseTiming::new(pulse.clock_hz(), self.prescaler);

        Drv8825::new(
            dir_pin,
            enable_pin,
            pulse,
            self.channel,
            timing,
            self.steps_per_revolution,
            self.microsteps,
            self.invert_direction,
            name,
        )
    }
}
