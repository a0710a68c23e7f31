//! DRV8825 driver.
//!
//! Generic over embedded-hal 1.0 pin types and a pulse-generator capability.

use embedded_hal::digital::OutputPin;

use crate::config::units::{Microsteps, Rpm, StepFrequency};
use crate::error::{DriverError, Error, PulseError, Result};
use crate::pulse::{PulseChannel, PulseGenerator, PulseTiming};

use super::builder::Drv8825Builder;
use super::signals::{Direction, Enable};

/// DRV8825 stepper driver.
///
/// Owns a direction pin, an enable pin and one pulse-generator channel, plus
/// the current microstep resolution. Speed changes reprogram the pulse
/// generator to emit the derived step frequency as a 50% duty square wave.
///
/// Generic over:
/// - `DIR`: direction pin type (must implement `OutputPin`)
/// - `EN`: enable pin type (must implement `OutputPin`)
/// - `PULSE`: timer peripheral (must implement [`PulseGenerator`])
///
/// Every operation is a synchronous, idempotent re-assertion of one piece
/// of configuration; there is no internal state machine and no locking.
/// Callers invoking operations from multiple execution contexts must
/// serialize access externally.
pub struct Drv8825<DIR, EN, PULSE>
where
    DIR: OutputPin,
    EN: OutputPin,
    PULSE: PulseGenerator,
{
    /// DIR pin (level selects rotation direction).
    dir_pin: DIR,

    /// nENBL pin (active-low output stage enable).
    enable_pin: EN,

    /// Pulse-generator peripheral, exclusively owned.
    pulse: PULSE,

    /// Output-compare channel carrying the pulse train.
    channel: PulseChannel,

    /// Timer math for this peripheral's clock and fixed prescaler.
    timing: PulseTiming,

    /// Base steps per revolution before microstepping.
    steps_per_revolution: u16,

    /// Current microstep resolution.
    microsteps: Microsteps,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Current direction (cached to avoid unnecessary pin writes).
    direction: Direction,

    /// Current enable state (cached to avoid unnecessary pin writes).
    enable: Enable,

    /// Last successfully programmed pulse frequency, if any.
    frequency: Option<StepFrequency>,

    /// Driver name for logging/debugging.
    name: heapless::String<32>,
}

impl<DIR, EN, PULSE> Drv8825<DIR, EN, PULSE>
where
    DIR: OutputPin,
    EN: OutputPin,
    PULSE: PulseGenerator,
{
    /// Create a builder for a new driver.
    pub fn builder() -> Drv8825Builder<DIR, EN, PULSE> {
        Drv8825Builder::new()
    }

    /// Store the hardware handles and assert the safe startup state:
    /// direction forward, output stage stopped. The pulse generator is not
    /// touched; no pulse output exists until the first speed command.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        dir_pin: DIR,
        enable_pin: EN,
        pulse: PULSE,
        channel: PulseChannel,
        timing: PulseTiming,
        steps_per_revolution: u16,
        microsteps: Microsteps,
        invert_direction: bool,
        name: heapless::String<32>,
    ) -> Result<Self> {
        let mut driver = Self {
            dir_pin,
            enable_pin,
            pulse,
            channel,
            timing,
            steps_per_revolution,
            microsteps,
            invert_direction,
            direction: Direction::Forward,
            enable: Enable::Stop,
            frequency: None,
            name,
        };

        driver.write_direction(Direction::Forward)?;
        driver.write_enable(Enable::Stop)?;

        Ok(driver)
    }

    /// Get the driver name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current microstep resolution.
    #[inline]
    pub fn microsteps(&self) -> Microsteps {
        self.microsteps
    }

    /// Get the current direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the current enable state.
    #[inline]
    pub fn enable(&self) -> Enable {
        self.enable
    }

    /// Get the last successfully programmed pulse frequency.
    ///
    /// `None` until the first speed command, and again after a zero-speed
    /// stop.
    #[inline]
    pub fn step_frequency(&self) -> Option<StepFrequency> {
        self.frequency
    }

    /// Get the timer math in use.
    #[inline]
    pub fn timing(&self) -> PulseTiming {
        self.timing
    }

    /// Borrow the pulse-generator peripheral, for diagnostics and tests.
    #[inline]
    pub fn pulse(&self) -> &PULSE {
        &self.pulse
    }

    /// Set the microstep resolution from a raw mode value.
    ///
    /// Accepts one of 1, 2, 4, 8, 16, 32. Any other value stores the
    /// fallback of 32 microsteps **and** returns
    /// [`DriverError::InvalidResolution`]: the caller is told the request
    /// failed, but the driver is still forced to a known resolution. This
    /// fail-but-still-mutate contract is part of the API, not an accident;
    /// use [`set_microsteps`](Self::set_microsteps) to make invalid values
    /// unrepresentable.
    pub fn set_resolution(&mut self, resolution: u16) -> Result<()> {
        match Microsteps::new(resolution) {
            Ok(microsteps) => {
                self.microsteps = microsteps;
                Ok(())
            }
            Err(_) => {
                self.microsteps = Microsteps::THIRTY_SECOND;
                Err(Error::Driver(DriverError::InvalidResolution(resolution)))
            }
        }
    }

    /// Set the microstep resolution from a validated value.
    #[inline]
    pub fn set_microsteps(&mut self, microsteps: Microsteps) {
        self.microsteps = microsteps;
    }

    /// Set the rotation direction.
    ///
    /// Re-asserting the current direction performs no pin write.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::PinError`] if the pin write fails.
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.direction == direction {
            return Ok(());
        }

        self.write_direction(direction)
    }

    /// Set the output stage enable state.
    ///
    /// Re-asserting the current state performs no pin write.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::PinError`] if the pin write fails.
    pub fn set_enable(&mut self, enable: Enable) -> Result<()> {
        if self.enable == enable {
            return Ok(());
        }

        self.write_enable(enable)
    }

    /// Set the rotation speed.
    ///
    /// Derives the pulse frequency `steps_per_revolution × microsteps ×
    /// rpm/60`, translates it into the timer's period register at the fixed
    /// prescaler, and reprograms the pulse generator to emit it at 50%
    /// duty. Out-of-range requests are rejected with no hardware change.
    ///
    /// Zero RPM is an explicit stop: the output-compare channel is stopped
    /// and no timer register is written, so a zero frequency never reaches
    /// the period divisor.
    ///
    /// # Errors
    ///
    /// - [`DriverError::InvalidSpeed`] for negative or NaN RPM.
    /// - [`DriverError::FrequencyOutOfRange`] /
    ///   [`DriverError::PeriodOutOfRange`] when the derived values do not
    ///   fit the 16-bit registers; the hardware is left untouched.
    /// - [`PulseError::BaseTiming`] / [`PulseError::PulseMode`] when the
    ///   peripheral refuses reinitialization. Fatal at this layer; the
    ///   caller decides escalation.
    pub fn set_speed_rpm(&mut self, rpm: Rpm) -> Result<()> {
        if rpm.0.is_nan() || rpm.0 < 0.0 {
            return Err(Error::Driver(DriverError::InvalidSpeed(rpm.0)));
        }

        if rpm.0 == 0.0 {
            self.pulse.stop_channel(self.channel);
            self.frequency = None;
            return Ok(());
        }

        let frequency =
            StepFrequency::from_rpm(rpm, self.steps_per_revolution, self.microsteps)
                .map_err(Error::Driver)?;

        self.apply_step_frequency(frequency)
    }

    /// Reprogram the pulse generator for a new frequency.
    fn apply_step_frequency(&mut self, frequency: StepFrequency) -> Result<()> {
        let period = self.timing.period_for(frequency).map_err(Error::Driver)?;

        self.pulse.set_prescaler(self.timing.prescaler());
        self.pulse.set_period(period);

        self.pulse
            .init_base_timing()
            .map_err(|_| Error::Pulse(PulseError::BaseTiming))?;
        self.pulse
            .init_pulse_mode()
            .map_err(|_| Error::Pulse(PulseError::PulseMode))?;

        self.pulse.start_channel(self.channel);

        // The compare value derives from the period the peripheral reports,
        // not the value just requested
        let compare = PulseTiming::duty_compare(self.pulse.period());
        self.pulse.set_compare(self.channel, compare);

        self.frequency = Some(frequency);
        Ok(())
    }

    fn write_direction(&mut self, direction: Direction) -> Result<()> {
        let result = if direction.pin_high(self.invert_direction) {
            self.dir_pin.set_high()
        } else {
            self.dir_pin.set_low()
        };
        result.map_err(|_| Error::Driver(DriverError::PinError))?;

        self.direction = direction;
        Ok(())
    }

    fn write_enable(&mut self, enable: Enable) -> Result<()> {
        let result = if enable.pin_high() {
            self.enable_pin.set_high()
        } else {
            self.enable_pin.set_low()
        };
        result.map_err(|_| Error::Driver(DriverError::PinError))?;

        self.enable = enable;
        Ok(())
    }
}
