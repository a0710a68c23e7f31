//! Unit types for physical quantities.
//!
//! Provides type-safe representations of rotational speed, pulse frequency,
//! and microstep resolution to prevent unit confusion at compile time.

use serde::Deserialize;

use crate::error::{ConfigError, DriverError};

/// Rotational speed in revolutions per minute.
///
/// Used for the user-facing speed API. Internally converted to [`StepFrequency`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Rpm(pub f32);

impl Rpm {
    /// Create a new Rpm value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to revolutions per second.
    #[inline]
    pub fn to_rps(self) -> f32 {
        self.0 / 60.0
    }
}

/// Pulse frequency in pulses per second.
///
/// The pulse generator advances the motor one microstep per pulse, so this
/// is also the microstep rate. The value is 16-bit by contract: it must fit
/// the timer's frequency computation without wraparound, and requests that
/// fall outside `1..=65535` are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepFrequency(u16);

impl StepFrequency {
    /// Derive the pulse frequency for a requested speed.
    ///
    /// Computes `steps_per_revolution * microsteps * rpm / 60` and truncates
    /// toward zero, matching the timer register math.
    ///
    /// # Errors
    ///
    /// - [`DriverError::InvalidSpeed`] if `rpm` is negative or NaN.
    /// - [`DriverError::FrequencyOutOfRange`] if the derived frequency
    ///   truncates to zero or exceeds `u16::MAX`. Zero speed is not a valid
    ///   frequency; callers treat it as an explicit stop before reaching
    ///   this computation.
    pub fn from_rpm(
        rpm: Rpm,
        steps_per_revolution: u16,
        microsteps: Microsteps,
    ) -> Result<Self, DriverError> {
        if rpm.0.is_nan() || rpm.0 < 0.0 {
            return Err(DriverError::InvalidSpeed(rpm.0));
        }

        let pulse_hz =
            steps_per_revolution as f32 * microsteps.value() as f32 * rpm.to_rps();

        if pulse_hz > u16::MAX as f32 {
            return Err(DriverError::FrequencyOutOfRange {
                pulse_hz: pulse_hz as u32,
            });
        }

        // Truncation, not rounding: the realized rate quantizes down.
        let pulse_hz = pulse_hz as u16;
        if pulse_hz == 0 {
            return Err(DriverError::FrequencyOutOfRange { pulse_hz: 0 });
        }

        Ok(Self(pulse_hz))
    }

    /// Get the frequency in pulses per second.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }
}

/// Microstep resolution (1, 2, 4, 8, 16, 32).
///
/// The DRV8825 M0/M1/M2 mode pins select one of six resolutions; values
/// outside that set do not exist in hardware. Validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Microsteps(u16);

impl Microsteps {
    /// Full step (no microstepping).
    pub const FULL: Self = Self(1);
    /// Half step.
    pub const HALF: Self = Self(2);
    /// Quarter step.
    pub const QUARTER: Self = Self(4);
    /// Eighth step.
    pub const EIGHTH: Self = Self(8);
    /// Sixteenth step.
    pub const SIXTEENTH: Self = Self(16);
    /// Thirty-second step (maximum resolution).
    pub const THIRTY_SECOND: Self = Self(32);

    /// Valid microstep values.
    const VALID_VALUES: [u16; 6] = [1, 2, 4, 8, 16, 32];

    /// Create a new Microsteps value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMicrosteps` if the value is not one the
    /// mode pins can select.
    pub fn new(value: u16) -> Result<Self, ConfigError> {
        if Self::VALID_VALUES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidMicrosteps(value))
        }
    }

    /// Get the raw divisor value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Check if a value is valid.
    #[inline]
    pub fn is_valid(value: u16) -> bool {
        Self::VALID_VALUES.contains(&value)
    }
}

impl Default for Microsteps {
    /// Maximum resolution, the driver's safe startup default.
    fn default() -> Self {
        Self::THIRTY_SECOND
    }
}

impl TryFrom<u16> for Microsteps {
    type Error = ConfigError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Microsteps {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u16::deserialize(deserializer)?;
        Microsteps::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
