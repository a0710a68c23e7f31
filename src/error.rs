//! Error types for drv8825-driver.
//!
//! Provides unified error handling across configuration, driver operations,
//! and pulse-generator programming.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all drv8825-driver operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Driver operation error
    Driver(DriverError),
    /// Pulse-generator peripheral initialization error
    Pulse(PulseError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep value (must be one of: 1, 2, 4, 8, 16, 32)
    InvalidMicrosteps(u16),
    /// Driver name not found in configuration
    DriverNotFound(heapless::String<32>),
    /// Invalid steps per revolution (must be > 0)
    InvalidStepsPerRevolution(u16),
    /// Invalid timer clock rate (must be > 0)
    InvalidClockRate(u32),
    /// Prescaler stage divides the clock below one pulse per second
    PrescalerTooLarge {
        /// Configured prescaler increment
        prescaler: u16,
        /// Timer input clock in Hz
        clock_hz: u32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Driver operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    /// Requested microstep resolution is not in the allowed set.
    ///
    /// Non-fatal: the driver has already fallen back to 1/32 microstepping
    /// when this is returned.
    InvalidResolution(u16),
    /// Requested speed is negative or not a number
    InvalidSpeed(f32),
    /// Derived pulse frequency is outside the 16-bit range the timer can realize.
    ///
    /// Rejected with no hardware change.
    FrequencyOutOfRange {
        /// Derived pulse frequency in pulses per second (truncated)
        pulse_hz: u32,
    },
    /// Derived timer period is outside the 16-bit auto-reload range.
    ///
    /// Rejected with no hardware change.
    PeriodOutOfRange {
        /// Derived period register value
        period: u32,
    },
    /// Pin operation failed
    PinError,
}

/// Pulse-generator peripheral errors.
///
/// These indicate the timer hardware refused reinitialization. They are
/// fatal at this layer; the caller decides escalation policy.
#[derive(Debug, Clone, PartialEq)]
pub enum PulseError {
    /// Base timing (prescaler/period) initialization failed
    BaseTiming,
    /// Output-compare/PWM mode initialization failed
    PulseMode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
            Error::Pulse(e) => write!(f, "Pulse generator error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16, 32", v)
            }
            ConfigError::DriverNotFound(name) => write!(f, "Driver '{}' not found", name),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidClockRate(v) => {
                write!(f, "Invalid timer clock rate: {}. Must be > 0", v)
            }
            ConfigError::PrescalerTooLarge { prescaler, clock_hz } => {
                write!(
                    f,
                    "Prescaler {} leaves no realizable pulse rate at {} Hz clock",
                    prescaler, clock_hz
                )
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::InvalidResolution(v) => {
                write!(f, "Invalid resolution: {}. Fell back to 32 microsteps", v)
            }
            DriverError::InvalidSpeed(rpm) => write!(f, "Invalid speed: {} RPM", rpm),
            DriverError::FrequencyOutOfRange { pulse_hz } => {
                write!(
                    f,
                    "Pulse frequency {} Hz outside realizable range 1-{}",
                    pulse_hz,
                    u16::MAX
                )
            }
            DriverError::PeriodOutOfRange { period } => {
                write!(
                    f,
                    "Timer period {} outside auto-reload range 1-{}",
                    period,
                    u16::MAX
                )
            }
            DriverError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

impl fmt::Display for PulseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PulseError::BaseTiming => write!(f, "Timer base initialization failed"),
            PulseError::PulseMode => write!(f, "Timer pulse mode initialization failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

impl From<PulseError> for Error {
    fn from(e: PulseError) -> Self {
        Error::Pulse(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}

#[cfg(feature = "std")]
impl std::error::Error for PulseError {}
