//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{DriverConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Steps per revolution is nonzero
/// - Timer clock rate is nonzero
/// - The prescaler stage leaves at least one realizable pulse rate
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (name, driver) in config.drivers.iter() {
        validate_driver(name.as_str(), driver)?;
    }

    Ok(())
}

fn validate_driver(_name: &str, config: &DriverConfig) -> Result<()> {
    // A motor with zero steps per revolution cannot exist
    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    // Timer clock must be positive
    if config.clock_hz == 0 {
        return Err(Error::Config(ConfigError::InvalidClockRate(config.clock_hz)));
    }

    // The divide-by-(prescaler+1) stage must leave a nonzero counting rate,
    // otherwise no period value can produce pulses
    if config.clock_hz / (config.prescaler as u32 + 1) == 0 {
        return Err(Error::Config(ConfigError::PrescalerTooLarge {
            prescaler: config.prescaler,
            clock_hz: config.clock_hz,
        }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::Microsteps;
    use crate::pulse::PulseChannel;

    fn make_config(steps: u16, clock_hz: u32, prescaler: u16) -> DriverConfig {
        DriverConfig {
            name: heapless::String::try_from("test").unwrap(),
            steps_per_revolution: steps,
            microsteps: Microsteps::THIRTY_SECOND,
            clock_hz,
            prescaler,
            channel: PulseChannel::Ch1,
            invert_direction: false,
        }
    }

    #[test]
    fn test_zero_steps_per_revolution() {
        let config = make_config(0, 84_000_000, 209);
        let result = validate_driver("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
        ));
    }

    #[test]
    fn test_zero_clock_rate() {
        let config = make_config(200, 0, 209);
        let result = validate_driver("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidClockRate(0)))
        ));
    }

    #[test]
    fn test_prescaler_starves_clock() {
        // 100 Hz clock divided by 210 leaves no whole pulse per second
        let config = make_config(200, 100, 209);
        let result = validate_driver("test", &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::PrescalerTooLarge { .. }))
        ));
    }

    #[test]
    fn test_valid_driver_passes() {
        let config = make_config(200, 84_000_000, 209);
        assert!(validate_driver("test", &config).is_ok());
    }
}
