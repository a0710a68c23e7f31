//! Unit tests for configuration validation.

use drv8825_driver::error::{ConfigError, Error};
use drv8825_driver::{validate_config, SystemConfig};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[drivers.stepper1]
name = "main_axis"
steps_per_revolution = 200
microsteps = 16
timer_clock_hz = 84000000
prescaler = 209
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for zero steps per revolution.
#[test]
fn test_zero_steps_per_revolution_rejected() {
    let toml_str = r#"
[drivers.stepper1]
name = "main_axis"
steps_per_revolution = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    ));
}

/// Test validation fails for a zero timer clock.
#[test]
fn test_zero_clock_rejected() {
    let toml_str = r#"
[drivers.stepper1]
name = "main_axis"
timer_clock_hz = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidClockRate(0)))
    ));
}

/// Test validation fails when the prescaler stage starves the counter.
#[test]
fn test_prescaler_starving_clock_rejected() {
    let toml_str = r#"
[drivers.stepper1]
name = "main_axis"
timer_clock_hz = 100
prescaler = 209
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::PrescalerTooLarge { .. }))
    ));
}

/// Validation sweeps every driver in the file, not just the first.
#[test]
fn test_second_driver_is_validated() {
    let toml_str = r#"
[drivers.good]
name = "Good Axis"

[drivers.bad]
name = "Bad Axis"
steps_per_revolution = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_err());
}
