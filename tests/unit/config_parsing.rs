//! Unit tests for configuration parsing.

use drv8825_driver::{Microsteps, PulseChannel, SystemConfig};

/// Defaults mirror the reference deployment: 200-step motor, 84 MHz timer
/// clock, divide-by-210 prescaler stage, channel 1.
#[test]
fn test_minimal_config_fills_defaults() {
    let toml_str = r#"
[drivers.stepper1]
name = "main_axis"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let driver = config.driver("stepper1").expect("Driver should exist");

    assert_eq!(driver.name.as_str(), "main_axis");
    assert_eq!(driver.steps_per_revolution, 200);
    assert_eq!(driver.microsteps, Microsteps::THIRTY_SECOND);
    assert_eq!(driver.clock_hz, 84_000_000);
    assert_eq!(driver.prescaler, 209);
    assert_eq!(driver.channel, PulseChannel::Ch1);
    assert!(!driver.invert_direction);
}

#[test]
fn test_full_config_overrides_defaults() {
    let toml_str = r#"
[drivers.pan]
name = "Pan Axis"
steps_per_revolution = 400
microsteps = 8
timer_clock_hz = 72000000
prescaler = 143
channel = "ch3"
invert_direction = true
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let driver = config.driver("pan").expect("Driver should exist");

    assert_eq!(driver.steps_per_revolution, 400);
    assert_eq!(driver.microsteps, Microsteps::EIGHTH);
    assert_eq!(driver.clock_hz, 72_000_000);
    assert_eq!(driver.prescaler, 143);
    assert_eq!(driver.channel, PulseChannel::Ch3);
    assert!(driver.invert_direction);
}

#[test]
fn test_multiple_drivers() {
    let toml_str = r#"
[drivers.pan]
name = "Pan Axis"

[drivers.tilt]
name = "Tilt Axis"
microsteps = 16
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert!(config.driver("pan").is_some());
    assert!(config.driver("tilt").is_some());
    assert!(config.driver("roll").is_none());

    let names: Vec<&str> = config.driver_names().collect();
    assert_eq!(names.len(), 2);
}

#[test]
fn test_invalid_microsteps_fail_at_parse() {
    // 64 is valid for some chips but not selectable on the DRV8825 mode pins
    let toml_str = r#"
[drivers.stepper1]
name = "main_axis"
microsteps = 64
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

#[test]
fn test_invalid_channel_fails_at_parse() {
    let toml_str = r#"
[drivers.stepper1]
name = "main_axis"
channel = "ch5"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}
