//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use drv8825_driver::load_config;
///
/// let config = load_config("drivers.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[drivers.x_axis]
name = "X-Axis"
"#;

        let config = parse_config(toml).unwrap();
        let driver = config.driver("x_axis").unwrap();
        assert_eq!(driver.steps_per_revolution, 200);
        assert_eq!(driver.clock_hz, 84_000_000);
        assert_eq!(driver.prescaler, 209);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[drivers.pan]
name = "Pan Axis"
steps_per_revolution = 400
microsteps = 16
timer_clock_hz = 72000000
prescaler = 143
channel = "ch2"
invert_direction = true
"#;

        let config = parse_config(toml).unwrap();
        let driver = config.driver("pan").unwrap();
        assert_eq!(driver.steps_per_revolution, 400);
        assert_eq!(driver.prescaler, 143);
        assert!(driver.invert_direction);
    }

    #[test]
    fn test_parse_rejects_invalid_microsteps() {
        let toml = r#"
[drivers.x_axis]
name = "X-Axis"
microsteps = 3
"#;

        assert!(parse_config(toml).is_err());
    }
}
