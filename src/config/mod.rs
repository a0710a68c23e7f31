//! Configuration module for drv8825-driver.
//!
//! Provides types for loading and validating driver configurations
//! from TOML files (with `std` feature) or pre-parsed data.

mod driver;
#[cfg(feature = "std")]
mod loader;
mod system;
pub mod units;
mod validation;

pub use driver::DriverConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microsteps, Rpm, StepFrequency};
