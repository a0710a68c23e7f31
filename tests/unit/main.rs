//! Unit test harness for drv8825-driver.
//!
//! This target organizes unit tests for each component of the library.

mod config_parsing;
mod config_validation;
mod speed_math;
