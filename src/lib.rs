//! # drv8825-driver
//!
//! DRV8825 stepper driver with hardware pulse-train speed control and embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Hardware pulse trains**: speed is realized by a timer/PWM peripheral, not bit-banged
//! - **embedded-hal 1.0**: uses `OutputPin` for the DIR and nENBL signals
//! - **Capability trait**: the timer peripheral is reached through a `PulseGenerator`
//!   trait, so the frequency math is unit-testable without hardware
//! - **Configuration-driven**: define drivers in TOML files (with `std`)
//! - **no_std compatible**: core library works without the standard library
//! - **Explicit range policy**: 16-bit frequency/period overflow is rejected, never wrapped
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drv8825_driver::{Drv8825, Direction, Enable, Rpm};
//!
//! // Build a driver with embedded-hal pins and a timer channel
//! let mut driver = Drv8825::builder()
//!     .name("x_axis")
//!     .dir_pin(dir_pin)
//!     .enable_pin(enable_pin)
//!     .pulse(pwm_timer)
//!     .build()?;
//!
//! // Configure and run
//! driver.set_resolution(16)?;
//! driver.set_direction(Direction::Forward)?;
//! driver.set_enable(Enable::Start)?;
//! driver.set_speed_rpm(Rpm(30.0))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod driver;
pub mod error;
pub mod pulse;

// Re-exports for ergonomic API
pub use config::{validate_config, DriverConfig, SystemConfig};
pub use driver::{Direction, Drv8825, Drv8825Builder, Enable};
pub use error::{Error, Result};
pub use pulse::{PulseChannel, PulseGenerator, PulseTiming};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Microsteps, Rpm, StepFrequency};
