//! Driver module for drv8825-driver.
//!
//! Provides the DRV8825 driver, its builder, and the signal-level types.

mod builder;
mod drv8825;
mod signals;

pub use builder::Drv8825Builder;
pub use drv8825::Drv8825;
pub use signals::{Direction, Enable};
