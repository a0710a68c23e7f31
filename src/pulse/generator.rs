//! Capability trait over the pulse-generator peripheral.

use super::channel::PulseChannel;

/// Interface to a hardware timer used as a pulse generator.
///
/// The driver never touches timer registers directly; everything it needs
/// from the peripheral goes through this trait, which keeps the speed math
/// testable against a mock and portable across timer implementations.
///
/// Implementations wrap one timer instance and are exclusively owned by a
/// single driver.
pub trait PulseGenerator {
    /// Error raised by peripheral reinitialization.
    type Error;

    /// Input clock rate of the timer in Hz.
    fn clock_hz(&self) -> u32;

    /// Stage the prescaler register (divide-by-(value+1)).
    fn set_prescaler(&mut self, prescaler: u16);

    /// Stage the period (auto-reload) register.
    fn set_period(&mut self, period: u16);

    /// Currently programmed period register value.
    ///
    /// Read back to derive the compare value for a given duty cycle.
    fn period(&self) -> u16;

    /// Apply the staged prescaler/period to the timer's base timing.
    ///
    /// # Errors
    ///
    /// Fails if the peripheral rejects reinitialization.
    fn init_base_timing(&mut self) -> Result<(), Self::Error>;

    /// Configure the timer for output-compare/PWM operation.
    ///
    /// # Errors
    ///
    /// Fails if the peripheral rejects reinitialization.
    fn init_pulse_mode(&mut self) -> Result<(), Self::Error>;

    /// Start pulse output on a channel.
    fn start_channel(&mut self, channel: PulseChannel);

    /// Stop pulse output on a channel.
    fn stop_channel(&mut self, channel: PulseChannel);

    /// Write a channel's compare register.
    fn set_compare(&mut self, channel: PulseChannel, value: u16);
}
