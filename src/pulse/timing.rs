//! Timer math: pulse frequency to prescaler/period translation.

use crate::config::units::StepFrequency;
use crate::error::DriverError;

/// Fixed duty cycle of the pulse train, in percent.
///
/// The motor advances one microstep per pulse edge; an exact 50% square
/// wave gives equal high/low time so every edge is detected reliably.
const DUTY_PERCENT: u32 = 50;

/// Timer parameters and the math that translates a pulse frequency into
/// register values.
///
/// The output frequency of a hardware timer is
/// `clock_hz / ((prescaler + 1) * (period + 1))`; this driver fixes the
/// prescaler and solves for the period. Computed once at driver
/// construction and used for every speed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTiming {
    clock_hz: u32,
    prescaler: u16,
}

impl PulseTiming {
    /// Create timer math for a given input clock and fixed prescaler increment.
    #[inline]
    pub const fn new(clock_hz: u32, prescaler: u16) -> Self {
        Self { clock_hz, prescaler }
    }

    /// Timer input clock in Hz.
    #[inline]
    pub const fn clock_hz(self) -> u32 {
        self.clock_hz
    }

    /// Fixed prescaler increment (divide-by-(prescaler+1)).
    #[inline]
    pub const fn prescaler(self) -> u16 {
        self.prescaler
    }

    /// Period register value realizing a pulse frequency.
    ///
    /// Integer division truncates, so achievable frequencies are quantized;
    /// the period rounds down and the realized rate lands at or slightly
    /// above the request. This is an accepted limitation of the
    /// fixed-prescaler scheme, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::PeriodOutOfRange`] when the result does not
    /// fit the 16-bit auto-reload register, or truncates to zero (the
    /// frequency is above what the prescaled clock can count).
    pub fn period_for(self, frequency: StepFrequency) -> Result<u16, DriverError> {
        // frequency is nonzero by construction, so the divisor never is
        let divisor = (self.prescaler as u32 + 1) * frequency.value() as u32;
        let period = self.clock_hz / divisor;

        if period == 0 || period > u16::MAX as u32 {
            return Err(DriverError::PeriodOutOfRange { period });
        }

        Ok(period as u16)
    }

    /// Compare register value producing the fixed 50% duty cycle.
    #[inline]
    pub fn duty_compare(period: u16) -> u16 {
        (DUTY_PERCENT * period as u32 / 100) as u16
    }

    /// Pulse frequency actually produced by a period value, after
    /// quantization.
    pub fn realized_frequency(self, period: u16) -> u32 {
        self.clock_hz / ((self.prescaler as u32 + 1) * period as u32)
    }
}
