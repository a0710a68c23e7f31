//! Unit tests for the speed-to-timer math.
//!
//! The pure math is exercised through the public types, without any
//! hardware or mock peripherals.

use proptest::prelude::*;

use drv8825_driver::error::DriverError;
use drv8825_driver::{Microsteps, PulseTiming, Rpm, StepFrequency};

/// Frequency carrying an exact number of pulses per second.
///
/// One step per revolution at full stepping makes RPM/60 the pulse rate,
/// so `hz * 60` RPM constructs exactly `hz` pulses/sec.
fn freq(hz: u16) -> StepFrequency {
    StepFrequency::from_rpm(Rpm(hz as f32 * 60.0), 1, Microsteps::FULL).unwrap()
}

#[test]
fn test_reference_deployment_vector() {
    // 30 RPM, 1/32 microstepping, 84 MHz clock, divide-by-210 prescaler
    let timing = PulseTiming::new(84_000_000, 209);

    let frequency =
        StepFrequency::from_rpm(Rpm(30.0), 200, Microsteps::THIRTY_SECOND).unwrap();
    assert_eq!(frequency.value(), 3200);

    let period = timing.period_for(frequency).unwrap();
    assert_eq!(period, 125);

    assert_eq!(PulseTiming::duty_compare(period), 62);
}

#[test]
fn test_frequency_scales_with_resolution() {
    for (microsteps, expected_hz) in [
        (Microsteps::FULL, 100),
        (Microsteps::HALF, 200),
        (Microsteps::QUARTER, 400),
        (Microsteps::EIGHTH, 800),
        (Microsteps::SIXTEENTH, 1600),
        (Microsteps::THIRTY_SECOND, 3200),
    ] {
        let frequency = StepFrequency::from_rpm(Rpm(30.0), 200, microsteps).unwrap();
        assert_eq!(frequency.value(), expected_hz);
    }
}

proptest! {
    /// Every frequency the prescaled 84 MHz clock can realize maps to a
    /// nonzero 16-bit period; the divisor is never zero.
    #[test]
    fn period_math_is_total_for_realizable_frequencies(hz in 7u16..=u16::MAX) {
        let timing = PulseTiming::new(84_000_000, 209);

        let period = timing.period_for(freq(hz)).unwrap();
        prop_assert!(period >= 1);

        // Quantization only ever lands at or above the request
        prop_assert!(timing.realized_frequency(period) >= hz as u32);
    }

    /// Frequency derivation never wraps: every outcome is either a
    /// documented rejection or a value inside the 16-bit contract.
    #[test]
    fn frequency_derivation_never_wraps(rpm in 0.0f32..1.0e9) {
        match StepFrequency::from_rpm(Rpm(rpm), 200, Microsteps::THIRTY_SECOND) {
            Ok(frequency) => prop_assert!(frequency.value() >= 1),
            Err(DriverError::FrequencyOutOfRange { .. }) => {}
            Err(e) => prop_assert!(false, "unexpected error: {:?}", e),
        }
    }

    /// The compare register is exactly half the period, truncated, for the
    /// whole register range.
    #[test]
    fn duty_compare_is_half_period(period in 0u16..=u16::MAX) {
        let compare = PulseTiming::duty_compare(period);
        prop_assert_eq!(compare, period / 2);
        prop_assert!(compare <= period);
    }
}
