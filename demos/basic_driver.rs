//! Basic driver control example.
//!
//! Demonstrates building a DRV8825 driver with mock hardware, stepping
//! through direction/enable/resolution configuration, and programming a
//! speed on the pulse generator.
//!
//! This example uses hand-rolled mocks so it runs without real hardware.

use drv8825_driver::{Direction, Drv8825, Enable, PulseChannel, PulseGenerator, Rpm};

/// Mock output pin for demonstration.
struct MockPin {
    state: bool,
}

impl MockPin {
    fn new() -> Self {
        Self { state: false }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

/// Mock pulse generator that prints every register operation.
struct MockPulse {
    period: u16,
}

impl PulseGenerator for MockPulse {
    type Error = core::convert::Infallible;

    fn clock_hz(&self) -> u32 {
        84_000_000
    }

    fn set_prescaler(&mut self, prescaler: u16) {
        println!("  timer: prescaler <- {}", prescaler);
    }

    fn set_period(&mut self, period: u16) {
        self.period = period;
        println!("  timer: period <- {}", period);
    }

    fn period(&self) -> u16 {
        self.period
    }

    fn init_base_timing(&mut self) -> Result<(), Self::Error> {
        println!("  timer: base timing initialized");
        Ok(())
    }

    fn init_pulse_mode(&mut self) -> Result<(), Self::Error> {
        println!("  timer: pulse mode initialized");
        Ok(())
    }

    fn start_channel(&mut self, channel: PulseChannel) {
        println!("  timer: channel {} started", channel.index());
    }

    fn stop_channel(&mut self, channel: PulseChannel) {
        println!("  timer: channel {} stopped", channel.index());
    }

    fn set_compare(&mut self, channel: PulseChannel, value: u16) {
        println!("  timer: channel {} compare <- {}", channel.index(), value);
    }
}

fn main() {
    println!("=== Basic Driver Control Example ===\n");

    // Build a driver with mock hardware
    let mut driver = Drv8825::builder()
        .name("demo_driver")
        .dir_pin(MockPin::new())
        .enable_pin(MockPin::new())
        .pulse(MockPulse { period: 0 })
        .channel(PulseChannel::Ch1)
        .build()
        .expect("Failed to build driver");

    println!("Driver created: {}", driver.name());
    println!("Resolution: 1/{} step", driver.microsteps().value());
    println!("Direction: {:?}", driver.direction());
    println!("Enable: {:?}\n", driver.enable());

    // Configure for a run
    driver.set_resolution(32).expect("Valid resolution");
    driver.set_direction(Direction::Forward).expect("Pin write");
    driver.set_enable(Enable::Start).expect("Pin write");

    // 30 RPM at 1/32 microstepping: 3200 pulses/sec
    println!("Setting speed to 30 RPM:");
    driver.set_speed_rpm(Rpm(30.0)).expect("Speed in range");

    let frequency = driver.step_frequency().expect("Programmed");
    println!("\nProgrammed pulse frequency: {} Hz", frequency.value());
    println!(
        "Realized frequency after quantization: {} Hz",
        driver.timing().realized_frequency(driver.pulse().period())
    );

    // An invalid resolution is reported AND forces the 1/32 fallback
    println!("\nRequesting invalid resolution 5:");
    match driver.set_resolution(5) {
        Err(e) => println!("  error: {}", e),
        Ok(()) => unreachable!(),
    }
    println!("  resolution now: 1/{} step", driver.microsteps().value());

    // Zero speed stops the pulse train instead of dividing by zero
    println!("\nSetting speed to 0 RPM:");
    driver.set_speed_rpm(Rpm(0.0)).expect("Stop always succeeds");
    driver.set_enable(Enable::Stop).expect("Pin write");

    println!("\n=== Example Complete ===");
}
