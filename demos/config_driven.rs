//! Configuration-driven driver example.
//!
//! Demonstrates defining drivers in TOML, validating the configuration,
//! and checking planned speeds against the realizable range before any
//! hardware is touched.

use drv8825_driver::{Rpm, SystemConfig};

fn main() {
    println!("=== Configuration-Driven Example ===\n");

    let toml_content = r#"
[drivers.pan]
name = "Pan Axis"
steps_per_revolution = 200
microsteps = 32
channel = "ch1"

[drivers.tilt]
name = "Tilt Axis"
steps_per_revolution = 400
microsteps = 16
timer_clock_hz = 72000000
prescaler = 143
channel = "ch2"
invert_direction = true
"#;

    let config: SystemConfig =
        toml::from_str(toml_content).expect("Failed to parse config");

    drv8825_driver::validate_config(&config).expect("Configuration validation failed");
    println!("Loaded and validated {} driver(s)\n", config.drivers.len());

    for name in config.driver_names() {
        let driver = config.driver(name).expect("Listed name resolves");
        println!("Driver '{}' ({}):", name, driver.name);
        println!("  steps/rev: {}", driver.steps_per_revolution);
        println!("  resolution: 1/{} step", driver.microsteps.value());
        println!(
            "  timer: {} Hz clock, divide-by-{} prescaler, channel {}",
            driver.clock_hz,
            driver.prescaler as u32 + 1,
            driver.channel.index()
        );

        // Plan a few speeds against this timer before touching hardware
        let timing = driver.timing();
        for rpm in [1.0f32, 30.0, 120.0, 2000.0] {
            let outcome = driver
                .step_frequency_at(Rpm(rpm))
                .and_then(|freq| timing.period_for(freq).map(|period| (freq, period)));

            match outcome {
                Ok((freq, period)) => println!(
                    "  {:>6.1} RPM -> {} pulses/sec, period {}, realized {} Hz",
                    rpm,
                    freq.value(),
                    period,
                    timing.realized_frequency(period)
                ),
                Err(e) => println!("  {:>6.1} RPM -> rejected: {}", rpm, e),
            }
        }
        println!();
    }

    println!("=== Example Complete ===");
    println!("Pass a parsed DriverConfig to Drv8825::builder().from_config(...) to build hardware drivers.");
}
