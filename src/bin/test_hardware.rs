#![no_std]
#![no_main]

use core::cell::RefCell;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use static_cell::StaticCell;

use weather_oled::{
    config::LINE_CAPACITY,
    format::{format_humidity, format_pressure, format_temperature},
    hardware::{self, Bus},
    logic::show_splash,
    traits::MeasurementSource,
};

esp_bootloader_esp_idf::esp_app_desc!();

static BUS: StaticCell<RefCell<Bus>> = StaticCell::new();

// Test result tracking
struct TestResults {
    passed: u32,
    failed: u32,
    total: u32,
}

impl TestResults {
    fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            total: 0,
        }
    }

    fn assert(&mut self, condition: bool, test_name: &str) {
        self.total += 1;
        if condition {
            self.passed += 1;
            esp_println::println!("  ✓ {}", test_name);
        } else {
            self.failed += 1;
            esp_println::println!("  ✗ {} FAILED", test_name);
        }
    }

    fn assert_eq<T: PartialEq + core::fmt::Debug>(&mut self, left: T, right: T, test_name: &str) {
        self.total += 1;
        if left == right {
            self.passed += 1;
            esp_println::println!("  ✓ {}", test_name);
        } else {
            self.failed += 1;
            esp_println::println!("  ✗ {} FAILED: {:?} != {:?}", test_name, left, right);
        }
    }

    fn print_summary(&self) {
        esp_println::println!("\n==========================================");
        esp_println::println!("Test Summary:");
        esp_println::println!("  Total:  {}", self.total);
        esp_println::println!("  Passed: {}", self.passed);
        esp_println::println!("  Failed: {}", self.failed);
        if self.failed == 0 {
            esp_println::println!("\n✓ ALL TESTS PASSED!");
        } else {
            esp_println::println!("\n✗ SOME TESTS FAILED");
        }
        esp_println::println!("==========================================");
    }
}

// Float formatting on the target goes through a different libcore build, so
// check it here as well as on the host.
fn test_formatter(results: &mut TestResults) {
    esp_println::println!("\n[TEST] Formatter Tests");

    results.assert_eq(
        format_temperature(Some(22.5)).as_str(),
        "Temp: 22.5 C",
        "temperature line",
    );
    results.assert_eq(
        format_temperature(Some(-5.0)).as_str(),
        "Temp: -5.0 C",
        "negative temperature",
    );
    results.assert_eq(
        format_humidity(Some(45.678)).as_str(),
        "Hum: 45.7 %",
        "humidity rounding",
    );
    results.assert_eq(
        format_pressure(Some(1013.25)).as_str(),
        "Pres: 1013 hPa",
        "pressure rounding",
    );
    results.assert_eq(format_humidity(None).as_str(), "Hum: N/A", "failed read");
    results.assert(
        format_pressure(Some(f32::MAX)).len() <= LINE_CAPACITY,
        "huge pressure truncated",
    );
}

async fn test_devices(results: &mut TestResults, bus: &'static RefCell<Bus>) {
    esp_println::println!("\n[TEST] Sensor and Display Tests");

    let (mut sensor, mut screen) = match hardware::init_devices(bus) {
        Ok(devices) => {
            results.assert(true, "sensor and display initialization");
            devices
        }
        Err(e) => {
            esp_println::println!("  Failed to initialize devices: {}", e);
            results.assert(false, "sensor and display initialization");
            return;
        }
    };

    results.assert(show_splash(&mut screen).is_ok(), "splash rendered");

    // Reading samples (5 samples)
    esp_println::println!("  Reading samples (5 samples)...");
    let mut samples = heapless::Vec::<(f32, f32, f32), 5>::new();
    for i in 0..5 {
        Timer::after(Duration::from_millis(100)).await;
        let reading = (
            sensor.read_temperature(),
            sensor.read_humidity(),
            sensor.read_pressure(),
        );
        match reading {
            (Ok(t), Ok(h), Ok(p)) => {
                esp_println::println!(
                    "    Sample {}: {:.2}°C {:.2}% {:.2}hPa",
                    i + 1,
                    t,
                    h,
                    p
                );
                let _ = samples.push((t, h, p));
            }
            _ => esp_println::println!("    Sample {} failed", i + 1),
        }
    }

    results.assert_eq(samples.len(), 5, "collected 5 samples");

    for (t, h, p) in samples.iter() {
        results.assert(*t > -40.0 && *t < 85.0, "temperature in valid range");
        results.assert(*h >= 0.0 && *h <= 100.0, "humidity in valid range");
        results.assert(*p > 300.0 && *p < 1100.0, "pressure in valid range");
    }
}

#[esp_rtos::main]
async fn main(_spawner: Spawner) {
    esp_println::logger::init_logger_from_env();
    let peripherals = esp_hal::init(esp_hal::Config::default());

    esp_println::println!("\n==========================================");
    esp_println::println!("=== Hardware Unit Test Runner ===");
    esp_println::println!("==========================================");

    let mut results = TestResults::new();

    // Run tests that don't need hardware
    test_formatter(&mut results);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    match hardware::init_bus(peripherals.I2C0, peripherals.GPIO21, peripherals.GPIO22) {
        Ok(bus) => {
            results.assert(true, "I2C bus initialization");
            test_devices(&mut results, BUS.init(RefCell::new(bus))).await;
        }
        Err(e) => {
            esp_println::println!("  Failed to create bus: {}", e);
            results.assert(false, "I2C bus initialization");
        }
    }

    results.print_summary();

    esp_println::println!("\nTest run complete. Looping...");
    loop {
        Timer::after(Duration::from_millis(1000)).await;
    }
}
