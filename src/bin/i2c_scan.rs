//! I2C bus scan
//!
//! Probes every 7-bit address on the application bus (SDA => GPIO21,
//! SCL => GPIO22, 100 kHz). Expect the BME280 at 0x76 (or 0x77) and the
//! SSD1306 at 0x3C.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;

use weather_oled::{
    config::{DISPLAY_ADDRESS, SENSOR_ADDRESS},
    hardware,
};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) {
    esp_println::logger::init_logger_from_env();
    let peripherals = esp_hal::init(esp_hal::Config::default());
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let mut i2c0 =
        match hardware::init_bus(peripherals.I2C0, peripherals.GPIO21, peripherals.GPIO22) {
            Ok(bus) => bus,
            Err(e) => {
                esp_println::println!("[ERROR] {}", e);
                loop {
                    Timer::after(Duration::from_secs(1)).await;
                }
            }
        };

    esp_println::println!("I2C scan start");
    for address in 0x03..0x78 {
        if i2c0.write(address, &[]).is_ok() {
            let label = if address == SENSOR_ADDRESS.value() {
                " (BME280)"
            } else if address == DISPLAY_ADDRESS {
                " (SSD1306)"
            } else {
                ""
            };
            esp_println::println!("Found device at address 0x{:02X}{}", address, label);
        }
    }
    esp_println::println!("I2C scan done");

    loop {
        Timer::after(Duration::from_millis(100)).await;
    }
}
