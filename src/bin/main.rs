#![no_std]
#![no_main]

use core::cell::RefCell;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_backtrace as _;
use esp_hal::{delay::Delay, timer::timg::TimerGroup};
use static_cell::StaticCell;

use weather_oled::{
    Error,
    app,
    config::{LoopConfig, SPLASH_HOLD_MS},
    hardware::{self, Bus, Screen, Sensor},
    logic::{CancelToken, LoopDriver, show_splash},
};

type Driver = LoopDriver<Sensor, Screen, embassy_time::Delay>;

static BUS: StaticCell<RefCell<Bus>> = StaticCell::new();

// Never cancelled on the device; the loop runs until reset.
static CANCEL: CancelToken = CancelToken::new();

esp_bootloader_esp_idf::esp_app_desc!();

#[embassy_executor::task]
async fn measurement_task(mut driver: Driver) {
    driver.run(&CANCEL).await;
}

#[esp_rtos::main]
async fn main(spawner: Spawner) {
    esp_println::logger::init_logger_from_env();
    let peripherals = esp_hal::init(esp_hal::Config::default());

    esp_println::println!("=== Weather OLED ===");

    // Initialize RTOS timer for embassy
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // launch logs any startup failure
    let _ = app::launch(
        move || {
            let bus = hardware::init_bus(peripherals.I2C0, peripherals.GPIO21, peripherals.GPIO22)?;
            let bus: &'static RefCell<Bus> = BUS.init(RefCell::new(bus));

            let (sensor, mut screen) = hardware::init_devices(bus)?;

            show_splash(&mut screen)?;
            Delay::new().delay_millis(SPLASH_HOLD_MS);

            Ok(LoopDriver::new(
                sensor,
                screen,
                embassy_time::Delay,
                &LoopConfig::default(),
            ))
        },
        |driver| {
            spawner
                .spawn(measurement_task(driver))
                .map_err(|_| Error::Spawn)
        },
    );

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
