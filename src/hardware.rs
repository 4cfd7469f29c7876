use core::cell::RefCell;

use embedded_hal_bus::i2c::RefCellDevice;
use esp_hal::{
    delay::Delay,
    gpio::AnyPin,
    i2c::master::{Config as I2cConfig, I2c},
    peripherals::I2C0,
    time::Rate,
};
use log::{error, info};
use ssd1306::{I2CDisplayInterface, prelude::I2CInterface};

use crate::{
    Error,
    config::{DISPLAY_ADDRESS, I2C_FREQ_KHZ, SENSOR_ADDRESS},
    display::OledSink,
    sensor::Bme280Source,
};

pub type Bus = I2c<'static, esp_hal::Blocking>;
pub type SharedBus = RefCellDevice<'static, Bus>;

pub type Sensor = Bme280Source<SharedBus, Delay>;
pub type Screen = OledSink<I2CInterface<SharedBus>>;

/// Configure I2C0 as bus master on the given pins.
pub fn init_bus<SDA, SCL>(i2c_periph: I2C0<'static>, sda: SDA, scl: SCL) -> Result<Bus, Error>
where
    SDA: Into<AnyPin<'static>>,
    SCL: Into<AnyPin<'static>>,
{
    let i2c = I2c::new(
        i2c_periph,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQ_KHZ)),
    )
    .map_err(|e| {
        error!("Failed to create I2C bus handle: {:?}", e);
        Error::Bus("failed to create I2C bus")
    })?
    .with_sda(sda.into())
    .with_scl(scl.into());

    info!("[I2C] Bus up at {} kHz", I2C_FREQ_KHZ);

    Ok(i2c)
}

/// Bring up the sensor and the display on the shared bus.
pub fn init_devices(bus: &'static RefCell<Bus>) -> Result<(Sensor, Screen), Error> {
    let sensor = Bme280Source::new(RefCellDevice::new(bus), Delay::new(), SENSOR_ADDRESS)?;

    let interface = I2CDisplayInterface::new_custom_address(RefCellDevice::new(bus), DISPLAY_ADDRESS);
    let screen = OledSink::new(interface)?;

    Ok((sensor, screen))
}
