//! BME280 behind the [`MeasurementSource`] trait

use bme280::i2c::BME280;
use embedded_hal::{delay::DelayNs, i2c::I2c};
use log::{error, info, warn};

use crate::{Error, config::SensorAddress, traits::MeasurementSource};

pub struct Bme280Source<I2C, D> {
    sensor: BME280<I2C>,
    delay: D,
}

impl<I2C, D> Bme280Source<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Probe and configure the sensor at `address`.
    pub fn new(i2c: I2C, mut delay: D, address: SensorAddress) -> Result<Self, Error> {
        let mut sensor = match address {
            SensorAddress::Primary => BME280::new_primary(i2c),
            SensorAddress::Secondary => BME280::new_secondary(i2c),
        };

        sensor.init(&mut delay).map_err(|e| {
            error!("Failed to initialize BME280 sensor: {:?}", e);
            Error::Sensor("init failed")
        })?;

        info!("[BME280] Initialized at 0x{:02X}", address.value());

        Ok(Self { sensor, delay })
    }

    /// Trigger one forced-mode measurement, returning (°C, %RH, Pa).
    fn measure(&mut self) -> Result<(f32, f32, f32), Error> {
        let m = self.sensor.measure(&mut self.delay).map_err(|e| {
            warn!("[BME280] Measurement failed: {:?}", e);
            Error::Sensor("measure failed")
        })?;
        Ok((m.temperature, m.humidity, m.pressure))
    }
}

impl<I2C, D> MeasurementSource for Bme280Source<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn read_temperature(&mut self) -> Result<f32, Error> {
        Ok(self.measure()?.0)
    }

    fn read_humidity(&mut self) -> Result<f32, Error> {
        Ok(self.measure()?.1)
    }

    fn read_pressure(&mut self) -> Result<f32, Error> {
        // The driver reports Pa
        Ok(self.measure()?.2 / 100.0)
    }
}
