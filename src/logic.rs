//! Business logic layer (hardware-independent)

use core::sync::atomic::{AtomicBool, Ordering};

use embedded_hal_async::delay::DelayNs;
use log::{info, warn};

use crate::{
    Error,
    config::{LoopConfig, SPLASH_TEXT},
    format::format_measurement,
    model::{DisplayLine, Measurement},
    traits::{DisplaySink, MeasurementSource},
};

/// Stops [`LoopDriver::run`] at the start of its next cycle.
#[derive(Debug, Default)]
pub struct CancelToken {
    cancelled: AtomicBool,
}

impl CancelToken {
    pub const fn new() -> Self {
        Self {
            cancelled: AtomicBool::new(false),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Draw the boot message shown while the loop is not running yet.
pub fn show_splash<D: DisplaySink>(display: &mut D) -> Result<(), Error> {
    display.clear()?;
    display.draw_text(0, SPLASH_TEXT)?;
    display.update()
}

/// Acquire, format and render on a fixed period.
///
/// Owns the sensor, the display and the timer for as long as it runs.
pub struct LoopDriver<M, D, T> {
    source: M,
    display: D,
    timer: T,
    config: LoopConfig,
}

impl<M, D, T> LoopDriver<M, D, T>
where
    M: MeasurementSource,
    D: DisplaySink,
    T: DelayNs,
{
    pub fn new(source: M, display: D, timer: T, config: &LoopConfig) -> Self {
        Self {
            source,
            display,
            timer,
            config: *config,
        }
    }

    /// Read temperature, humidity and pressure, in that order.
    pub fn acquire(&mut self) -> Measurement {
        Measurement {
            temperature: checked("temperature", self.source.read_temperature()),
            humidity: checked("humidity", self.source.read_humidity()),
            pressure: checked("pressure", self.source.read_pressure()),
        }
    }

    pub fn render(&mut self, lines: &[DisplayLine]) -> Result<(), Error> {
        self.display.clear()?;
        for line in lines {
            self.display.draw_text(line.row, line.text.as_str())?;
        }
        self.display.update()
    }

    /// One acquire-format-render pass. Display errors are logged and do not
    /// stop the loop.
    pub fn run_cycle(&mut self) -> Measurement {
        let measurement = self.acquire();
        info!("{}", measurement);

        let lines = format_measurement(&measurement, self.config.rows);
        if let Err(e) = self.render(&lines) {
            warn!("Display refresh failed: {}", e);
        }

        measurement
    }

    /// Run cycles until `cancel` is set, sleeping `interval_ms` after each.
    pub async fn run(&mut self, cancel: &CancelToken) {
        while !cancel.is_cancelled() {
            self.run_cycle();
            self.timer.delay_ms(self.config.interval_ms).await;
        }
    }

    pub fn into_parts(self) -> (M, D, T) {
        (self.source, self.display, self.timer)
    }
}

fn checked(name: &str, reading: Result<f32, Error>) -> Option<f32> {
    match reading {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to read {}: {}", name, e);
            None
        }
    }
}
