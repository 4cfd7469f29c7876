// Model of the data read and shown in this app

use core::fmt;

use heapless::String;

use crate::config::LINE_CAPACITY;

/// One cycle's readings. `None` marks a read that failed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    /// Celsius
    pub temperature: Option<f32>,
    /// Relative humidity in %
    pub humidity: Option<f32>,
    /// hPa
    pub pressure: Option<f32>,
}

/// Text for one display row, never longer than [`LINE_CAPACITY`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub row: u8,
    pub text: String<LINE_CAPACITY>,
}

struct Field(Option<f32>);

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:.2}", value),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Temp: {} C, Hum: {} %, Pres: {} hPa",
            Field(self.temperature),
            Field(self.humidity),
            Field(self.pressure)
        )
    }
}
