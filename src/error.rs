use core::fmt;

/// Errors reported by the collaborators and the startup path.
///
/// Driver errors are logged with their full `Debug` form where they are
/// mapped, so the variants only carry a short static description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// I2C bus could not be configured
    Bus(&'static str),
    /// BME280 init or measurement failed
    Sensor(&'static str),
    /// SSD1306 init, draw or flush failed
    Display(&'static str),
    /// The measurement task could not be spawned
    Spawn,
}

impl Error {
    pub(crate) fn as_str(&self) -> &'static str {
        match *self {
            Error::Bus(_) => "bus",
            Error::Sensor(_) => "sensor",
            Error::Display(_) => "display",
            Error::Spawn => "spawn",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(msg) | Error::Sensor(msg) | Error::Display(msg) => {
                write!(f, "{} error: {}", self.as_str(), msg)
            }
            Error::Spawn => f.write_str("failed to spawn measurement task"),
        }
    }
}
