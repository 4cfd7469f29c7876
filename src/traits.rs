//! Hardware abstraction traits

use crate::Error;

/// Source of the three environmental readings
pub trait MeasurementSource {
    /// Read temperature in Celsius
    fn read_temperature(&mut self) -> Result<f32, Error>;

    /// Read relative humidity in %
    fn read_humidity(&mut self) -> Result<f32, Error>;

    /// Read pressure in hPa
    fn read_pressure(&mut self) -> Result<f32, Error>;
}

/// Text display addressed by page rows
pub trait DisplaySink {
    /// Clear the display
    fn clear(&mut self) -> Result<(), Error>;

    /// Draw text starting at the left edge of `row`
    fn draw_text(&mut self, row: u8, text: &str) -> Result<(), Error>;

    /// Update/flush the display (show the buffer)
    fn update(&mut self) -> Result<(), Error>;
}
