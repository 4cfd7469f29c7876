//! Board wiring and timing constants
//!
//! The bus pins (SDA => GPIO21, SCL => GPIO22) are picked from the
//! peripherals in the binaries.

/// Bus clock shared by the sensor and the display
pub const I2C_FREQ_KHZ: u32 = 100;

/// SSD1306 7-bit address
pub const DISPLAY_ADDRESS: u8 = 0x3C;

/// Visible characters per display row
pub const LINE_CAPACITY: usize = 19;

/// Page rows used for temperature, humidity and pressure
pub const MEASUREMENT_ROWS: [u8; 3] = [0, 2, 4];

pub const REFRESH_INTERVAL_MS: u32 = 1_000;

pub const SPLASH_TEXT: &str = "Initializing...";
pub const SPLASH_HOLD_MS: u32 = 1_000;

/// BME280 address, selected by the SDO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensorAddress {
    /// 0x76 (SDO to GND)
    #[default]
    Primary,
    /// 0x77 (SDO to VCC)
    Secondary,
}

impl SensorAddress {
    pub const fn value(self) -> u8 {
        match self {
            SensorAddress::Primary => 0x76,
            SensorAddress::Secondary => 0x77,
        }
    }
}

pub const SENSOR_ADDRESS: SensorAddress = SensorAddress::Primary;

/// Settings consumed by the loop driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Sleep after each cycle
    pub interval_ms: u32,
    /// Rows for temperature, humidity and pressure, in that order
    pub rows: [u8; 3],
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            interval_ms: REFRESH_INTERVAL_MS,
            rows: MEASUREMENT_ROWS,
        }
    }
}
