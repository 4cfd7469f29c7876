//! BME280 weather readout on an SSD1306 OLED.
//!
//! The hardware-independent part (traits, formatter, loop driver, launch)
//! builds on the host and is unit tested there. The esp-hal bus setup only
//! builds with the `firmware` feature.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod format;
pub mod logic;
pub mod model;
pub mod sensor;
pub mod traits;

#[cfg(feature = "firmware")]
pub mod hardware;

pub use error::Error;
