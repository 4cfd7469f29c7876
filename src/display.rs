use embedded_graphics::{
    mono_font::{MonoTextStyle, MonoTextStyleBuilder, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use log::{error, info};
use ssd1306::{Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use crate::{Error, traits::DisplaySink};

/// Height of one SSD1306 page in pixels
const PAGE_HEIGHT: i32 = 8;

type Panel<DI> = Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// 128x64 SSD1306 drawn through a frame buffer.
///
/// Rows are display pages, so row `n` starts at y = 8 * n.
pub struct OledSink<DI> {
    display: Panel<DI>,
    style: MonoTextStyle<'static, BinaryColor>,
}

impl<DI> OledSink<DI>
where
    DI: WriteOnlyDataCommand,
{
    /// Initialize the panel and blank it.
    pub fn new(interface: DI) -> Result<Self, Error> {
        info!("[OLED] Initializing SSD1306 128x64");

        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        display.init().map_err(|e| {
            error!("Failed to initialize SSD1306: {:?}", e);
            Error::Display("init failed")
        })?;

        let style = MonoTextStyleBuilder::new()
            .font(&FONT_6X10)
            .text_color(BinaryColor::On)
            .build();

        let mut sink = Self { display, style };
        sink.clear()?;
        sink.update()?;

        info!("[OLED] Display ready");
        Ok(sink)
    }
}

impl<DI> DisplaySink for OledSink<DI>
where
    DI: WriteOnlyDataCommand,
{
    fn clear(&mut self) -> Result<(), Error> {
        self.display.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, row: u8, text: &str) -> Result<(), Error> {
        Text::with_baseline(
            text,
            Point::new(0, i32::from(row) * PAGE_HEIGHT),
            self.style,
            Baseline::Top,
        )
        .draw(&mut self.display)
        .map_err(|_| Error::Display("failed to draw text"))?;
        Ok(())
    }

    fn update(&mut self) -> Result<(), Error> {
        self.display
            .flush()
            .map_err(|_| Error::Display("failed to flush display"))
    }
}
