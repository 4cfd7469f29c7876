//! Fixed-width text for the display rows

use core::fmt::{self, Write};

use heapless::String;

use crate::{
    config::LINE_CAPACITY,
    model::{DisplayLine, Measurement},
};

pub type LineText = String<LINE_CAPACITY>;

/// Writes into a bounded string and silently drops whatever does not fit.
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn bounded(args: fmt::Arguments<'_>) -> LineText {
    let mut text = LineText::new();
    let _ = Truncating(&mut text).write_fmt(args);
    text
}

/// `Temp: 22.5 C`
pub fn format_temperature(value: Option<f32>) -> LineText {
    match value {
        Some(t) => bounded(format_args!("Temp: {:.1} C", t)),
        None => bounded(format_args!("Temp: N/A")),
    }
}

/// `Hum: 55.3 %`
pub fn format_humidity(value: Option<f32>) -> LineText {
    match value {
        Some(h) => bounded(format_args!("Hum: {:.1} %", h)),
        None => bounded(format_args!("Hum: N/A")),
    }
}

/// `Pres: 1013 hPa`
pub fn format_pressure(value: Option<f32>) -> LineText {
    match value {
        Some(p) => bounded(format_args!("Pres: {:.0} hPa", p)),
        None => bounded(format_args!("Pres: N/A")),
    }
}

/// Format all three readings, paired with the rows they are drawn on.
pub fn format_measurement(measurement: &Measurement, rows: [u8; 3]) -> [DisplayLine; 3] {
    [
        DisplayLine {
            row: rows[0],
            text: format_temperature(measurement.temperature),
        },
        DisplayLine {
            row: rows[1],
            text: format_humidity(measurement.humidity),
        },
        DisplayLine {
            row: rows[2],
            text: format_pressure(measurement.pressure),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn temperature_one_decimal() {
        assert_eq!(format_temperature(Some(22.5)).as_str(), "Temp: 22.5 C");
        assert_eq!(format_temperature(Some(0.0)).as_str(), "Temp: 0.0 C");
    }

    #[test]
    fn negative_temperature_keeps_sign() {
        assert_eq!(format_temperature(Some(-5.0)).as_str(), "Temp: -5.0 C");
    }

    #[test]
    fn humidity_rounds_to_one_decimal() {
        assert_eq!(format_humidity(Some(45.678)).as_str(), "Hum: 45.7 %");
        assert_eq!(format_humidity(Some(55.30)).as_str(), "Hum: 55.3 %");
    }

    #[test]
    fn pressure_has_no_decimals() {
        assert_eq!(format_pressure(Some(1013.25)).as_str(), "Pres: 1013 hPa");
        assert_eq!(format_pressure(Some(1012.80)).as_str(), "Pres: 1013 hPa");
    }

    #[test]
    fn failed_reads_show_na() {
        assert_eq!(format_temperature(None).as_str(), "Temp: N/A");
        assert_eq!(format_humidity(None).as_str(), "Hum: N/A");
        assert_eq!(format_pressure(None).as_str(), "Pres: N/A");
    }

    #[test]
    fn huge_values_are_truncated() {
        let line = format_pressure(Some(f32::MAX));
        assert_eq!(line.len(), LINE_CAPACITY);
        assert!(line.as_str().starts_with("Pres: 3402823"));

        let line = format_temperature(Some(-1.0e30));
        assert_eq!(line.len(), LINE_CAPACITY);
        assert!(line.as_str().starts_with("Temp: -1000"));
    }

    #[test]
    fn non_finite_values_render() {
        assert_eq!(format_temperature(Some(f32::NAN)).as_str(), "Temp: NaN C");
        assert_eq!(format_pressure(Some(f32::INFINITY)).as_str(), "Pres: inf hPa");
        assert_eq!(format_humidity(Some(f32::NEG_INFINITY)).as_str(), "Hum: -inf %");
    }

    #[test]
    fn measurement_lines_use_given_rows() {
        let m = Measurement {
            temperature: Some(22.5),
            humidity: Some(55.3),
            pressure: Some(1012.8),
        };
        let lines = format_measurement(&m, [0, 2, 4]);

        assert_eq!(lines[0].row, 0);
        assert_eq!(lines[0].text.as_str(), "Temp: 22.5 C");
        assert_eq!(lines[1].row, 2);
        assert_eq!(lines[1].text.as_str(), "Hum: 55.3 %");
        assert_eq!(lines[2].row, 4);
        assert_eq!(lines[2].text.as_str(), "Pres: 1013 hPa");
    }

    proptest! {
        #[test]
        fn temperature_line_fits_for_realistic_range(t in -100.0f32..=100.0) {
            let line = format_temperature(Some(t));
            prop_assert!(line.len() <= LINE_CAPACITY);
            prop_assert!(line.as_str().ends_with(" C"));
        }

        #[test]
        fn humidity_matches_one_decimal_formatting(h in 0.0f32..=100.0) {
            let expected = std::format!("Hum: {:.1} %", h);
            let line = format_humidity(Some(h));
            prop_assert_eq!(line.as_str(), expected.as_str());
        }

        #[test]
        fn pressure_matches_zero_decimal_formatting(p in 300.0f32..=1100.0) {
            let expected = std::format!("Pres: {:.0} hPa", p);
            let line = format_pressure(Some(p));
            prop_assert_eq!(line.as_str(), expected.as_str());
        }

        #[test]
        fn every_line_fits_for_any_bits(bits in any::<u32>()) {
            let value = f32::from_bits(bits);
            prop_assert!(format_temperature(Some(value)).len() <= LINE_CAPACITY);
            prop_assert!(format_humidity(Some(value)).len() <= LINE_CAPACITY);
            prop_assert!(format_pressure(Some(value)).len() <= LINE_CAPACITY);
        }
    }
}
