use crate::error::{Result, WeatherError};

/// Suffix appended to every rendered Celsius value.
pub const DEGREE_SYMBOL: &str = "\u{00B0}C";

/// A numeric value that can be rendered in a temperature string.
///
/// Integers render as plain integers. Floats use their shortest round-trip
/// form but always keep a fractional part, so `10.0` stays `"10.0"`.
pub trait TemperatureValue {
    fn render(&self) -> String;
}

macro_rules! impl_integer_value {
    ($($t:ty),*) => {
        $(impl TemperatureValue for $t {
            fn render(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_integer_value!(i32, i64, u32);

impl TemperatureValue for f64 {
    fn render(&self) -> String {
        if self.is_finite() && self.fract() == 0.0 {
            format!("{:.1}", self)
        } else {
            self.to_string()
        }
    }
}

impl TemperatureValue for f32 {
    fn render(&self) -> String {
        if self.is_finite() && self.fract() == 0.0 {
            format!("{:.1}", self)
        } else {
            self.to_string()
        }
    }
}

/// Render a temperature followed by the degree-Celsius marker.
///
/// No rounding is applied; callers pass values already rounded by
/// [`convert_f_to_c`].
///
/// # Examples
///
/// ```
/// use weather_core::formatting::format_temperature;
///
/// assert_eq!(format_temperature(0), "0°C");
/// assert_eq!(format_temperature(15.6), "15.6°C");
/// assert_eq!(format_temperature(10.0), "10.0°C");
/// assert_eq!(format_temperature(-3.5), "-3.5°C");
/// ```
pub fn format_temperature<T: TemperatureValue>(value: T) -> String {
    format!("{}{}", value.render(), DEGREE_SYMBOL)
}

/// Convert Fahrenheit to Celsius, rounded to one decimal place.
///
/// Rounding is half away from zero (`f64::round` on the value scaled by ten).
/// Because the scaled value is a binary float, inputs landing exactly on a
/// `.x5` boundary may round either way.
///
/// # Examples
///
/// ```
/// use weather_core::formatting::convert_f_to_c;
///
/// assert_eq!(convert_f_to_c(32), 0.0);
/// assert_eq!(convert_f_to_c(212), 100.0);
/// assert_eq!(convert_f_to_c(98.6), 37.0);
/// assert_eq!(convert_f_to_c(60), 15.6);
/// ```
pub fn convert_f_to_c(temp_f: impl Into<f64>) -> f64 {
    let celsius = (temp_f.into() - 32.0) * 5.0 / 9.0;
    round_to(celsius, 1)
}

/// Coerce a textual Fahrenheit reading to `f64`.
///
/// Surrounding whitespace is ignored. Anything that is not a finite number
/// yields [`WeatherError::InvalidNumber`].
pub fn parse_fahrenheit(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(WeatherError::InvalidNumber(raw.to_string())),
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Round `value` to `decimals` places, half away from zero.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// ── Tests ──────────────────────────────────────────────────────────────────────
