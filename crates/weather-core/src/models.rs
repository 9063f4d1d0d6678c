use serde::Deserialize;

/// One day of readings as loaded from the input file.
///
/// Fields are decoded positionally, so the header names of the source file
/// do not matter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherRecord {
    /// ISO-8601 date or date-time string, kept as text until formatted.
    pub date: String,
    /// Daily minimum in degrees Fahrenheit.
    pub min_temp_f: i32,
    /// Daily maximum in degrees Fahrenheit.
    pub max_temp_f: i32,
}

impl WeatherRecord {
    pub fn new(date: impl Into<String>, min_temp_f: i32, max_temp_f: i32) -> Self {
        Self {
            date: date.into(),
            min_temp_f,
            max_temp_f,
        }
    }
}

/// An extreme value together with the position it was found at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub value: f64,
    pub index: usize,
}
