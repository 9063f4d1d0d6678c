//! Core types and pure transformations for weather summaries.
//!
//! Holds the data model, the error type, Fahrenheit/Celsius conversion,
//! date rendering, the mean/extremum aggregates and the CLI settings.

pub mod calculations;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{Result, WeatherError};
pub use models::{Extremum, WeatherRecord};
