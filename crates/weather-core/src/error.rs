use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the weather summary crates.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The delimited input could not be tokenised.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A data row had too few fields or a non-integer temperature.
    #[error("Malformed row on line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// A date string did not match any accepted ISO-8601 shape.
    #[error("Invalid date format: {0}")]
    DateParse(String),

    /// A value could not be coerced to a floating-point number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// An aggregate was requested over an empty sequence.
    #[error("Cannot compute {0} of an empty dataset")]
    EmptyInput(&'static str),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the weather crates.
pub type Result<T> = std::result::Result<T, WeatherError>;
