use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// ── View ───────────────────────────────────────────────────────────────────────

/// Which reports to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Only the multi-day overview
    Overview,
    /// Only the per-day breakdown
    Daily,
    /// Overview followed by the per-day breakdown
    Full,
}

impl View {
    pub fn includes_overview(self) -> bool {
        matches!(self, View::Overview | View::Full)
    }

    pub fn includes_daily(self) -> bool {
        matches!(self, View::Daily | View::Full)
    }
}

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Summarise daily minimum/maximum temperatures from a CSV file
#[derive(Parser, Debug, Clone)]
#[command(
    name = "weather-summary",
    about = "Summarise daily minimum/maximum temperatures from a CSV file",
    version
)]
pub struct Settings {
    /// CSV file with a header row and `date,min,max` rows (Fahrenheit)
    #[arg(env = "WEATHER_DATA_FILE")]
    pub data_file: PathBuf,

    /// Reports to print
    #[arg(long, value_enum, default_value_t = View::Full, env = "WEATHER_VIEW")]
    pub view: View,

    /// Logging level
    #[arg(
        long,
        default_value = "INFO",
        env = "WEATHER_LOG_LEVEL",
        value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
    )]
    pub log_level: String,

    /// Also append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply overrides.
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    /// Same as [`load`](Self::load) but with an explicit argument list, so
    /// tests can drive it without spawning a process.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::apply_overrides(Settings::parse_from(args))
    }

    /// `--debug` wins over whatever `--log-level` says.
    fn apply_overrides(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
