mod bootstrap;

use anyhow::{Context, Result};
use weather_core::models::WeatherRecord;
use weather_core::settings::{Settings, View};
use weather_data::reader::load_data_from_csv;
use weather_data::summary::{generate_daily_summary, generate_summary};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_deref())?;

    tracing::info!("weather-summary v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!("View: {:?}, file: {}", settings.view, settings.data_file.display());

    let records = load_data_from_csv(&settings.data_file)
        .with_context(|| format!("could not load {}", settings.data_file.display()))?;

    tracing::info!("Loaded {} day(s) of readings", records.len());

    let report = render_report(&records, settings.view)?;
    print!("{report}");

    Ok(())
}

/// Build the text printed for `view`. With both reports the overview comes
/// first, separated from the daily blocks by a blank line.
fn render_report(records: &[WeatherRecord], view: View) -> weather_core::Result<String> {
    let mut sections: Vec<String> = Vec::with_capacity(2);

    if view.includes_overview() {
        sections.push(generate_summary(records)?);
    }
    if view.includes_daily() {
        sections.push(generate_daily_summary(records)?);
    }

    Ok(sections.join("\n"))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
