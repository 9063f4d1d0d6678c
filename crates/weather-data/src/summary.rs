//! Human-readable reports built from a loaded dataset.

use weather_core::calculations::calculate_mean;
use weather_core::error::{Result, WeatherError};
use weather_core::formatting::{convert_f_to_c, format_temperature, DEGREE_SYMBOL};
use weather_core::models::WeatherRecord;
use weather_core::time_utils::convert_date;

// ── Overview ──────────────────────────────────────────────────────────────────

/// Render the multi-day overview: extremes with their dates and the average
/// low/high, all in Celsius.
///
/// Returns [`WeatherError::EmptyInput`] when `dataset` is empty.
pub fn generate_summary(dataset: &[WeatherRecord]) -> Result<String> {
    let min_temps: Vec<i32> = dataset.iter().map(|day| day.min_temp_f).collect();
    let max_temps: Vec<i32> = dataset.iter().map(|day| day.max_temp_f).collect();

    // Extremes here resolve ties to the FIRST day, whereas
    // calculations::find_min/find_max resolve to the last. Both behaviours
    // are relied upon, so they are kept separate.
    let (low, low_index) = first_min(&min_temps).ok_or(WeatherError::EmptyInput("summary"))?;
    let (high, high_index) = first_max(&max_temps).ok_or(WeatherError::EmptyInput("summary"))?;

    let low_day = convert_date(&dataset[low_index].date)?;
    let high_day = convert_date(&dataset[high_index].date)?;

    let avg_low = convert_f_to_c(calculate_mean(&min_temps)?);
    let avg_high = convert_f_to_c(calculate_mean(&max_temps)?);

    Ok(format!(
        "{days} Day Overview\n\
         \x20 The lowest temperature will be {low}, and will occur on {low_day}.\n\
         \x20 The highest temperature will be {high}, and will occur on {high_day}.\n\
         \x20 The average low this week is {avg_low:.1}{deg}.\n\
         \x20 The average high this week is {avg_high:.1}{deg}.\n",
        days = dataset.len(),
        low = format_temperature(convert_f_to_c(low)),
        high = format_temperature(convert_f_to_c(high)),
        deg = DEGREE_SYMBOL,
    ))
}

// ── Daily breakdown ───────────────────────────────────────────────────────────

/// Render one block per day, in dataset order, each followed by a blank line.
///
/// An empty dataset yields `"\n\n"`. Fails only when a date cannot be parsed.
pub fn generate_daily_summary(dataset: &[WeatherRecord]) -> Result<String> {
    let mut lines: Vec<String> = Vec::with_capacity(dataset.len() * 3);

    for day in dataset {
        lines.push(format!("---- {} ----", convert_date(&day.date)?));
        lines.push(format!(
            "  Minimum Temperature: {}",
            format_temperature(convert_f_to_c(day.min_temp_f))
        ));
        lines.push(format!(
            "  Maximum Temperature: {}\n",
            format_temperature(convert_f_to_c(day.max_temp_f))
        ));
    }

    let joined = lines.join("\n");
    Ok(format!("{}\n\n", joined.trim()))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Smallest value and the index of its first occurrence.
fn first_min(values: &[i32]) -> Option<(i32, usize)> {
    let min = *values.iter().min()?;
    values.iter().position(|&v| v == min).map(|i| (min, i))
}

/// Largest value and the index of its first occurrence.
fn first_max(values: &[i32]) -> Option<(i32, usize)> {
    let max = *values.iter().max()?;
    values.iter().position(|&v| v == max).map(|i| (max, i))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
