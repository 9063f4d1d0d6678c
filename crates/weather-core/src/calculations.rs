use crate::error::{Result, WeatherError};
use crate::models::Extremum;

/// Arithmetic mean of `values`, each widened to `f64`.
///
/// Returns [`WeatherError::EmptyInput`] for an empty slice.
pub fn calculate_mean<T: Copy + Into<f64>>(values: &[T]) -> Result<f64> {
    if values.is_empty() {
        return Err(WeatherError::EmptyInput("mean"));
    }
    let total: f64 = values.iter().map(|&v| v.into()).sum();
    Ok(total / values.len() as f64)
}

/// Smallest value and the highest index holding it.
///
/// Returns `None` only for an empty slice; zeros are ordinary values.
pub fn find_min<T: Copy + Into<f64>>(values: &[T]) -> Option<Extremum> {
    find_last_extremum(values, |candidate, best| candidate < best)
}

/// Largest value and the highest index holding it.
///
/// Returns `None` only for an empty slice; zeros are ordinary values.
pub fn find_max<T: Copy + Into<f64>>(values: &[T]) -> Option<Extremum> {
    find_last_extremum(values, |candidate, best| candidate > best)
}

/// Scan from the end so the first hit is the last occurrence, and only move
/// to an earlier index on a strictly better value.
fn find_last_extremum<T, F>(values: &[T], better: F) -> Option<Extremum>
where
    T: Copy + Into<f64>,
    F: Fn(f64, f64) -> bool,
{
    let mut iter = values.iter().enumerate().rev();
    let (last_index, &last) = iter.next()?;
    let mut best = Extremum {
        value: last.into(),
        index: last_index,
    };

    for (index, &v) in iter {
        let value: f64 = v.into();
        // NaN never compares better; a leading NaN is replaced by any number.
        if better(value, best.value) || (best.value.is_nan() && !value.is_nan()) {
            best = Extremum { value, index };
        }
    }

    Some(best)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
