//! Sample peak and mean-power (RMS) level measurement in dBFS

use crate::SILENCE_FLOOR_DB;

/// Convert a linear amplitude to dBFS, clamped to the silence floor
pub(crate) fn linear_to_dbfs(linear: f64) -> f64 {
    if linear > 0.0 {
        (20.0 * linear.log10()).max(SILENCE_FLOOR_DB)
    } else {
        SILENCE_FLOOR_DB
    }
}

/// Maximum absolute sample value in dBFS
///
/// Returns [`SILENCE_FLOOR_DB`] for an empty or all-zero buffer.
pub fn sample_peak_dbfs(samples: &[f32]) -> f64 {
    let peak = samples
        .iter()
        .fold(0.0_f64, |acc, &s| acc.max(f64::from(s).abs()));
    linear_to_dbfs(peak)
}

/// Mean-power (RMS) level in dBFS
///
/// This is the plain full-scale mean-power figure, not LUFS: no frequency
/// weighting, no gating. Returns [`SILENCE_FLOOR_DB`] for an empty or
/// all-zero buffer.
pub fn rms_dbfs(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return SILENCE_FLOOR_DB;
    }
    let sum_squares: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    linear_to_dbfs((sum_squares / samples.len() as f64).sqrt())
}
