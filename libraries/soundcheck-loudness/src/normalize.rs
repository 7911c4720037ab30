//! Integer PCM to float conversion

use soundcheck_core::SampleWidth;

/// Convert raw integer samples to f32 using symmetric full-scale division
///
/// Each sample is divided by the full-scale magnitude for its width
/// (2^15, 2^23, or 2^31), giving a symmetric [-1.0, 1.0) range where the
/// single negative full-scale value maps to exactly -1.0. Length and channel
/// interleaving are preserved.
pub fn normalize_samples(raw: &[i32], width: SampleWidth) -> Vec<f32> {
    let full_scale = width.full_scale();
    raw.iter()
        .map(|&s| (f64::from(s) / full_scale) as f32)
        .collect()
}
