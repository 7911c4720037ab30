//! Loudness and format analysis
//!
//! Wraps the ebur128 crate for EBU R128 / ITU-R BS.1770 integrated loudness
//! and adds the plain full-scale measures (mean-power dBFS, sample peak) that
//! hosts display next to it. Available as a streaming analyzer for chunked
//! input or as the one-shot [`analyze`] call over a
//! [`DecodedAudio`] record.

use crate::error::{LoudnessError, Result};
use crate::level::linear_to_dbfs;
use crate::normalize::normalize_samples;
use crate::SILENCE_FLOOR_DB;
use ebur128::{EbuR128, Mode};
use soundcheck_core::{DecodedAudio, SampleWidth};
use std::fmt;
use tracing::debug;

/// Scalar metrics for one analyzed audio buffer
///
/// `loudness_dbfs` and `integrated_lufs` are two independent loudness
/// figures: the first is the ungated, unweighted mean-power level relative
/// to full scale; the second is the gated, K-weighted EBU R128 value.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioMetrics {
    /// Source file name, display-only (empty when analyzing a raw stream)
    pub file_name: String,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of channels
    pub channels: u32,

    /// Duration of the analyzed audio in seconds
    pub duration_seconds: f64,

    /// Mean-power (RMS) loudness in dBFS
    pub loudness_dbfs: f64,

    /// Maximum sample value in dBFS
    pub peak_dbfs: f64,

    /// Integrated loudness in LUFS (EBU R128 gated, K-weighted)
    ///
    /// [`SILENCE_FLOOR_DB`] for silent or empty input.
    pub integrated_lufs: f64,
}

impl fmt::Display for AudioMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} Hz, {} ch, {:.2} s, loudness {:.2} dBFS, peak {:.2} dBFS, integrated {:.2} LUFS",
            self.file_name,
            self.sample_rate,
            self.channels,
            self.duration_seconds,
            self.loudness_dbfs,
            self.peak_dbfs,
            self.integrated_lufs
        )
    }
}

/// Streaming loudness analyzer
///
/// Feed normalized f32 samples in any chunking; chunked and one-shot input
/// produce the same result.
///
/// # Example
///
/// ```ignore
/// use soundcheck_loudness::LoudnessAnalyzer;
///
/// let mut analyzer = LoudnessAnalyzer::new(44100, 2)?;
/// analyzer.add_frames(&samples)?;
/// let metrics = analyzer.finalize()?;
/// println!("Integrated loudness: {:.1} LUFS", metrics.integrated_lufs);
/// ```
pub struct LoudnessAnalyzer {
    /// EBU R128 analyzer instance
    ebur128: EbuR128,
    /// Sample rate
    sample_rate: u32,
    /// Number of channels
    channels: u32,
    /// Total samples processed
    samples_processed: usize,
    /// Running sum of squared samples for the dBFS mean-power figure
    sum_squares: f64,
}

impl LoudnessAnalyzer {
    /// Create a new loudness analyzer
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz (8000-384000)
    /// * `channels` - Number of channels (1-8)
    ///
    /// # Errors
    /// Returns error if sample rate or channel count is invalid
    pub fn new(sample_rate: u32, channels: u32) -> Result<Self> {
        if !(8000..=384000).contains(&sample_rate) {
            return Err(LoudnessError::InvalidSampleRate(sample_rate));
        }
        if !(1..=8).contains(&channels) {
            return Err(LoudnessError::InvalidChannelCount(channels));
        }

        // Mode::I = integrated loudness, Mode::SAMPLE_PEAK = maximum sample value
        let mode = Mode::I | Mode::SAMPLE_PEAK;
        let ebur128 = EbuR128::new(channels, sample_rate, mode)?;

        Ok(Self {
            ebur128,
            sample_rate,
            channels,
            samples_processed: 0,
            sum_squares: 0.0,
        })
    }

    /// Add audio frames for analysis
    ///
    /// # Arguments
    /// * `samples` - Interleaved normalized samples (-1.0 to 1.0),
    ///   L R L R... for stereo
    ///
    /// # Errors
    /// Returns [`LoudnessError::ShapeMismatch`] if the sample count is not
    /// divisible by the channel count.
    pub fn add_frames(&mut self, samples: &[f32]) -> Result<()> {
        if samples.is_empty() {
            return Ok(());
        }

        if samples.len() % self.channels as usize != 0 {
            return Err(LoudnessError::ShapeMismatch {
                samples: samples.len(),
                channels: self.channels,
            });
        }

        self.ebur128.add_frames_f32(samples)?;
        for &s in samples {
            self.sum_squares += f64::from(s) * f64::from(s);
        }
        self.samples_processed += samples.len();

        Ok(())
    }

    /// Number of samples processed so far
    pub fn samples_processed(&self) -> usize {
        self.samples_processed
    }

    /// Finalize analysis and get the metrics
    ///
    /// Silent or empty input is not an error: the loudness figures come back
    /// as [`SILENCE_FLOOR_DB`] and everything else is well-defined.
    pub fn finalize(self) -> Result<AudioMetrics> {
        let frames = self.samples_processed / self.channels as usize;
        let duration_seconds = frames as f64 / f64::from(self.sample_rate);

        // ebur128 reports -inf for silence; clamp to the documented floor
        let global = self.ebur128.loudness_global()?;
        let integrated_lufs = if global.is_finite() {
            global.max(SILENCE_FLOOR_DB)
        } else {
            SILENCE_FLOOR_DB
        };

        // Sample peak is the maximum across all channels
        let mut peak_linear = 0.0_f64;
        for ch in 0..self.channels {
            let peak = self.ebur128.sample_peak(ch).unwrap_or(0.0);
            if peak > peak_linear {
                peak_linear = peak;
            }
        }
        let peak_dbfs = linear_to_dbfs(peak_linear);

        let loudness_dbfs = if self.samples_processed == 0 {
            SILENCE_FLOOR_DB
        } else {
            linear_to_dbfs((self.sum_squares / self.samples_processed as f64).sqrt())
        };

        Ok(AudioMetrics {
            file_name: String::new(),
            sample_rate: self.sample_rate,
            channels: self.channels,
            duration_seconds,
            loudness_dbfs,
            peak_dbfs,
            integrated_lufs,
        })
    }
}

/// Analyze a decoded PCM buffer in one call
///
/// Validates the sample width and buffer shape, normalizes the raw integer
/// samples to float, and computes the full metrics record. This is the whole
/// host-facing contract: one `DecodedAudio` in, one `AudioMetrics` out.
///
/// # Errors
/// * [`LoudnessError::UnsupportedSampleWidth`] for widths other than 2/3/4 bytes
/// * [`LoudnessError::ShapeMismatch`] if the sample count is not divisible by
///   the channel count
/// * [`LoudnessError::InvalidSampleRate`] / [`LoudnessError::InvalidChannelCount`]
///   for out-of-range format fields
pub fn analyze(audio: &DecodedAudio) -> Result<AudioMetrics> {
    let width = SampleWidth::from_bytes(audio.sample_width_bytes)
        .ok_or(LoudnessError::UnsupportedSampleWidth(audio.sample_width_bytes))?;

    let mut analyzer = LoudnessAnalyzer::new(audio.sample_rate, audio.channels)?;

    if audio.samples.len() % audio.channels as usize != 0 {
        return Err(LoudnessError::ShapeMismatch {
            samples: audio.samples.len(),
            channels: audio.channels,
        });
    }

    debug!(
        "Analyzing {:?}: {} Hz, {} ch, {}-bit, {} frames",
        audio.file_name,
        audio.sample_rate,
        audio.channels,
        u16::from(width.bytes()) * 8,
        audio.frames()
    );

    let normalized = normalize_samples(&audio.samples, width);
    analyzer.add_frames(&normalized)?;

    let mut metrics = analyzer.finalize()?;
    metrics.file_name = audio.file_name.clone();
    Ok(metrics)
}
