//! Loudness and format metrics for Soundcheck
//!
//! This crate turns a decoded PCM buffer into a small set of scalar metrics:
//! - Mean-power loudness in dBFS
//! - Sample peak in dBFS
//! - Integrated loudness in LUFS (EBU R128 / ITU-R BS.1770, via the ebur128 crate)
//! - Duration, sample rate, and channel count echoed back for display
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌──────────────┐
//! │ DecodedAudio │ ──► │ Normalizer │ ──► │  Analyzer    │
//! └──────────────┘     └────────────┘     └──────┬───────┘
//!   raw int PCM          f32 [-1, 1]             ▼
//!                                        ┌──────────────┐
//!                                        │ AudioMetrics │
//!                                        └──────────────┘
//! ```
//!
//! The host owns all I/O: it decodes a file however it likes and hands over a
//! [`DecodedAudio`](soundcheck_core::DecodedAudio) record. Analysis is
//! synchronous and stateless across calls.
//!
//! # Example
//!
//! ```ignore
//! use soundcheck_core::DecodedAudio;
//! use soundcheck_loudness::analyze;
//!
//! let audio = DecodedAudio::new("song.wav", 48_000, 2, 2, raw_samples);
//! let metrics = analyze(&audio)?;
//!
//! println!("Loudness: {:.2} dBFS", metrics.loudness_dbfs);
//! println!("Integrated: {:.2} LUFS", metrics.integrated_lufs);
//! ```

#![forbid(unsafe_code)]

mod analyzer;
mod error;
mod level;
mod normalize;

pub use analyzer::{analyze, AudioMetrics, LoudnessAnalyzer};
pub use error::{LoudnessError, Result};
pub use level::{rms_dbfs, sample_peak_dbfs};
pub use normalize::normalize_samples;

/// Floor value reported for silent or empty signals, in dB
///
/// Peak, RMS, and integrated-loudness figures are clamped to this value so a
/// silent buffer yields a well-defined sentinel instead of -inf or NaN.
pub const SILENCE_FLOOR_DB: f64 = -120.0;

/// EBU R128 broadcast reference level (-23 LUFS)
pub const EBU_R128_BROADCAST_LUFS: f64 = -23.0;

/// EBU R128 streaming reference level (-14 LUFS, common for streaming platforms)
pub const EBU_R128_STREAMING_LUFS: f64 = -14.0;
