//! Error types for loudness analysis

use thiserror::Error;

/// Result type for loudness operations
pub type Result<T> = std::result::Result<T, LoudnessError>;

/// Errors that can occur during loudness analysis
///
/// All variants are detected as precondition checks before any computation
/// starts; a call either fully succeeds with metrics or fails with one of
/// these. Silent or empty input is not an error (see
/// [`SILENCE_FLOOR_DB`](crate::SILENCE_FLOOR_DB)).
#[derive(Error, Debug)]
pub enum LoudnessError {
    /// Sample width outside the supported 16/24/32-bit set
    #[error("Unsupported sample width: {0} bytes (supported: 2, 3, or 4)")]
    UnsupportedSampleWidth(u8),

    /// Sample count not divisible by channel count
    #[error("Sample count {samples} is not divisible by channel count {channels}")]
    ShapeMismatch {
        /// Number of interleaved samples supplied
        samples: usize,
        /// Channel count the buffer was declared with
        channels: u32,
    },

    /// Invalid sample rate
    #[error("Invalid sample rate: {0} Hz (must be between 8000 and 384000)")]
    InvalidSampleRate(u32),

    /// Invalid channel count
    #[error("Invalid channel count: {0} (must be 1-8)")]
    InvalidChannelCount(u32),

    /// EBU R128 analysis error
    #[error("EBU R128 analysis failed: {0}")]
    AnalysisError(String),
}

impl From<ebur128::Error> for LoudnessError {
    fn from(err: ebur128::Error) -> Self {
        Self::AnalysisError(format!("{:?}", err))
    }
}
