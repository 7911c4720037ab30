//! Decoded PCM audio types
use serde::{Deserialize, Serialize};

/// Width of a single integer PCM sample
///
/// Only signed 16/24/32-bit PCM is supported. Each width maps to a fixed
/// full-scale magnitude (2^15, 2^23, 2^31) used when converting raw samples
/// to float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleWidth {
    /// 16-bit signed PCM (2 bytes per sample)
    S16,
    /// 24-bit signed PCM (3 bytes per sample)
    S24,
    /// 32-bit signed PCM (4 bytes per sample)
    S32,
}

impl SampleWidth {
    /// Map a byte count (as reported by a decoder) to a sample width.
    ///
    /// Returns `None` for anything other than 2, 3, or 4 bytes.
    #[must_use]
    pub fn from_bytes(bytes: u8) -> Option<Self> {
        match bytes {
            2 => Some(Self::S16),
            3 => Some(Self::S24),
            4 => Some(Self::S32),
            _ => None,
        }
    }

    /// Bytes per sample
    pub fn bytes(&self) -> u8 {
        match self {
            Self::S16 => 2,
            Self::S24 => 3,
            Self::S32 => 4,
        }
    }

    /// Full-scale magnitude for this width
    ///
    /// Dividing a raw sample by this value gives symmetric [-1.0, 1.0) range:
    /// - S16: 32768 (2^15)
    /// - S24: 8388608 (2^23)
    /// - S32: 2147483648 (2^31)
    pub fn full_scale(&self) -> f64 {
        match self {
            Self::S16 => 32768.0,
            Self::S24 => 8388608.0,
            Self::S32 => 2147483648.0,
        }
    }
}

/// Decoded PCM audio as handed over by the host's decoder
///
/// Samples are raw signed integers, interleaved by channel
/// ([L, R, L, R, ...] for stereo). 16- and 24-bit values are carried
/// sign-extended in `i32`.
///
/// `sample_width_bytes` is kept as the raw byte count the decoder reported;
/// the analyzer validates it so an unsupported width surfaces as a typed
/// error instead of a silently mis-scaled result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedAudio {
    /// Source file name, display-only
    pub file_name: String,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of channels (1 = mono, 2 = stereo, etc.)
    pub channels: u32,

    /// Bytes per sample as reported by the decoder (2, 3, or 4 supported)
    pub sample_width_bytes: u8,

    /// Raw interleaved integer samples
    pub samples: Vec<i32>,
}

impl DecodedAudio {
    /// Create a new decoded-audio record
    pub fn new(
        file_name: impl Into<String>,
        sample_rate: u32,
        channels: u32,
        sample_width_bytes: u8,
        samples: Vec<i32>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            sample_rate,
            channels,
            sample_width_bytes,
            samples,
        }
    }

    /// Number of frames (one sample per channel)
    ///
    /// Truncates if the sample count is not a multiple of the channel count;
    /// the analyzer rejects that shape before any computation.
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            return 0;
        }
        self.samples.len() / self.channels as usize
    }

    /// Duration in seconds, derived from frame count and sample rate
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / f64::from(self.sample_rate)
    }
}
