//! Soundcheck Core
//!
//! Platform-agnostic shared types for Soundcheck.
//!
//! The host application (GUI, CLI, server) decodes an audio file with
//! whatever decoder it prefers and hands the result to the analyzer as a
//! [`DecodedAudio`] record. This crate deliberately knows nothing about
//! codecs, file formats, or how the decode happened.
//!
//! # Example
//!
//! ```rust
//! use soundcheck_core::{DecodedAudio, SampleWidth};
//!
//! let audio = DecodedAudio::new("tone.wav", 48_000, 1, 2, vec![0, 16384, -16384]);
//!
//! assert_eq!(audio.frames(), 3);
//! assert_eq!(SampleWidth::from_bytes(2), Some(SampleWidth::S16));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

pub use types::{DecodedAudio, SampleWidth};
