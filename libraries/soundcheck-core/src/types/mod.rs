//! Shared type definitions

mod audio;

pub use audio::{DecodedAudio, SampleWidth};
