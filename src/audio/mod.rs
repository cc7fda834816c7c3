//! PCM segment handling for the chunked synthesis pipeline.
//!
//! Keeps audio concerns separate from text chunking and orchestration:
//! the segment container (with WAV I/O) and lossless concatenation of
//! ordered segment lists.

pub mod concat;
pub mod segment;

pub use concat::{concatenate, concatenate_wav_files};
pub use segment::{AudioFormat, AudioSegment};
