use std::path::PathBuf;

use thiserror::Error;

use crate::audio::segment::AudioFormat;

/// Terminal failures of the long-form pipeline.
///
/// A job either fully succeeds or fails with exactly one of these; no
/// partial audio is ever returned. An all-empty concatenation set is a
/// success path (zero-frame fallback segment), not a variant here.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Text is empty")]
    EmptyInput,

    #[error("No chunks to synthesize")]
    NoChunksProduced,

    #[error("Synthesis failed for chunk {index}")]
    ChunkSynthesisFailed {
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error(
        "Audio format mismatch at segment {segment_index}: expected {expected}, got {actual}"
    )]
    FormatMismatch {
        segment_index: usize,
        expected: AudioFormat,
        actual: AudioFormat,
    },

    #[error("Missing or unreadable segment: {path}")]
    MissingOrUnreadableSegment {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid audio segment: {0}")]
    InvalidSegment(String),

    #[error("WAV I/O failed")]
    Wav(#[from] hound::Error),

    #[error("Scratch area I/O failed")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
