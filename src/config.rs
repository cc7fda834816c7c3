use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Chunk size bounds enforced by the packer.
pub const MIN_CHUNK_CHARS: usize = 200;
pub const MAX_CHUNK_CHARS: usize = 2000;
pub const DEFAULT_CHUNK_CHARS: usize = 500;

/// Pipeline configuration, collected once at startup and passed into the
/// orchestrator by value. Nothing in the pipeline reads the environment
/// after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Language used when neither the request nor the caller supplies one.
    pub default_language: String,
    /// Reference voice for engines that support cloning.
    pub reference_voice: Option<PathBuf>,
    /// Parent directory for per-job scratch areas.
    pub scratch_root: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            reference_voice: None,
            scratch_root: std::env::temp_dir(),
        }
    }
}

impl PipelineConfig {
    /// Build a configuration from the process environment.
    ///
    /// `TTS_LANGUAGE`, `TTS_REFERENCE_VOICE` and `TTS_SCRATCH_DIR` are read
    /// here and nowhere else; unset or blank values fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(lang) = non_blank_env("TTS_LANGUAGE") {
            config.default_language = lang;
        }
        if let Some(voice) = non_blank_env("TTS_REFERENCE_VOICE") {
            config.reference_voice = Some(PathBuf::from(voice));
        }
        if let Some(dir) = non_blank_env("TTS_SCRATCH_DIR") {
            config.scratch_root = PathBuf::from(dir);
        }
        config
    }
}

fn non_blank_env(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        _ => None,
    }
}

/// Clamp a requested chunk size into the supported range.
pub fn clamp_max_chars(requested: usize) -> usize {
    let requested = if requested == 0 {
        DEFAULT_CHUNK_CHARS
    } else {
        requested
    };
    requested.clamp(MIN_CHUNK_CHARS, MAX_CHUNK_CHARS)
}
