use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::audio::concat::concatenate;
use crate::audio::segment::AudioSegment;
use crate::config::PipelineConfig;
use crate::engine::{SynthesisParams, Synthesizer};
use crate::error::{PipelineError, Result};
use crate::text::chunk_text;

/// Per-job workspace for intermediate chunk audio.
///
/// The directory name embeds a fresh v4 uuid, so concurrent jobs never
/// touch each other's files. Removed recursively on drop, best effort; a
/// failed removal orphans the directory rather than failing the job.
#[derive(Debug)]
pub struct ScratchArea {
    job_id: String,
    dir: PathBuf,
}

impl ScratchArea {
    pub fn create(root: impl AsRef<Path>) -> Result<Self> {
        let job_id = Uuid::new_v4().simple().to_string();
        let dir = root.as_ref().join(format!("tts_job_{job_id}"));
        std::fs::create_dir_all(&dir)?;
        Ok(Self { job_id, dir })
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path for one chunk's intermediate WAV, 1-based zero-padded so the
    /// files list in chunk order.
    pub fn part_path(&self, chunk_index: usize) -> PathBuf {
        self.dir.join(format!("part_{:04}.wav", chunk_index + 1))
    }
}

impl Drop for ScratchArea {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_dir_all(&self.dir) {
            warn!(job_id = %self.job_id, error = %err, "failed to remove scratch area");
        }
    }
}

/// Drives the full long-form pipeline: split, pack, synthesize each chunk
/// in order, concatenate.
///
/// The component steps are stateless; one `LongFormSynthesizer` can serve
/// concurrent jobs as long as the engine itself allows it. Within a job,
/// chunks are processed strictly sequentially and never retried.
pub struct LongFormSynthesizer<S: Synthesizer> {
    config: PipelineConfig,
    engine: S,
}

impl<S: Synthesizer> LongFormSynthesizer<S> {
    pub fn new(config: PipelineConfig, engine: S) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Synthesize text of unbounded length into one segment.
    ///
    /// Returns the final segment and the engine identifier reported by the
    /// first successful chunk, which the job commits to regardless of what
    /// later chunks report. Any chunk failure aborts the whole job with
    /// the failing chunk's index; no partial audio is returned.
    pub fn synthesize_long(
        &self,
        text: &str,
        max_chars: usize,
        params: &SynthesisParams,
    ) -> Result<(AudioSegment, String)> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        let chunks = chunk_text(text, max_chars);
        if chunks.is_empty() {
            // Unreachable for non-empty input given the hard-slice tier,
            // checked anyway so synthesis never starts on nothing.
            return Err(PipelineError::NoChunksProduced);
        }

        let params = self.effective_params(params);
        let scratch = ScratchArea::create(&self.config.scratch_root)?;
        info!(
            job_id = %scratch.job_id(),
            chunks = chunks.len(),
            text_chars = text.chars().count(),
            language = params.language.as_deref().unwrap_or(""),
            "long-form synthesis start"
        );

        let mut segments: Vec<AudioSegment> = Vec::with_capacity(chunks.len());
        let mut committed_engine: Option<String> = None;
        for chunk in &chunks {
            let output = self
                .engine
                .synthesize(&chunk.text, &params)
                .map_err(|source| PipelineError::ChunkSynthesisFailed {
                    index: chunk.index,
                    source,
                })?;
            output.segment.write_wav(scratch.part_path(chunk.index))?;
            debug!(
                job_id = %scratch.job_id(),
                chunk = chunk.index,
                chars = chunk.char_len,
                frames = output.segment.frame_count(),
                engine = %output.engine_id,
                "chunk synthesized"
            );
            if committed_engine.is_none() {
                committed_engine = Some(output.engine_id);
            }
            segments.push(output.segment);
        }

        let result = concatenate(&segments)?;
        // committed_engine is always set here: chunks is non-empty and
        // every chunk either succeeded or aborted the job above.
        let engine_id = committed_engine.unwrap_or_default();
        info!(
            job_id = %scratch.job_id(),
            engine = %engine_id,
            frames = result.frame_count(),
            "long-form synthesis ok"
        );
        Ok((result, engine_id))
    }

    fn effective_params(&self, params: &SynthesisParams) -> SynthesisParams {
        let mut params = params.clone();
        if params.language.as_deref().map_or(true, str::is_empty) {
            params.language = Some(self.config.default_language.clone());
        }
        if params.voice.is_none() {
            if let Some(voice) = &self.config.reference_voice {
                params.voice = Some(voice.to_string_lossy().into_owned());
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::ScratchArea;
    use tempfile::tempdir;

    #[test]
    fn scratch_area_is_unique_and_removed_on_drop() {
        let root = tempdir().expect("tempdir");
        let first = ScratchArea::create(root.path()).expect("scratch");
        let second = ScratchArea::create(root.path()).expect("scratch");
        assert_ne!(first.dir(), second.dir());
        assert!(first.dir().is_dir());

        let kept = first.dir().to_path_buf();
        drop(first);
        assert!(!kept.exists());
        assert!(second.dir().is_dir());
    }

    #[test]
    fn part_paths_sort_in_chunk_order() {
        let root = tempdir().expect("tempdir");
        let scratch = ScratchArea::create(root.path()).expect("scratch");
        let names: Vec<String> = (0..3)
            .map(|i| {
                scratch
                    .part_path(i)
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, vec!["part_0001.wav", "part_0002.wav", "part_0003.wav"]);
    }
}
