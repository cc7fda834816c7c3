use crate::audio::segment::AudioSegment;

/// Per-request synthesis options. Unset fields fall back to the pipeline
/// configuration defaults.
#[derive(Debug, Clone, Default)]
pub struct SynthesisParams {
    /// Language hint, e.g. "en". Carried through to the engine verbatim.
    pub language: Option<String>,
    /// Voice selector understood by the engine.
    pub voice: Option<String>,
}

/// Result of synthesizing one chunk of text.
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    pub segment: AudioSegment,
    /// Identifier of the engine that actually produced the audio.
    pub engine_id: String,
}

/// External synthesis collaborator: turns one bounded chunk of text into
/// one PCM segment.
///
/// Implementations are constructed explicitly by the host and handed to
/// the orchestrator; there is no implicit shared instance. A call may
/// block for an unbounded, caller-uncontrolled time and may hold
/// exclusive resources, which is why the orchestrator never overlaps two
/// calls within one job. The returned segment's format is validated only
/// at concatenation time.
pub trait Synthesizer {
    fn synthesize(&self, text: &str, params: &SynthesisParams) -> anyhow::Result<SynthesisOutput>;
}
