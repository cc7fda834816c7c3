//! # longform-tts - Chunked Long-Form Text-to-Speech Pipeline
//!
//! Lets any speech-synthesis backend accept text of unbounded length:
//! split it into synthesizer-safe chunks, synthesize each chunk
//! independently, and losslessly reassemble the resulting PCM segments
//! into one continuous waveform.
//!
//! ## Architecture Overview
//!
//! The pipeline is four pieces, composed leaves-first:
//!
//! 1. **Sentence splitting** ([`text::split_sentences`]): heuristic
//!    sentence boundaries plus merging of tiny fragments.
//! 2. **Chunk packing** ([`text::pack_chunks`]): greedy packing into
//!    bounded chunks, with soft splitting at secondary punctuation and
//!    hard slicing as last resorts.
//! 3. **Concatenation** ([`audio::concatenate`]): validates that every
//!    non-empty segment shares one canonical format and streams the
//!    payloads into a single segment.
//! 4. **Orchestration** ([`LongFormSynthesizer`]): drives the above
//!    around an external [`Synthesizer`] collaborator, one chunk at a
//!    time, with a uuid-keyed scratch area per job.
//!
//! ## Quick Start
//!
//! ```no_run
//! use longform_tts::{LongFormSynthesizer, PipelineConfig, SynthesisParams};
//! # use longform_tts::{Synthesizer, SynthesisOutput};
//! # struct MyEngine;
//! # impl Synthesizer for MyEngine {
//! #     fn synthesize(&self, _: &str, _: &SynthesisParams) -> anyhow::Result<SynthesisOutput> {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! let config = PipelineConfig::from_env();
//! let pipeline = LongFormSynthesizer::new(config, MyEngine);
//! let (segment, engine_id) = pipeline
//!     .synthesize_long("A very long text...", 500, &SynthesisParams::default())
//!     .unwrap();
//! println!("{} frames from engine {engine_id}", segment.frame_count());
//! ```
//!
//! Chunking and concatenation are also usable on their own, without any
//! synthesis engine; the CLI exposes both.

pub mod audio;
pub mod config;
pub mod engine;
pub mod error;
pub mod orchestrator;
pub mod text;

// Re-exports forming the public API
pub use audio::concat::{concatenate, concatenate_wav_files};
pub use audio::segment::{AudioFormat, AudioSegment};
pub use config::PipelineConfig;
pub use engine::{SynthesisOutput, SynthesisParams, Synthesizer};
pub use error::{PipelineError, Result};
pub use orchestrator::{LongFormSynthesizer, ScratchArea};
pub use text::{chunk_text, pack_chunks, split_sentences, TextChunk};
