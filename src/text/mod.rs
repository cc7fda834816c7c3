//! Text preparation for chunked synthesis.
//!
//! Splits raw text into sentence-like units and packs them into
//! synthesizer-safe chunks. Both steps are stateless and reusable across
//! concurrent jobs.

pub mod packer;
pub mod splitter;

pub use packer::{chunk_text, pack_chunks, TextChunk};
pub use splitter::split_sentences;
