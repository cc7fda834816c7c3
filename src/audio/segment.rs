use std::fmt;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::{PipelineError, Result};

/// Shape of a PCM segment: channel count, bytes per sample, frame rate.
///
/// Two formats are compatible only when all three fields match exactly.
/// The pipeline never resamples or remixes to paper over a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioFormat {
    pub channels: u16,
    pub sample_width_bytes: u16,
    pub frame_rate: u32,
}

impl AudioFormat {
    /// Format used for a zero-frame result when no input segment carries
    /// any frames: mono 16-bit at 22050 Hz, a safe default for TTS output.
    pub const FALLBACK: AudioFormat = AudioFormat {
        channels: 1,
        sample_width_bytes: 2,
        frame_rate: 22050,
    };

    /// Bytes per frame across all channels.
    pub fn frame_size_bytes(&self) -> usize {
        self.channels as usize * self.sample_width_bytes as usize
    }

    fn to_spec(self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.frame_rate,
            bits_per_sample: self.sample_width_bytes * 8,
            sample_format: SampleFormat::Int,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}ch {}-bit {}Hz",
            self.channels,
            self.sample_width_bytes * 8,
            self.frame_rate
        )
    }
}

/// One PCM segment: a format header plus raw little-endian frame bytes.
///
/// A segment with zero frames is "empty"; it is valid but carries no
/// format authority during concatenation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSegment {
    format: AudioFormat,
    payload: Vec<u8>,
}

impl AudioSegment {
    /// Wrap raw frame bytes in a format header. The payload length must be
    /// a whole number of frames.
    pub fn new(format: AudioFormat, payload: Vec<u8>) -> Result<Self> {
        let frame_size = format.frame_size_bytes();
        if frame_size == 0 {
            return Err(PipelineError::InvalidSegment(format!(
                "degenerate format {format}"
            )));
        }
        if payload.len() % frame_size != 0 {
            return Err(PipelineError::InvalidSegment(format!(
                "payload of {} bytes is not a whole number of {frame_size}-byte frames",
                payload.len()
            )));
        }
        Ok(Self { format, payload })
    }

    /// A valid zero-frame segment in the given format.
    pub fn empty(format: AudioFormat) -> Self {
        Self {
            format,
            payload: Vec::new(),
        }
    }

    /// Build a 16-bit segment from interleaved samples.
    pub fn from_samples_i16(channels: u16, frame_rate: u32, samples: &[i16]) -> Result<Self> {
        let format = AudioFormat {
            channels,
            sample_width_bytes: 2,
            frame_rate,
        };
        let mut payload = Vec::with_capacity(samples.len() * 2);
        for sample in samples {
            payload.extend_from_slice(&sample.to_le_bytes());
        }
        Self::new(format, payload)
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn frame_count(&self) -> usize {
        self.payload.len() / self.format.frame_size_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Read an integer PCM WAV file into a segment.
    ///
    /// 16-bit payloads round-trip bit-exactly; other integer widths go
    /// through sign extension. Float WAVs are rejected: the pipeline is
    /// integer-PCM only and never transcodes.
    pub fn read_wav(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = WavReader::open(path)?;
        let spec = reader.spec();
        if spec.sample_format != SampleFormat::Int {
            return Err(PipelineError::InvalidSegment(
                "only integer PCM WAV is supported".to_string(),
            ));
        }
        let format = AudioFormat {
            channels: spec.channels,
            sample_width_bytes: spec.bits_per_sample / 8,
            frame_rate: spec.sample_rate,
        };
        let width = format.sample_width_bytes as usize;
        let mut payload = Vec::with_capacity(reader.len() as usize * width);
        for sample in reader.samples::<i32>() {
            let value = sample?;
            payload.extend_from_slice(&value.to_le_bytes()[..width]);
        }
        Self::new(format, payload)
    }

    /// Write the segment as a single WAV file: one header, then the
    /// payload in frame order.
    pub fn write_wav(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = WavWriter::create(path, self.format.to_spec())?;
        let width = self.format.sample_width_bytes as usize;
        for raw in self.payload.chunks_exact(width) {
            writer.write_sample(sign_extend_le(raw))?;
        }
        writer.finalize()?;
        Ok(())
    }
}

/// Decode a little-endian sample of 1..=4 bytes into an i32.
fn sign_extend_le(raw: &[u8]) -> i32 {
    let mut bytes = [0u8; 4];
    bytes[..raw.len()].copy_from_slice(raw);
    let shift = 32 - raw.len() * 8;
    (i32::from_le_bytes(bytes) << shift) >> shift
}
