use std::path::Path;

use crate::audio::segment::{AudioFormat, AudioSegment};
use crate::error::{PipelineError, Result};

/// Concatenate ordered segments into one segment.
///
/// The canonical format is fixed by the first segment with any frames;
/// every later non-empty segment must match it exactly or the whole job
/// fails with [`PipelineError::FormatMismatch`] naming the offending
/// position. Zero-frame segments are skipped silently anywhere in the
/// list. If nothing carries frames at all, the result is a zero-frame
/// segment in [`AudioFormat::FALLBACK`], a success rather than an error.
pub fn concatenate(segments: &[AudioSegment]) -> Result<AudioSegment> {
    let mut canonical: Option<AudioFormat> = None;
    let mut payload: Vec<u8> = Vec::new();

    for (segment_index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        match canonical {
            None => canonical = Some(segment.format()),
            Some(expected) => {
                let actual = segment.format();
                if actual != expected {
                    return Err(PipelineError::FormatMismatch {
                        segment_index,
                        expected,
                        actual,
                    });
                }
            }
        }
        payload.extend_from_slice(segment.payload());
    }

    let format = canonical.unwrap_or(AudioFormat::FALLBACK);
    AudioSegment::new(format, payload)
}

/// Concatenate WAV files on disk into one output WAV.
///
/// Every input is read up front; a missing or unreadable file fails the
/// job with its path before any output is written. Skipping and format
/// rules are those of [`concatenate`].
pub fn concatenate_wav_files(
    input_paths: &[impl AsRef<Path>],
    output_path: impl AsRef<Path>,
) -> Result<AudioSegment> {
    let mut segments = Vec::with_capacity(input_paths.len());
    for path in input_paths {
        let path = path.as_ref();
        let segment = AudioSegment::read_wav(path).map_err(|err| {
            PipelineError::MissingOrUnreadableSegment {
                path: path.to_path_buf(),
                source: err.into(),
            }
        })?;
        segments.push(segment);
    }

    let result = concatenate(&segments)?;
    result.write_wav(output_path)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{concatenate, concatenate_wav_files};
    use crate::audio::segment::{AudioFormat, AudioSegment};
    use crate::error::PipelineError;
    use tempfile::tempdir;

    fn mono16(frame_rate: u32, samples: &[i16]) -> AudioSegment {
        AudioSegment::from_samples_i16(1, frame_rate, samples).expect("segment")
    }

    #[test]
    fn payloads_stream_in_input_order() {
        let result = concatenate(&[
            mono16(22050, &[1, 2]),
            mono16(22050, &[3]),
            mono16(22050, &[4, 5, 6]),
        ])
        .expect("concatenate");
        assert_eq!(result.frame_count(), 6);
        assert_eq!(
            result.payload(),
            mono16(22050, &[1, 2, 3, 4, 5, 6]).payload()
        );
    }

    #[test]
    fn empty_segments_are_skipped_anywhere() {
        let empty = AudioSegment::empty(AudioFormat {
            channels: 2,
            sample_width_bytes: 2,
            frame_rate: 48000,
        });
        // The leading empty segment has a different format, but carries no
        // format authority.
        let result = concatenate(&[
            empty.clone(),
            mono16(22050, &[7, 8]),
            empty.clone(),
            mono16(22050, &[9]),
            empty,
        ])
        .expect("concatenate");
        assert_eq!(result.format(), mono16(22050, &[]).format());
        assert_eq!(result.frame_count(), 3);
    }

    #[test]
    fn all_empty_inputs_yield_fallback_zero_frame_segment() {
        let result = concatenate(&[
            AudioSegment::empty(AudioFormat::FALLBACK),
            AudioSegment::empty(AudioFormat {
                channels: 2,
                sample_width_bytes: 2,
                frame_rate: 48000,
            }),
        ])
        .expect("concatenate");
        assert!(result.is_empty());
        assert_eq!(result.format(), AudioFormat::FALLBACK);
    }

    #[test]
    fn no_inputs_yield_fallback_zero_frame_segment() {
        let result = concatenate(&[]).expect("concatenate");
        assert!(result.is_empty());
        assert_eq!(result.format(), AudioFormat::FALLBACK);
    }

    #[test]
    fn frame_rate_mismatch_names_offender_and_both_formats() {
        let err = concatenate(&[mono16(22050, &[1]), mono16(24000, &[2])]).unwrap_err();
        match err {
            PipelineError::FormatMismatch {
                segment_index,
                expected,
                actual,
            } => {
                assert_eq!(segment_index, 1);
                assert_eq!(expected.frame_rate, 22050);
                assert_eq!(actual.frame_rate, 24000);
            }
            other => panic!("expected FormatMismatch, got {other:?}"),
        }
    }

    #[test]
    fn channel_count_mismatch_fails() {
        let stereo = AudioSegment::from_samples_i16(2, 22050, &[1, 2, 3, 4]).expect("segment");
        let err = concatenate(&[mono16(22050, &[1]), stereo]).unwrap_err();
        assert!(matches!(err, PipelineError::FormatMismatch { .. }));
    }

    #[test]
    fn file_concatenation_roundtrips() {
        let dir = tempdir().expect("tempdir");
        let a = dir.path().join("a.wav");
        let b = dir.path().join("b.wav");
        let out = dir.path().join("out.wav");
        mono16(22050, &[1, 2, 3]).write_wav(&a).expect("write a");
        mono16(22050, &[4, 5]).write_wav(&b).expect("write b");

        let result = concatenate_wav_files(&[&a, &b], &out).expect("concatenate files");
        assert_eq!(result.frame_count(), 5);

        let reread = AudioSegment::read_wav(&out).expect("read output");
        assert_eq!(reread.payload(), result.payload());
    }

    #[test]
    fn missing_input_file_reports_its_path() {
        let dir = tempdir().expect("tempdir");
        let present = dir.path().join("present.wav");
        let absent = dir.path().join("absent.wav");
        let out = dir.path().join("out.wav");
        mono16(22050, &[1]).write_wav(&present).expect("write wav");

        let err = concatenate_wav_files(&[&present, &absent], &out).unwrap_err();
        match err {
            PipelineError::MissingOrUnreadableSegment { path, .. } => {
                assert_eq!(path, absent);
            }
            other => panic!("expected MissingOrUnreadableSegment, got {other:?}"),
        }
        assert!(!out.exists());
    }
}
