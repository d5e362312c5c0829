//! WAV encoder for the upload endpoint
//!
//! The backend stores the upload as a `.wav` file before transcription, so
//! the payload is plain PCM WAV:
//! - 16kHz sample rate (speech-optimized)
//! - Mono channel
//! - 16-bit samples

use std::io::Cursor;

/// Target sample rate for speech-optimized encoding
pub const TARGET_SAMPLE_RATE: u32 = 16000;

/// Bits per sample (16-bit audio)
const BITS_PER_SAMPLE: u16 = 16;

/// Number of channels (mono)
const CHANNELS: u16 = 1;

/// Encode PCM samples to WAV format
///
/// Input: mono i16 samples at 16kHz
/// Output: WAV bytes
pub fn encode_to_wav(pcm_samples: &[i16]) -> Result<Vec<u8>, EncodingError> {
    let spec = hound::WavSpec {
        channels: CHANNELS,
        sample_rate: TARGET_SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());

    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| EncodingError::Write(e.to_string()))?;

        for &sample in pcm_samples {
            writer
                .write_sample(sample)
                .map_err(|e| EncodingError::Encode(e.to_string()))?;
        }

        writer
            .finalize()
            .map_err(|e| EncodingError::Write(e.to_string()))?;
    }

    Ok(cursor.into_inner())
}

/// WAV encoding errors
#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("WAV encoding failed: {0}")]
    Encode(String),

    #[error("WAV write failed: {0}")]
    Write(String),
}
