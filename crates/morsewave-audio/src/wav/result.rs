//! WAV encoding result type.

use super::format::WavFormat;
use super::writer::{duplicate_to_pcm16, samples_to_pcm16, write_wav_to_vec};

/// A fully encoded WAV file plus the metadata callers report on.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload, hex encoded.
    pub pcm_hash: String,
    /// Container sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Frames per channel.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        Self::encode(
            samples_to_pcm16(samples),
            WavFormat::mono(sample_rate),
            samples.len(),
        )
    }

    /// Encodes mono samples duplicated onto two channels.
    pub fn from_duplicated_mono(samples: &[f64], sample_rate: u32) -> Self {
        Self::encode(
            duplicate_to_pcm16(samples),
            WavFormat::stereo(sample_rate),
            samples.len(),
        )
    }

    fn encode(pcm: Vec<u8>, format: WavFormat, num_frames: usize) -> Self {
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(format, &pcm);
        Self {
            wav_data,
            pcm_hash,
            sample_rate: format.sample_rate,
            channels: format.channels,
            num_frames,
        }
    }

    /// Duration of the audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / f64::from(self.sample_rate)
    }

    /// Duration of the audio in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_seconds() * 1000.0
    }
}
