//! WAV container format parameters.

/// Bits per sample. The writer only emits 16-bit PCM.
pub(crate) const BITS_PER_SAMPLE: u16 = 16;

/// Container-level format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Channel count (1 = mono, 2 = duplicated-mono stereo).
    pub channels: u16,
    /// Container sample rate in Hz.
    pub sample_rate: u32,
}

impl WavFormat {
    /// Mono format at the given rate.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
        }
    }

    /// Two-channel format at the given rate.
    pub fn stereo(sample_rate: u32) -> Self {
        Self {
            channels: 2,
            sample_rate,
        }
    }

    /// Bytes per sample frame across all channels.
    pub(crate) fn block_align(self) -> u16 {
        self.channels * (BITS_PER_SAMPLE / 8)
    }

    /// Bytes per second of audio.
    pub(crate) fn byte_rate(self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }
}
