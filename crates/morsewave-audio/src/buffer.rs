//! The mono engine buffer shared by every synthesis stage.

/// Fixed engine sample rate in Hz.
///
/// All synthesis happens at this rate; the exporter resamples when the
/// caller asks for a different container rate.
pub const ENGINE_SAMPLE_RATE: u32 = 44_100;

/// A mono buffer of f64 samples at a known sample rate.
///
/// Samples are nominally in [-1, 1]. Volumes above unit gain can push
/// values outside that range; the PCM stage clips them on export.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// One sample per frame.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Creates an empty buffer at the given rate.
    pub fn empty(sample_rate: u32) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
        }
    }

    /// Wraps existing samples.
    pub fn from_samples(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.samples.len() as f64 * 1000.0 / f64::from(self.sample_rate)
    }

    /// Appends another buffer's samples. Both sides must share a rate.
    pub fn append(&mut self, other: &AudioBuffer) {
        debug_assert_eq!(self.sample_rate, other.sample_rate);
        self.samples.extend_from_slice(&other.samples);
    }
}
