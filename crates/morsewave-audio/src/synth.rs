//! Tone and silence synthesis at the engine rate.

use std::f64::consts::TAU;

use crate::buffer::{AudioBuffer, ENGINE_SAMPLE_RATE};

/// Tone parameters: pitch and volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Tone frequency in Hz.
    pub frequency_hz: u32,
    /// Volume where `1.0` is unit gain.
    pub volume: f64,
}

impl Tone {
    /// Creates tone parameters.
    pub fn new(frequency_hz: u32, volume: f64) -> Self {
        Self {
            frequency_hz,
            volume,
        }
    }

    /// Linear gain factor for the volume.
    ///
    /// The volume maps to decibels as `20 * (volume - 1)`, so the factor is
    /// `10^(volume - 1)`: unit gain at 1.0, +20 dB at 2.0, -20 dB at 0.0.
    pub fn gain(self) -> f64 {
        10f64.powf(self.volume - 1.0)
    }

    /// True when the volume keys silence instead of a tone.
    pub fn is_silent(self) -> bool {
        self.volume <= 0.0
    }
}

/// Frames covering `duration_ms` at the engine rate, rounded to nearest.
pub(crate) fn frames_for_ms(duration_ms: u32) -> usize {
    ((u64::from(duration_ms) * u64::from(ENGINE_SAMPLE_RATE) + 500) / 1000) as usize
}

/// Synthesizes a sine tone of the given duration.
///
/// The tone starts at phase zero. A volume at or below zero produces
/// silence of the exact same length; a zero duration produces an empty
/// buffer.
pub fn tone(duration_ms: u32, frequency_hz: u32, volume: f64) -> AudioBuffer {
    let frames = frames_for_ms(duration_ms);
    if volume <= 0.0 {
        return AudioBuffer::from_samples(vec![0.0; frames], ENGINE_SAMPLE_RATE);
    }

    let gain = Tone::new(frequency_hz, volume).gain();
    let step = TAU * f64::from(frequency_hz) / f64::from(ENGINE_SAMPLE_RATE);
    let samples = (0..frames).map(|i| (step * i as f64).sin() * gain).collect();
    AudioBuffer::from_samples(samples, ENGINE_SAMPLE_RATE)
}

/// Synthesizes silence of the given duration.
pub fn silence(duration_ms: u32) -> AudioBuffer {
    AudioBuffer::from_samples(vec![0.0; frames_for_ms(duration_ms)], ENGINE_SAMPLE_RATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_round_to_nearest() {
        // 60 ms at 44100 Hz is exactly 2646 frames.
        assert_eq!(frames_for_ms(60), 2_646);
        // 67 ms is 2954.7 frames, rounded up.
        assert_eq!(frames_for_ms(67), 2_955);
        assert_eq!(frames_for_ms(0), 0);
        assert_eq!(frames_for_ms(1_000), 44_100);
    }

    #[test]
    fn test_tone_starts_at_phase_zero() {
        let buffer = tone(60, 700, 1.0);
        assert_eq!(buffer.samples[0], 0.0);
        assert!(buffer.samples[1] > 0.0);
    }

    #[test]
    fn test_tone_length_matches_silence() {
        for &ms in &[0, 1, 60, 67, 180, 1_200] {
            assert_eq!(tone(ms, 700, 1.0).len(), silence(ms).len());
        }
    }

    #[test]
    fn test_zero_volume_is_silence() {
        assert_eq!(tone(180, 700, 0.0), silence(180));
        assert_eq!(tone(180, 700, -1.5), silence(180));
    }

    #[test]
    fn test_unit_gain_stays_in_range() {
        let buffer = tone(100, 700, 1.0);
        assert!(buffer.samples.iter().all(|s| s.abs() <= 1.0));
        assert!(buffer.samples.iter().any(|s| s.abs() > 0.9));
    }

    #[test]
    fn test_gain_mapping() {
        assert_eq!(Tone::new(700, 1.0).gain(), 1.0);
        assert_eq!(Tone::new(700, 2.0).gain(), 10.0);
        assert!((Tone::new(700, 0.5).gain() - 10f64.powf(-0.5)).abs() < 1e-12);
        assert!(Tone::new(700, 0.0).is_silent());
        assert!(!Tone::new(700, 0.1).is_silent());
    }

    #[test]
    fn test_boosted_volume_exceeds_unit_range() {
        let buffer = tone(100, 700, 2.0);
        assert!(buffer.samples.iter().any(|s| s.abs() > 1.0));
    }

    #[test]
    fn test_zero_duration_is_empty() {
        assert!(tone(0, 700, 1.0).is_empty());
        assert!(silence(0).is_empty());
    }

    #[test]
    fn test_tone_is_deterministic() {
        assert_eq!(tone(67, 700, 1.0), tone(67, 700, 1.0));
    }
}
