//! Waveform assembly from encoded tokens.

use morsewave_spec::{Symbol, Timing, Token};

use crate::buffer::{AudioBuffer, ENGINE_SAMPLE_RATE};
use crate::synth::{self, Tone};

/// Assembles an encoded message into one continuous mono buffer.
///
/// Each character renders its symbols as dit/dah tones with a one-unit gap
/// between symbols, then a three-unit gap appended after the character,
/// the final character included. A word boundary renders as a seven-unit
/// gap. An empty token sequence yields an empty buffer.
///
/// Assembly is deterministic: identical inputs produce bit-identical
/// buffers.
pub fn assemble(tokens: &[Token], timing: Timing, tone: Tone) -> AudioBuffer {
    let mut buffer = AudioBuffer::empty(ENGINE_SAMPLE_RATE);
    for token in tokens {
        match token {
            Token::WordBoundary => {
                buffer.append(&synth::silence(timing.word_gap_ms()));
            }
            Token::Character(symbols) => {
                for (i, symbol) in symbols.iter().enumerate() {
                    if i > 0 {
                        buffer.append(&synth::silence(timing.intra_gap_ms()));
                    }
                    let duration_ms = match symbol {
                        Symbol::Dot => timing.dit_ms(),
                        Symbol::Dash => timing.dah_ms(),
                    };
                    buffer.append(&synth::tone(duration_ms, tone.frequency_hz, tone.volume));
                }
                buffer.append(&synth::silence(timing.char_gap_ms()));
            }
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use morsewave_spec::encode;

    const TONE: Tone = Tone {
        frequency_hz: 700,
        volume: 1.0,
    };

    #[test]
    fn test_empty_tokens_yield_empty_buffer() {
        let buffer = assemble(&[], Timing::for_wpm(18), TONE);
        assert!(buffer.is_empty());
        assert_eq!(buffer.sample_rate, ENGINE_SAMPLE_RATE);
    }

    #[test]
    fn test_single_dit_character() {
        // "E" is one dit followed by the character gap: 60 + 180 = 240 ms
        // at 20 WPM.
        let buffer = assemble(&encode("E"), Timing::for_wpm(20), TONE);
        assert_eq!(buffer.len(), 2_646 + 7_938);
        assert_eq!(buffer.duration_ms(), 240.0);
    }

    #[test]
    fn test_sos_duration_closed_form() {
        // At 18 WPM the unit is 67 ms. "SOS" keys 12 one-unit segments
        // (six dits and six intra-symbol gaps) and 6 three-unit segments
        // (three dahs and three character gaps).
        let timing = Timing::for_wpm(18);
        let buffer = assemble(&encode("SOS"), timing, TONE);

        let unit_frames = synth::silence(timing.unit_ms()).len();
        let three_unit_frames = synth::silence(timing.char_gap_ms()).len();
        assert_eq!(buffer.len(), 12 * unit_frames + 6 * three_unit_frames);
    }

    #[test]
    fn test_segment_order_matches_tokens() {
        // "A B" assembles dit, gap, dah, char gap, word gap, dah, gap,
        // dit, gap, dit, gap, dit, char gap. Compare against the same
        // sequence built segment by segment.
        let timing = Timing::for_wpm(20);
        let buffer = assemble(&encode("A B"), timing, TONE);

        let mut expected = AudioBuffer::empty(ENGINE_SAMPLE_RATE);
        // A: dit dah
        expected.append(&synth::tone(timing.dit_ms(), 700, 1.0));
        expected.append(&synth::silence(timing.intra_gap_ms()));
        expected.append(&synth::tone(timing.dah_ms(), 700, 1.0));
        expected.append(&synth::silence(timing.char_gap_ms()));
        // word boundary
        expected.append(&synth::silence(timing.word_gap_ms()));
        // B: dah dit dit dit
        expected.append(&synth::tone(timing.dah_ms(), 700, 1.0));
        for _ in 0..3 {
            expected.append(&synth::silence(timing.intra_gap_ms()));
            expected.append(&synth::tone(timing.dit_ms(), 700, 1.0));
        }
        expected.append(&synth::silence(timing.char_gap_ms()));

        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_trailing_character_keeps_its_gap() {
        // The gap after the final character is part of the contract.
        let timing = Timing::for_wpm(20);
        let buffer = assemble(&encode("E"), timing, TONE);
        let gap_frames = synth::silence(timing.char_gap_ms()).len();
        let tail = &buffer.samples[buffer.len() - gap_frames..];
        assert!(tail.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let timing = Timing::for_wpm(18);
        let tokens = encode("HELLO WORLD");
        let a = assemble(&tokens, timing, TONE);
        let b = assemble(&tokens, timing, TONE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_silent_volume_renders_same_length() {
        let timing = Timing::for_wpm(18);
        let tokens = encode("SOS");
        let audible = assemble(&tokens, timing, Tone::new(700, 1.0));
        let muted = assemble(&tokens, timing, Tone::new(700, 0.0));
        assert_eq!(audible.len(), muted.len());
        assert!(muted.samples.iter().all(|&s| s == 0.0));
    }
}
