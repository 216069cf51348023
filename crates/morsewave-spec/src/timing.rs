//! Element durations derived from words per minute.

/// Millisecond durations for every Morse element at a given keying speed.
///
/// Durations follow the PARIS convention: one unit is `1200 / wpm`
/// milliseconds, a dah is three units, the gap between symbols inside a
/// character is one unit, the gap after a character is three units, and
/// the gap at a word boundary is seven units. All elements scale together
/// because they are derived from the single rounded unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    wpm: u32,
    unit_ms: u32,
}

impl Timing {
    /// Derives element timing for a keying speed in words per minute.
    ///
    /// Speeds below 1 WPM clamp to 1. The unit length is rounded to the
    /// nearest millisecond, halves away from zero.
    pub fn for_wpm(wpm: u32) -> Self {
        let wpm = wpm.max(1);
        let unit_ms = (1200.0 / f64::from(wpm)).round() as u32;
        Self { wpm, unit_ms }
    }

    /// The keying speed after clamping, in words per minute.
    pub fn wpm(self) -> u32 {
        self.wpm
    }

    /// One unit in milliseconds.
    pub fn unit_ms(self) -> u32 {
        self.unit_ms
    }

    /// Dit duration, one unit.
    pub fn dit_ms(self) -> u32 {
        self.unit_ms
    }

    /// Dah duration, three units.
    pub fn dah_ms(self) -> u32 {
        3 * self.unit_ms
    }

    /// Gap between symbols within a character, one unit.
    pub fn intra_gap_ms(self) -> u32 {
        self.unit_ms
    }

    /// Gap appended after every character, three units.
    pub fn char_gap_ms(self) -> u32 {
        3 * self.unit_ms
    }

    /// Gap inserted at a word boundary, seven units.
    pub fn word_gap_ms(self) -> u32 {
        7 * self.unit_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_length_at_default_speed() {
        // 1200 / 18 = 66.67 rounds up.
        assert_eq!(Timing::for_wpm(18).unit_ms(), 67);
    }

    #[test]
    fn test_unit_length_reference_speeds() {
        assert_eq!(Timing::for_wpm(20).unit_ms(), 60);
        assert_eq!(Timing::for_wpm(13).unit_ms(), 92);
        assert_eq!(Timing::for_wpm(25).unit_ms(), 48);
        assert_eq!(Timing::for_wpm(1).unit_ms(), 1200);
    }

    #[test]
    fn test_zero_wpm_clamps_to_one() {
        let timing = Timing::for_wpm(0);
        assert_eq!(timing.wpm(), 1);
        assert_eq!(timing.unit_ms(), 1200);
    }

    #[test]
    fn test_element_ratios() {
        let timing = Timing::for_wpm(20);
        assert_eq!(timing.dit_ms(), 60);
        assert_eq!(timing.dah_ms(), 180);
        assert_eq!(timing.intra_gap_ms(), 60);
        assert_eq!(timing.char_gap_ms(), 180);
        assert_eq!(timing.word_gap_ms(), 420);
    }

    #[test]
    fn test_faster_speed_shortens_unit() {
        assert!(Timing::for_wpm(40).unit_ms() < Timing::for_wpm(5).unit_ms());
    }
}
