//! Character to dot/dash pattern table.
//!
//! Patterns follow ITU-R M.1677-1 plus the common extensions for
//! punctuation. Keys are uppercase; lookups fold case first.

use phf::phf_map;

static MORSE_TABLE: phf::Map<char, &'static str> = phf_map! {
    'A' => ".-",
    'B' => "-...",
    'C' => "-.-.",
    'D' => "-..",
    'E' => ".",
    'F' => "..-.",
    'G' => "--.",
    'H' => "....",
    'I' => "..",
    'J' => ".---",
    'K' => "-.-",
    'L' => ".-..",
    'M' => "--",
    'N' => "-.",
    'O' => "---",
    'P' => ".--.",
    'Q' => "--.-",
    'R' => ".-.",
    'S' => "...",
    'T' => "-",
    'U' => "..-",
    'V' => "...-",
    'W' => ".--",
    'X' => "-..-",
    'Y' => "-.--",
    'Z' => "--..",
    '0' => "-----",
    '1' => ".----",
    '2' => "..---",
    '3' => "...--",
    '4' => "....-",
    '5' => ".....",
    '6' => "-....",
    '7' => "--...",
    '8' => "---..",
    '9' => "----.",
    '.' => ".-.-.-",
    ',' => "--..--",
    '?' => "..--..",
    '\'' => ".----.",
    '!' => "-.-.--",
    '/' => "-..-.",
    '(' => "-.--.",
    ')' => "-.--.-",
    '&' => ".-...",
    ':' => "---...",
    ';' => "-.-.-.",
    '=' => "-...-",
    '+' => ".-.-.",
    '-' => "-....-",
    '_' => "..--.-",
    '"' => ".-..-.",
    '$' => "...-..-",
    '@' => ".--.-.",
};

/// Looks up the dot/dash pattern for a character.
///
/// Lookup is case-insensitive. Returns `None` for characters without a
/// Morse pattern.
pub fn pattern(ch: char) -> Option<&'static str> {
    MORSE_TABLE.get(&ch.to_ascii_uppercase()).copied()
}

/// Returns true when the character has a Morse pattern.
pub fn is_supported(ch: char) -> bool {
    pattern(ch).is_some()
}
