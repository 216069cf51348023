//! Text to Morse token encoding.

use crate::symbol;

/// A single keyed element of a Morse character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Short element, one unit long.
    Dot,
    /// Long element, three units long.
    Dash,
}

impl Symbol {
    /// The written form of the symbol (`.` or `-`).
    pub fn as_char(self) -> char {
        match self {
            Symbol::Dot => '.',
            Symbol::Dash => '-',
        }
    }
}

/// One renderable unit of an encoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A character, keyed as a sequence of dots and dashes.
    Character(Vec<Symbol>),
    /// The gap between two words.
    WordBoundary,
}

/// Encodes text into a sequence of Morse tokens.
///
/// Characters are looked up case-insensitively in the pattern table. Any
/// run of whitespace becomes a single [`Token::WordBoundary`]; characters
/// without a pattern are dropped. Text with nothing encodable yields an
/// empty sequence.
pub fn encode(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for ch in text.chars() {
        if ch.is_whitespace() {
            if tokens.last() != Some(&Token::WordBoundary) {
                tokens.push(Token::WordBoundary);
            }
        } else if let Some(pattern) = symbol::pattern(ch) {
            tokens.push(Token::Character(pattern.chars().filter_map(symbol_for).collect()));
        }
    }
    tokens
}

/// Renders tokens in the conventional written form, with characters
/// separated by spaces and word boundaries shown as `/`.
///
/// `"SOS TITANIC"` renders as `"... --- ... / - .. - .- -. .. -.-."`.
pub fn to_morse_string(tokens: &[Token]) -> String {
    let parts: Vec<String> = tokens
        .iter()
        .map(|token| match token {
            Token::Character(symbols) => symbols.iter().map(|s| s.as_char()).collect(),
            Token::WordBoundary => "/".to_string(),
        })
        .collect();
    parts.join(" ")
}

fn symbol_for(ch: char) -> Option<Symbol> {
    match ch {
        '.' => Some(Symbol::Dot),
        '-' => Some(Symbol::Dash),
        _ => None,
    }
}
