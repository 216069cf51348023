//! Morsewave Canonical Model Library
//!
//! This crate provides the request types, text encoding, and element timing
//! that define what a Morse rendering means, independent of any audio
//! backend. The audio pipeline consumes these types to produce waveforms.
//!
//! # Overview
//!
//! A rendering starts from a [`MorseRequest`] (text plus keying speed, tone
//! frequency, and volume). The text is encoded into a sequence of [`Token`]s
//! where each token is either a character (a run of dots and dashes) or a
//! word boundary. Element durations are derived from the keying speed via
//! [`Timing`] using the PARIS convention: one unit is `1200 / wpm`
//! milliseconds and every other duration is a fixed multiple of it.
//!
//! # Example
//!
//! ```
//! use morsewave_spec::{encode, MorseRequest, Token};
//!
//! let request = MorseRequest::new("SOS");
//! request.validate().unwrap();
//!
//! let tokens = encode(&request.text);
//! assert_eq!(tokens.len(), 3);
//! assert!(matches!(tokens[0], Token::Character(_)));
//!
//! // 18 WPM keys a 67 ms unit.
//! assert_eq!(request.timing().unit_ms(), 67);
//! ```
//!
//! # Modules
//!
//! - [`encode`](mod@encode): text to Morse token encoding
//! - [`error`]: request validation errors
//! - [`request`]: render request parameters and defaults
//! - [`symbol`]: the character to dot/dash pattern table
//! - [`timing`]: element durations derived from words per minute

pub mod encode;
pub mod error;
pub mod request;
pub mod symbol;
pub mod timing;

// Re-export commonly used types at the crate root
pub use encode::{encode, to_morse_string, Symbol, Token};
pub use error::RequestError;
pub use request::{MorseRequest, DEFAULT_FREQUENCY_HZ, DEFAULT_VOLUME, DEFAULT_WPM};
pub use timing::Timing;
