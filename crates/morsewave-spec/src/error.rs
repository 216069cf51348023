//! Request validation errors.

use thiserror::Error;

/// A request parameter the renderer rejects outright.
///
/// Most parameters are forgiving (speed clamps, volume maps to silence at
/// or below zero, unsupported characters are dropped), so this covers only
/// the values that have no usable interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The tone frequency is zero, which cannot key a tone.
    #[error("invalid tone frequency: {frequency_hz} Hz")]
    InvalidFrequency {
        /// The rejected frequency.
        frequency_hz: u32,
    },
}
