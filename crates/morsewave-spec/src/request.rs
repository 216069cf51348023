//! Render request parameters.

use serde::{Deserialize, Serialize};

use crate::error::RequestError;
use crate::timing::Timing;

/// Default keying speed in words per minute.
pub const DEFAULT_WPM: u32 = 18;

/// Default tone frequency in hertz.
pub const DEFAULT_FREQUENCY_HZ: u32 = 700;

/// Default volume, where `1.0` is unit gain.
pub const DEFAULT_VOLUME: f64 = 1.0;

/// A request to render text as Morse audio.
///
/// Every field other than the text is optional in the serialized form and
/// falls back to the crate defaults, so `{"text": "SOS"}` is a complete
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorseRequest {
    /// Message text. Unsupported characters are dropped during encoding.
    pub text: String,

    /// Keying speed in words per minute. Values below 1 clamp to 1.
    #[serde(default = "default_wpm")]
    pub wpm: u32,

    /// Tone frequency in hertz. Must be non-zero.
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: u32,

    /// Output volume. `1.0` keys the tone at unit gain, values above 1.0
    /// boost it, and values at or below zero render silence of the same
    /// length.
    #[serde(default = "default_volume")]
    pub volume: f64,
}

fn default_wpm() -> u32 {
    DEFAULT_WPM
}

fn default_frequency_hz() -> u32 {
    DEFAULT_FREQUENCY_HZ
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

impl MorseRequest {
    /// Creates a request with the default speed, frequency, and volume.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wpm: DEFAULT_WPM,
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            volume: DEFAULT_VOLUME,
        }
    }

    /// Checks the request for parameter values the renderer rejects.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.frequency_hz == 0 {
            return Err(RequestError::InvalidFrequency {
                frequency_hz: self.frequency_hz,
            });
        }
        Ok(())
    }

    /// Element timing for this request's keying speed.
    pub fn timing(&self) -> Timing {
        Timing::for_wpm(self.wpm)
    }
}
