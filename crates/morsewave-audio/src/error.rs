//! Error types for the audio backend.

use morsewave_spec::RequestError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while rendering or exporting audio.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The render request failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    /// Unsupported export channel count.
    #[error("invalid channel count: {channels} (supported: 1 or 2)")]
    InvalidChannels {
        /// The rejected channel count.
        channels: u16,
    },

    /// Invalid export sample rate.
    #[error("invalid sample rate: {sample_rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        sample_rate: u32,
    },

    /// I/O error during file export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_converts() {
        let err: AudioError = RequestError::InvalidFrequency { frequency_hz: 0 }.into();
        assert!(err.to_string().contains("invalid request"));
        assert!(err.to_string().contains("0 Hz"));
    }

    #[test]
    fn test_channel_error_display() {
        let err = AudioError::InvalidChannels { channels: 6 };
        assert_eq!(err.to_string(), "invalid channel count: 6 (supported: 1 or 2)");
    }
}
