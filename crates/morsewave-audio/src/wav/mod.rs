//! Deterministic WAV container writer.
//!
//! Serializes 16-bit PCM into a RIFF/WAVE container with a fixed 44-byte
//! header and no metadata chunks, so identical PCM yields identical file
//! bytes. The BLAKE3 hash of the PCM payload rides along in [`WavResult`]
//! for content comparison.

mod format;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use result::WavResult;
pub use writer::{duplicate_to_pcm16, samples_to_pcm16, write_wav, write_wav_to_vec};
