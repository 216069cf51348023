//! Morsewave Audio Backend
//!
//! This crate renders encoded Morse messages as audio: tone and silence
//! synthesis, waveform assembly with standards-based element timing, a
//! deterministic WAV writer, and byte or file export.
//!
//! # Overview
//!
//! Rendering runs a fixed pipeline. The request is validated, its text is
//! encoded into tokens by `morsewave-spec`, element durations are derived
//! from the keying speed, and each token becomes a tone or silence segment
//! appended to one continuous mono buffer at the engine rate of 44 100 Hz.
//! The exporter then resamples and fans out channels as asked and
//! serializes 16-bit PCM into a RIFF/WAVE container.
//!
//! # Determinism
//!
//! Synthesis is pure and carries no state between calls, so a given
//! request renders to byte-identical WAV output on every call (on the same
//! platform). The BLAKE3 hash of the PCM payload is carried in the result
//! for content comparison.
//!
//! # Example
//!
//! ```
//! use morsewave_audio::render;
//! use morsewave_spec::MorseRequest;
//!
//! let result = render(&MorseRequest::new("SOS")).unwrap();
//! assert_eq!(&result.wav.wav_data[0..4], b"RIFF");
//! assert_eq!(result.unit_ms, 67);
//! assert_eq!(result.num_tokens, 3);
//! ```
//!
//! # Crate Structure
//!
//! - [`render()`] - Main entry point for text to WAV rendering
//! - [`assemble`] - Token sequence to waveform assembly
//! - [`buffer`] - The mono engine buffer
//! - [`export`](mod@export) - WAV byte and file export
//! - [`resample`] - Linear resampling to non-engine rates
//! - [`synth`] - Tone and silence synthesis
//! - [`wav`] - Deterministic WAV container writer

pub mod assemble;
pub mod buffer;
pub mod error;
pub mod export;
pub mod render;
pub mod resample;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{AudioBuffer, ENGINE_SAMPLE_RATE};
pub use error::{AudioError, AudioResult};
pub use export::{export, export_to_dir, export_to_file, timestamped_filename, ExportOptions};
pub use render::{render, render_buffer, render_with_options, RenderResult};
pub use synth::Tone;
pub use wav::WavResult;
