//! Top-level text to WAV rendering.

use morsewave_spec::{encode, MorseRequest};

use crate::assemble::assemble;
use crate::buffer::AudioBuffer;
use crate::error::AudioResult;
use crate::export::{export, ExportOptions};
use crate::synth::Tone;
use crate::wav::WavResult;

/// Result of rendering a request to WAV bytes.
#[derive(Debug)]
pub struct RenderResult {
    /// The encoded WAV file and its metadata.
    pub wav: WavResult,
    /// The unit length used for element timing, in milliseconds.
    pub unit_ms: u32,
    /// Number of encoded tokens (characters plus word boundaries).
    pub num_tokens: usize,
}

/// Renders a request to a mono WAV file at the engine rate.
pub fn render(request: &MorseRequest) -> AudioResult<RenderResult> {
    render_with_options(request, &ExportOptions::default())
}

/// Renders a request to a WAV file with explicit container options.
///
/// Validates the request, encodes the text, assembles the waveform at the
/// engine rate, and exports it. Text with nothing encodable still yields a
/// valid, empty container.
pub fn render_with_options(
    request: &MorseRequest,
    options: &ExportOptions,
) -> AudioResult<RenderResult> {
    request.validate()?;

    let tokens = encode(&request.text);
    let timing = request.timing();
    let buffer = assemble(&tokens, timing, Tone::new(request.frequency_hz, request.volume));
    let wav = export(&buffer, options)?;

    Ok(RenderResult {
        wav,
        unit_ms: timing.unit_ms(),
        num_tokens: tokens.len(),
    })
}

/// Renders just the assembled engine-rate buffer, for callers that export
/// or post-process separately.
pub fn render_buffer(request: &MorseRequest) -> AudioResult<AudioBuffer> {
    request.validate()?;
    let tokens = encode(&request.text);
    Ok(assemble(
        &tokens,
        request.timing(),
        Tone::new(request.frequency_hz, request.volume),
    ))
}
