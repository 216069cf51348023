//! RIFF/WAVE serialization and PCM conversion.

use std::io::{self, Write};

use super::format::{WavFormat, BITS_PER_SAMPLE};

/// Writes a complete WAV file to a writer.
///
/// Layout is the canonical 44-byte header (RIFF header, 16-byte PCM fmt
/// chunk, data chunk header) followed by the PCM payload. Nothing
/// time-dependent is written, so output is deterministic.
pub fn write_wav<W: Write>(writer: &mut W, format: WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;

    // RIFF header; the size field excludes "RIFF" and itself
    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // format tag 1 = integer PCM
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file into a fresh byte vector.
pub fn write_wav_to_vec(format: WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut bytes, format, pcm_data).expect("writing to Vec should not fail");
    bytes
}

/// Converts f64 samples to little-endian 16-bit PCM.
///
/// Values outside [-1, 1] are clipped.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        pcm.extend_from_slice(&pcm16_value(sample).to_le_bytes());
    }
    pcm
}

/// Converts mono f64 samples to interleaved two-channel 16-bit PCM, with
/// each sample written to both channels of its frame.
pub fn duplicate_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 4);
    for &sample in samples {
        let frame = pcm16_value(sample).to_le_bytes();
        pcm.extend_from_slice(&frame);
        pcm.extend_from_slice(&frame);
    }
    pcm
}

fn pcm16_value(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}
