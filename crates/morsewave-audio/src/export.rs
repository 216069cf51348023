//! WAV byte and file export.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::buffer::{AudioBuffer, ENGINE_SAMPLE_RATE};
use crate::error::{AudioError, AudioResult};
use crate::resample::resample_linear;
use crate::wav::WavResult;

/// Target container parameters for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count: 1 for mono, 2 for duplicated-mono stereo.
    pub channels: u16,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sample_rate: ENGINE_SAMPLE_RATE,
            channels: 1,
        }
    }
}

/// Encodes the buffer as a complete WAV file in memory.
///
/// Resamples when the target rate differs from the buffer's rate and
/// duplicates the mono signal onto both channels for two-channel output.
/// The input buffer is never modified. An empty buffer encodes to a valid
/// 44-byte container with an empty data chunk.
pub fn export(buffer: &AudioBuffer, options: &ExportOptions) -> AudioResult<WavResult> {
    if options.sample_rate == 0 {
        return Err(AudioError::InvalidSampleRate {
            sample_rate: options.sample_rate,
        });
    }

    let resampled;
    let samples: &[f64] = if options.sample_rate == buffer.sample_rate {
        &buffer.samples
    } else {
        resampled = resample_linear(&buffer.samples, buffer.sample_rate, options.sample_rate);
        &resampled
    };

    match options.channels {
        1 => Ok(WavResult::from_mono(samples, options.sample_rate)),
        2 => Ok(WavResult::from_duplicated_mono(samples, options.sample_rate)),
        channels => Err(AudioError::InvalidChannels { channels }),
    }
}

/// Encodes the buffer and writes it to `directory/filename`.
///
/// Creates the directory if it does not exist. I/O failures are fatal and
/// propagate unmodified; there is no retry.
pub fn export_to_file(
    buffer: &AudioBuffer,
    directory: &Path,
    filename: &str,
    options: &ExportOptions,
) -> AudioResult<PathBuf> {
    let wav = export(buffer, options)?;
    fs::create_dir_all(directory)?;
    let path = directory.join(filename);
    fs::write(&path, &wav.wav_data)?;
    Ok(path)
}

/// Encodes the buffer and writes it under `directory` with a generated
/// timestamped name, returning the full path.
pub fn export_to_dir(
    buffer: &AudioBuffer,
    directory: &Path,
    options: &ExportOptions,
) -> AudioResult<PathBuf> {
    export_to_file(buffer, directory, &timestamped_filename(), options)
}

/// File name for a timestamped export: `morse-YYYYmmdd-HHMMSS-ffffff.wav`.
///
/// Microsecond precision keeps rapid consecutive exports apart.
pub fn timestamped_filename() -> String {
    format!("morse-{}.wav", Local::now().format("%Y%m%d-%H%M%S-%6f"))
}
