//! Render command implementation
//!
//! Renders text to a Morse-code WAV file, written under a directory with a
//! timestamped name or streamed to stdout.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use morsewave_audio::{
    render_with_options, timestamped_filename, ExportOptions, ENGINE_SAMPLE_RATE,
};
use morsewave_spec::MorseRequest;

/// Arguments for the render command
#[derive(Args)]
pub struct RenderArgs {
    /// Message text (omit when using --request)
    pub text: Option<String>,

    /// Path to a JSON request file; flag values override its fields
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// Keying speed in words per minute
    #[arg(long)]
    pub wpm: Option<u32>,

    /// Tone frequency in Hz
    #[arg(long)]
    pub frequency: Option<u32>,

    /// Output volume (1.0 = unit gain)
    #[arg(long)]
    pub volume: Option<f64>,

    /// Directory for the output file
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Print the output path relative to this directory
    #[arg(long)]
    pub media_root: Option<PathBuf>,

    /// Write WAV bytes to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = ENGINE_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Channel count (1 or 2)
    #[arg(long, default_value_t = 1)]
    pub channels: u16,

    /// Output machine-readable JSON metadata
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RenderOutput {
    path: String,
    unit_ms: u32,
    num_tokens: usize,
    duration_ms: f64,
    sample_rate: u32,
    channels: u16,
    pcm_hash: String,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: RenderArgs) -> Result<ExitCode> {
    if args.stdout && args.json {
        anyhow::bail!("--json cannot be combined with --stdout");
    }

    let request = build_request(&args)?;
    let options = ExportOptions {
        sample_rate: args.sample_rate,
        channels: args.channels,
    };
    let result = render_with_options(&request, &options)?;

    if args.stdout {
        let mut out = std::io::stdout().lock();
        out.write_all(&result.wav.wav_data)?;
        out.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.out_dir.display()
        )
    })?;
    let path = args.out_dir.join(timestamped_filename());
    fs::write(&path, &result.wav.wav_data)
        .with_context(|| format!("Failed to write WAV file: {}", path.display()))?;

    let printed = display_path(&path, args.media_root.as_deref());

    if args.json {
        let output = RenderOutput {
            path: printed,
            unit_ms: result.unit_ms,
            num_tokens: result.num_tokens,
            duration_ms: result.wav.duration_ms(),
            sample_rate: result.wav.sample_rate,
            channels: result.wav.channels,
            pcm_hash: result.wav.pcm_hash.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} {} ({} ms per unit, {} tokens)",
            "Rendered:".cyan().bold(),
            request.text,
            result.unit_ms,
            result.num_tokens
        );
        println!("{} {}", "Wrote:".green().bold(), printed);
    }

    Ok(ExitCode::SUCCESS)
}

/// Builds the request from the text argument or a JSON file, with flag
/// overrides applied on top.
fn build_request(args: &RenderArgs) -> Result<MorseRequest> {
    let mut request = match (&args.text, &args.request) {
        (Some(text), None) => MorseRequest::new(text.clone()),
        (None, Some(path)) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file: {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Invalid request file: {}", path.display()))?
        }
        (Some(_), Some(_)) => anyhow::bail!("pass either TEXT or --request, not both"),
        (None, None) => anyhow::bail!("pass a TEXT argument or --request FILE"),
    };

    if let Some(wpm) = args.wpm {
        request.wpm = wpm;
    }
    if let Some(frequency) = args.frequency {
        request.frequency_hz = frequency;
    }
    if let Some(volume) = args.volume {
        request.volume = volume;
    }

    Ok(request)
}

/// Renders the path relative to the media root when it applies, or as-is
/// otherwise.
fn display_path(path: &Path, media_root: Option<&Path>) -> String {
    match media_root.and_then(|root| path.strip_prefix(root).ok()) {
        Some(relative) => relative.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_text(text: &str) -> RenderArgs {
        RenderArgs {
            text: Some(text.to_string()),
            request: None,
            wpm: None,
            frequency: None,
            volume: None,
            out_dir: PathBuf::from("."),
            media_root: None,
            stdout: false,
            sample_rate: ENGINE_SAMPLE_RATE,
            channels: 1,
            json: false,
        }
    }

    #[test]
    fn test_build_request_from_text() {
        let request = build_request(&args_with_text("SOS")).unwrap();
        assert_eq!(request, MorseRequest::new("SOS"));
    }

    #[test]
    fn test_build_request_applies_overrides() {
        let mut args = args_with_text("SOS");
        args.wpm = Some(25);
        args.frequency = Some(600);
        args.volume = Some(0.5);

        let request = build_request(&args).unwrap();
        assert_eq!(request.wpm, 25);
        assert_eq!(request.frequency_hz, 600);
        assert_eq!(request.volume, 0.5);
    }

    #[test]
    fn test_build_request_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("request.json");
        fs::write(&path, r#"{"text": "CQ", "wpm": 30}"#).unwrap();

        let mut args = args_with_text("ignored");
        args.text = None;
        args.request = Some(path);
        args.frequency = Some(650);

        let request = build_request(&args).unwrap();
        assert_eq!(request.text, "CQ");
        assert_eq!(request.wpm, 30);
        assert_eq!(request.frequency_hz, 650);
    }

    #[test]
    fn test_build_request_needs_one_source() {
        let mut none = args_with_text("x");
        none.text = None;
        assert!(build_request(&none).is_err());

        let mut both = args_with_text("x");
        both.request = Some(PathBuf::from("request.json"));
        assert!(build_request(&both).is_err());
    }

    #[test]
    fn test_display_path_relative_to_media_root() {
        let path = Path::new("/media/morse/morse-1.wav");
        assert_eq!(
            display_path(path, Some(Path::new("/media"))),
            "morse/morse-1.wav"
        );
        // A root that is not a prefix falls back to the full path.
        assert_eq!(
            display_path(path, Some(Path::new("/elsewhere"))),
            "/media/morse/morse-1.wav"
        );
        assert_eq!(display_path(path, None), "/media/morse/morse-1.wav");
    }
}
