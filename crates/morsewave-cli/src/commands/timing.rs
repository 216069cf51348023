//! Timing command implementation
//!
//! Prints the element duration table derived from a keying speed.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use morsewave_spec::{Timing, DEFAULT_WPM};

/// Arguments for the timing command
#[derive(Args)]
pub struct TimingArgs {
    /// Keying speed in words per minute
    #[arg(long, default_value_t = DEFAULT_WPM)]
    pub wpm: u32,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TimingOutput {
    wpm: u32,
    unit_ms: u32,
    dit_ms: u32,
    dah_ms: u32,
    intra_gap_ms: u32,
    char_gap_ms: u32,
    word_gap_ms: u32,
}

/// Run the timing command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: TimingArgs) -> Result<ExitCode> {
    let timing = Timing::for_wpm(args.wpm);

    if args.json {
        let output = TimingOutput {
            wpm: timing.wpm(),
            unit_ms: timing.unit_ms(),
            dit_ms: timing.dit_ms(),
            dah_ms: timing.dah_ms(),
            intra_gap_ms: timing.intra_gap_ms(),
            char_gap_ms: timing.char_gap_ms(),
            word_gap_ms: timing.word_gap_ms(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {} WPM", "Speed:".cyan().bold(), timing.wpm());
        println!("  unit       {:>5} ms", timing.unit_ms());
        println!("  dit        {:>5} ms", timing.dit_ms());
        println!("  dah        {:>5} ms", timing.dah_ms());
        println!("  intra gap  {:>5} ms", timing.intra_gap_ms());
        println!("  char gap   {:>5} ms", timing.char_gap_ms());
        println!("  word gap   {:>5} ms", timing.word_gap_ms());
    }

    Ok(ExitCode::SUCCESS)
}
