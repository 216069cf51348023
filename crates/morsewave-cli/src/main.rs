//! Morsewave CLI - Command-line interface for Morse audio rendering
//!
//! This binary renders text to Morse-code WAV files and inspects the
//! encoding and timing a rendering would use.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use morsewave_cli::commands;

/// Morsewave - Text to Morse-code audio renderer
#[derive(Parser)]
#[command(name = "morsewave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text to a Morse-code WAV file
    Render(commands::render::RenderArgs),

    /// Print the dot/dash encoding of text
    Encode(commands::encode::EncodeArgs),

    /// Print the element duration table for a keying speed
    Timing(commands::timing::TimingArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Encode(args) => commands::encode::run(args),
        Commands::Timing(args) => commands::timing::run(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "morsewave",
            "render",
            "SOS",
            "--wpm",
            "20",
            "--out-dir",
            "/tmp/morse",
        ])
        .unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.text.as_deref(), Some("SOS"));
                assert_eq!(args.wpm, Some(20));
                assert!(!args.stdout);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_render_stdout() {
        let cli =
            Cli::try_parse_from(["morsewave", "render", "--request", "req.json", "--stdout"])
                .unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert!(args.text.is_none());
                assert!(args.request.is_some());
                assert!(args.stdout);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_encode_and_timing() {
        let cli = Cli::try_parse_from(["morsewave", "encode", "CQ DX", "--json"]).unwrap();
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.text, "CQ DX");
                assert!(args.json);
            }
            _ => panic!("expected encode command"),
        }

        let cli = Cli::try_parse_from(["morsewave", "timing"]).unwrap();
        match cli.command {
            Commands::Timing(args) => assert_eq!(args.wpm, 18),
            _ => panic!("expected timing command"),
        }
    }
}
