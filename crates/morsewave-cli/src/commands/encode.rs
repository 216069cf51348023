//! Encode command implementation
//!
//! Prints the dot/dash encoding the renderer would key for a message.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use morsewave_spec::{encode, to_morse_string, Token};

/// Arguments for the encode command
#[derive(Args)]
pub struct EncodeArgs {
    /// Message text
    pub text: String,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EncodeOutput {
    text: String,
    morse: String,
    num_tokens: usize,
    num_characters: usize,
    num_word_boundaries: usize,
}

/// Run the encode command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: EncodeArgs) -> Result<ExitCode> {
    let tokens = encode(&args.text);
    let morse = to_morse_string(&tokens);

    if args.json {
        let num_characters = tokens
            .iter()
            .filter(|t| matches!(t, Token::Character(_)))
            .count();
        let output = EncodeOutput {
            text: args.text,
            morse,
            num_tokens: tokens.len(),
            num_characters,
            num_word_boundaries: tokens.len() - num_characters,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if morse.is_empty() {
        println!("{}", "(nothing encodable)".dimmed());
    } else {
        println!("{morse}");
    }

    Ok(ExitCode::SUCCESS)
}
