//! Morsewave CLI library.
//!
//! This crate provides the command implementations for the `morsewave`
//! binary: rendering text to WAV files and inspecting the encoding and
//! timing a rendering would use.

pub mod commands;
