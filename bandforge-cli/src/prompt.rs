//! Line-oriented input helpers for the interactive menu.
//!
//! Every read funnels through [`read_line`] so end-of-input is handled the
//! same way everywhere: it surfaces as `Ok(None)`, letting the menu say
//! goodbye instead of erroring out on a closed stdin.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

/// Read one line, trimmed of surrounding whitespace. `Ok(None)` means end
/// of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).context("failed to read input")?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print `label` on its own line, then read the answer.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    writeln!(out, "{label}")?;
    read_line(input)
}

/// Outcome of asking for a 0-based position.
#[derive(Debug, PartialEq, Eq)]
pub enum IndexAnswer {
    /// A parsed position. Whether it is in range is the registry's call.
    At(usize),
    /// Blank answer — the user backed out of the operation.
    Cancelled,
    /// Input ended mid-question.
    Eof,
}

/// Ask for a position until the answer parses, is blank, or input ends.
pub fn ask_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<IndexAnswer> {
    loop {
        let Some(answer) = ask(input, out, label)? else {
            return Ok(IndexAnswer::Eof);
        };
        if answer.is_empty() {
            return Ok(IndexAnswer::Cancelled);
        }
        match answer.parse::<usize>() {
            Ok(index) => return Ok(IndexAnswer::At(index)),
            Err(_) => writeln!(out, "{}", "Please enter a number.".red())?,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
