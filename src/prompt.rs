//! Interactive console prompts.
//!
//! Used for whatever the command line did not supply. Each prompt loops
//! until it gets acceptable input: malformed answers ([`InputError`]) are
//! reported and the question is asked again. Only a closed or unreadable
//! input stream ([`PromptError`]) ends the loop.
//!
//! The readers take any `BufRead`/`Write` pair so they can be driven from
//! byte buffers in tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

pub const COUNT_QUESTION: &str = "Enter number of publications to generate:";
pub const OUTPUT_DIR_QUESTION: &str = "Enter path to output directory:";

/// Rejected answer. Recovered by asking again.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("{0} is negative, enter zero or a positive number")]
    Negative(i64),
    #[error("{0} is too large")]
    TooLarge(i64),
    #[error("'{}' is not an existing directory", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("cannot read console input: {0}")]
    Io(#[from] io::Error),
    #[error("console input closed before an answer was given")]
    Closed,
}

/// Parse a publication count: a whole number, zero or more.
pub fn parse_count(answer: &str) -> Result<u32, InputError> {
    let answer = answer.trim();
    let n: i64 = answer
        .parse()
        .map_err(|_| InputError::NotANumber(answer.to_string()))?;
    if n < 0 {
        return Err(InputError::Negative(n));
    }
    u32::try_from(n).map_err(|_| InputError::TooLarge(n))
}

/// Parse an output root: must name an existing directory.
///
/// Only the line terminator is stripped. Other whitespace is part of the path.
pub fn parse_output_dir(answer: &str) -> Result<PathBuf, InputError> {
    let path = PathBuf::from(answer.trim_end_matches(['\r', '\n']));
    if path.is_dir() {
        Ok(path)
    } else {
        Err(InputError::NotADirectory(path))
    }
}

pub fn prompt_count(input: &mut impl BufRead, output: &mut impl Write) -> Result<u32, PromptError> {
    ask(input, output, COUNT_QUESTION, parse_count)
}

pub fn prompt_output_dir(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<PathBuf, PromptError> {
    ask(input, output, OUTPUT_DIR_QUESTION, parse_output_dir)
}

fn ask<T>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> Result<T, PromptError> {
    let mut line = String::new();
    loop {
        writeln!(output, "{question}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}
