//! CLI output formatting.
//!
//! Each written publication gets a header line (positional index, directory
//! name and output path) followed by an indented summary of what it
//! contains. Failures get a single line with the reason. The run ends with a
//! one-line tally.
//!
//! ```text
//! 001 publication-1 → out/publication-1
//!     3 authors, 4 subjects, 412 pages, 61834 words
//! 002 publication-2 failed: out/publication-2 exists and is not a directory
//! 003 publication-3 → out/publication-3
//!     1 author, 1 subject, 9 pages, 1370 words
//!
//! Done: generated 2 of 3 publications in out (1 failed)
//! ```
//!
//! Format functions are pure and return `Vec<String>`. The `print_*`
//! wrappers write them to stdout. Diagnostics go through `tracing` on
//! stderr instead, so stdout stays a clean inventory.

use crate::generate::{GenerateEvent, RunSummary};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: u32) -> String {
    format!("{:0>3}", pos)
}

/// `1 author`, `2 authors`.
fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

pub fn format_event(event: &GenerateEvent<'_>) -> Vec<String> {
    match event {
        GenerateEvent::Written {
            entry,
            authors,
            subjects,
            pages,
            words,
        } => vec![
            format!(
                "{} publication-{} \u{2192} {}",
                format_index(entry.id.get()),
                entry.id,
                entry.dir.display()
            ),
            format!(
                "    {}, {}, {}, {}",
                plural(*authors, "author"),
                plural(*subjects, "subject"),
                plural(*pages, "page"),
                plural(*words, "word"),
            ),
        ],
        GenerateEvent::Failed { id, error } => vec![format!(
            "{} publication-{} failed: {}",
            format_index(id.get()),
            id,
            error
        )],
    }
}

pub fn print_event(event: &GenerateEvent<'_>) {
    for line in format_event(event) {
        println!("{}", line);
    }
}

pub fn format_summary(summary: &RunSummary, root: &Path) -> Vec<String> {
    let mut line = format!(
        "Done: generated {} of {} publications in {}",
        summary.written.len(),
        summary.requested,
        root.display()
    );
    if !summary.failed.is_empty() {
        line.push_str(&format!(" ({} failed)", summary.failed.len()));
    }
    if summary.requested == 0 {
        vec![line]
    } else {
        vec![String::new(), line]
    }
}

pub fn print_summary(summary: &RunSummary, root: &Path) {
    for line in format_summary(summary, root) {
        println!("{}", line);
    }
}
