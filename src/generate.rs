//! Run driver.
//!
//! Generates `count` publications into an existing output root, one at a
//! time:
//!
//! ```text
//! for id in 1..=count:
//!     metadata  = build_publication(id)
//!     full text = build_fulltext()
//!     write_entry(root, metadata, full text)
//! ```
//!
//! The identifier counter lives here and nowhere else. A publication that
//! fails to write is logged and skipped, and the run moves on to the next
//! identifier. Its partial output stays on disk.
//!
//! Progress is reported through a caller-supplied callback so the CLI can
//! print as it goes while tests simply collect events.

use crate::config::GeneratorConfig;
use crate::fulltext::build_fulltext;
use crate::layout::{self, LayoutError};
use crate::metadata::build_publication;
use crate::types::{ArchiveEntry, IdentifierCounter, PublicationId};
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("output root {} is not an existing directory", .0.display())]
    OutputRoot(PathBuf),
}

/// Progress event for one publication.
#[derive(Debug)]
pub enum GenerateEvent<'a> {
    Written {
        entry: &'a ArchiveEntry,
        authors: usize,
        subjects: usize,
        pages: usize,
        words: usize,
    },
    Failed {
        id: PublicationId,
        error: &'a LayoutError,
    },
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub requested: u32,
    pub written: Vec<PublicationId>,
    /// Identifier and error message of each abandoned publication.
    pub failed: Vec<(PublicationId, String)>,
}

impl RunSummary {
    fn new(requested: u32) -> Self {
        Self {
            requested,
            written: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Generate `count` publications under `root`.
///
/// Fails only when `root` is not an existing directory. Per-publication
/// failures end up in [`RunSummary::failed`].
pub fn generate<R: Rng + ?Sized>(
    count: u32,
    root: &Path,
    config: &GeneratorConfig,
    rng: &mut R,
    mut on_event: impl FnMut(GenerateEvent<'_>),
) -> Result<RunSummary, GenerateError> {
    if !root.is_dir() {
        return Err(GenerateError::OutputRoot(root.to_path_buf()));
    }
    info!(count, root = %root.display(), "generating publications");

    let mut summary = RunSummary::new(count);
    for id in IdentifierCounter::new().take(count as usize) {
        let publication = build_publication(id, rng, &config.metadata);
        let fulltext = build_fulltext(rng, &config.fulltext);

        match layout::write_entry(root, &publication, &fulltext) {
            Ok(entry) => {
                let words = fulltext.word_count();
                debug!(%id, pages = fulltext.pages.len(), words, "publication written");
                on_event(GenerateEvent::Written {
                    entry: &entry,
                    authors: publication.authors.len(),
                    subjects: publication.subjects.len(),
                    pages: fulltext.pages.len(),
                    words,
                });
                summary.written.push(id);
            }
            Err(e) => {
                error!(%id, error = %e, "publication abandoned");
                on_event(GenerateEvent::Failed { id, error: &e });
                summary.failed.push((id, e.to_string()));
            }
        }
    }

    info!(
        written = summary.written.len(),
        failed = summary.failed.len(),
        "run complete"
    );
    Ok(summary)
}
