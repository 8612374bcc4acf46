//! Entities of a generated publication.
//!
//! Everything here is built fresh for one publication, rendered, written and
//! dropped. The only value that outlives an iteration is the
//! [`IdentifierCounter`], owned by the driver in [`generate`](crate::generate).

use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension of the placeholder image file.
pub const IMAGE_EXTENSION: &str = "tif";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("publication identifier must be positive, got {0}")]
pub struct InvalidIdentifier(pub u32);

/// Positive publication identifier. Also names the publication's directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicationId(NonZeroU32);

impl PublicationId {
    pub fn new(value: u32) -> Result<Self, InvalidIdentifier> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(InvalidIdentifier(value))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-run identifier sequence: 1, 2, 3, …
///
/// Stops (returns `None`) instead of wrapping around at `u32::MAX`.
#[derive(Debug, Default)]
pub struct IdentifierCounter {
    last: u32,
}

impl IdentifierCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently issued identifier, if any.
    pub fn current(&self) -> Option<PublicationId> {
        PublicationId::new(self.last).ok()
    }
}

impl Iterator for IdentifierCounter {
    type Item = PublicationId;

    fn next(&mut self) -> Option<PublicationId> {
        self.last = self.last.checked_add(1)?;
        self.current()
    }
}

/// Calendar-ish date, rendered `DD-MM-YYYY`.
///
/// Day and month are independent; impossible dates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day, self.month, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub date_of_birth: BirthDate,
}

/// Long title plus a short title cut from its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    long: String,
    short: String,
}

impl Title {
    /// Build a title whose short form is the first `short_len` characters of
    /// `long`. A `short_len` past the end takes the whole long title.
    pub fn with_prefix(long: String, short_len: usize) -> Self {
        let short = long.chars().take(short_len).collect();
        Self { long, short }
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    pub fn short(&self) -> &str {
        &self.short
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject(pub String);

/// Metadata document content for one publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    pub id: PublicationId,
    pub authors: Vec<Author>,
    pub title: Title,
    pub subjects: Vec<Subject>,
}

/// Word bounding box, rendered `a,b,c,d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates(pub [u32; 4]);

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a},{b},{c},{d}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Printed page number. The first page need not be 1.
    pub number: u32,
    /// 1-based scan position.
    pub sequence: u32,
    pub words: Vec<Word>,
}

/// Paginated full text of one publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullText {
    pub pages: Vec<Page>,
}

impl FullText {
    pub fn word_count(&self) -> usize {
        self.pages.iter().map(|p| p.words.len()).sum()
    }
}

/// Paths making up one publication's footprint under the output root.
///
/// ```text
/// {root}/publication-{id}/publication.xml
/// {root}/publication-{id}/fulltext.xml
/// {root}/publication-{id}/images/{id}.tif
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub id: PublicationId,
    pub dir: PathBuf,
    pub publication_xml: PathBuf,
    pub fulltext_xml: PathBuf,
    pub images_dir: PathBuf,
    pub image: PathBuf,
}

impl ArchiveEntry {
    /// Compute the entry's paths. Touches nothing on disk.
    pub fn locate(root: &Path, id: PublicationId) -> Self {
        let dir = root.join(format!("publication-{id}"));
        let images_dir = dir.join("images");
        Self {
            id,
            publication_xml: dir.join("publication.xml"),
            fulltext_xml: dir.join("fulltext.xml"),
            image: images_dir.join(format!("{id}.{IMAGE_EXTENSION}")),
            images_dir,
            dir,
        }
    }
}
