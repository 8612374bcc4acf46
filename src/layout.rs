//! On-disk archive layout.
//!
//! Writes one publication's footprint under the output root:
//!
//! ```text
//! {root}/
//! └── publication-{id}/
//!     ├── publication.xml
//!     ├── fulltext.xml
//!     └── images/
//!         └── {id}.tif          # empty placeholder
//! ```
//!
//! ## Re-running Into the Same Root
//!
//! Directory creation is idempotent: existing directories are reused and
//! nothing next to them is removed. Both XML documents are rewritten. The
//! placeholder image is created only if missing, so an existing file keeps
//! its content.
//!
//! Something other than a directory sitting at `publication-{id}` or
//! `images` is an error ([`LayoutError::NotADirectory`]). It is never
//! deleted.

use crate::render::{render_fulltext, render_publication};
use crate::types::{ArchiveEntry, FullText, Publication};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("{} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create placeholder image {}: {source}", path.display())]
    Placeholder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write the publication's directory, both documents and the placeholder
/// image. Stops at the first failure; files already written stay on disk.
pub fn write_entry(
    root: &Path,
    publication: &Publication,
    fulltext: &FullText,
) -> Result<ArchiveEntry, LayoutError> {
    let entry = ArchiveEntry::locate(root, publication.id);

    ensure_dir(&entry.dir)?;
    write_document(&entry.publication_xml, &render_publication(publication))?;
    write_document(&entry.fulltext_xml, &render_fulltext(fulltext))?;
    ensure_dir(&entry.images_dir)?;
    create_placeholder(&entry.image)?;

    Ok(entry)
}

/// Create `path` as a directory unless it already is one.
///
/// The parent must exist.
pub fn ensure_dir(path: &Path) -> Result<(), LayoutError> {
    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(())
            } else {
                Err(LayoutError::NotADirectory(path.to_path_buf()))
            }
        }
        Err(source) => Err(LayoutError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_document(path: &Path, content: &str) -> Result<(), LayoutError> {
    fs::write(path, content).map_err(|source| LayoutError::WriteDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Create an empty file at `path`. An existing file is left as is.
pub fn create_placeholder(path: &Path) -> Result<(), LayoutError> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_file() => Ok(()),
        Err(source) => Err(LayoutError::Placeholder {
            path: path.to_path_buf(),
            source,
        }),
    }
}
