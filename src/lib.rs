//! # Archive Fixtures
//!
//! Generates randomized digitized-publication archives for testing archive
//! processing software (indexers, OCR pipelines, viewers) without real
//! scanned content.
//!
//! For every publication the run writes a metadata document, a paginated
//! full text with word coordinates, and an empty placeholder image:
//!
//! ```text
//! out/
//! ├── publication-1/
//! │   ├── publication.xml    # identifier, authors, title, subjects
//! │   ├── fulltext.xml       # pages → words with bounding boxes
//! │   └── images/
//! │       └── 1.tif          # empty placeholder
//! └── publication-2/
//!     └── ...
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`random`] | Bounded integer, text, date and coordinate generators; the [`random::Bounds`] range type |
//! | [`types`] | Publication entities, identifiers and the on-disk entry paths |
//! | [`metadata`] | Builds a [`types::Publication`]: authors, long/short title, subjects |
//! | [`fulltext`] | Builds a [`types::FullText`]: page numbering, sequences, words |
//! | [`render`] | Pure XML rendering of both documents with Maud |
//! | [`layout`] | Writes one publication's directory, documents and placeholder |
//! | [`generate`] | Run driver: identifier counter, per-publication error isolation |
//! | [`config`] | Optional TOML file overriding the synthesis ranges |
//! | [`prompt`] | Reprompting console input for count and output directory |
//! | [`output`] | CLI progress and summary formatting |
//!
//! # Design Decisions
//!
//! ## Injected Randomness
//!
//! Every generator takes `&mut impl Rng`. The CLI seeds from OS entropy, or
//! from `--seed` for a reproducible run; tests always seed. The same seed and
//! config produce byte-identical documents.
//!
//! ## Render, Don't Build Trees
//!
//! The documents are rendered directly from the entities with Maud instead of
//! being assembled as a mutable DOM and serialized. Rendering is a pure
//! function from entity to string, so it is tested without touching disk.
//!
//! ## Keep Going on Failure
//!
//! A publication that cannot be written (a file squatting on its directory
//! name, a full disk) is logged and skipped; the rest of the run proceeds.
//! There is no rollback: partial output from a failed publication stays.
//!
//! ## Deliberate Noise
//!
//! Dates of birth draw day and month independently, so `31-02-1700` happens.
//! Text is random printable ASCII, markup characters included. Both are kept
//! on purpose: the fixtures exist to exercise tolerant consumers.

pub mod config;
pub mod fulltext;
pub mod generate;
pub mod layout;
pub mod metadata;
pub mod output;
pub mod prompt;
pub mod random;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
