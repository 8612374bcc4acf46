//! Publication metadata synthesis.
//!
//! Builds the content of one `publication.xml`: the identifier, 1–5 authors
//! with names and dates of birth, a long/short title pair and 1–10 subjects
//! (default ranges, see [`MetadataConfig`]).
//!
//! ## Short Title
//!
//! The short title is a prefix of the long title. Its length is drawn from
//! `short_title_length` *after* capping that range at the long title's
//! length, so a short long title can never yield an out-of-bounds prefix.

use crate::config::MetadataConfig;
use crate::random::{random_date_in, random_text_in};
use crate::types::{Author, Publication, PublicationId, Subject, Title};
use rand::Rng;

/// Build the metadata for publication `id`.
pub fn build_publication<R: Rng + ?Sized>(
    id: PublicationId,
    rng: &mut R,
    config: &MetadataConfig,
) -> Publication {
    let author_count = config.authors.sample(rng);
    let authors = (0..author_count)
        .map(|_| build_author(rng, config))
        .collect();

    let title = build_title(rng, config);

    let subject_count = config.subjects.sample(rng);
    let subjects = (0..subject_count)
        .map(|_| Subject(random_text_in(rng, config.subject_length)))
        .collect();

    Publication {
        id,
        authors,
        title,
        subjects,
    }
}

fn build_author<R: Rng + ?Sized>(rng: &mut R, config: &MetadataConfig) -> Author {
    Author {
        name: random_text_in(rng, config.author_name_length),
        date_of_birth: random_date_in(rng, config.birth_year),
    }
}

fn build_title<R: Rng + ?Sized>(rng: &mut R, config: &MetadataConfig) -> Title {
    let long = random_text_in(rng, config.long_title_length);
    // Random text is ASCII: byte length is character length.
    let long_len = u32::try_from(long.len()).unwrap_or(u32::MAX);
    let short_len = config.short_title_length.capped_at(long_len).sample(rng);
    Title::with_prefix(long, short_len as usize)
}
