//! Full text synthesis.
//!
//! Builds the content of one `fulltext.xml`: a run of pages, each with a
//! printed page number, a scan sequence number and a block of positioned
//! words.
//!
//! ## Page Numbers vs. Sequence
//!
//! ```text
//! sequence:  1   2   3   4
//! number:   37  38  39  40
//! ```
//!
//! A scan may start mid-document, so the first printed number is drawn from
//! `[1, page count]` and later pages count up by one. The sequence is the
//! page's position in the scan and always starts at 1.

use crate::config::FullTextConfig;
use crate::random::{random_coordinates_in, random_text_in};
use crate::types::{FullText, Page, Word};
use rand::Rng;

pub fn build_fulltext<R: Rng + ?Sized>(rng: &mut R, config: &FullTextConfig) -> FullText {
    let page_count = config.pages.sample(rng);
    // page_count >= 1 under a validated config; max(1) keeps the range valid regardless.
    let first_number = rng.gen_range(1..=page_count.max(1));

    let pages = (0..page_count)
        .map(|i| Page {
            number: first_number + i,
            sequence: i + 1,
            words: build_words(rng, config),
        })
        .collect();

    FullText { pages }
}

fn build_words<R: Rng + ?Sized>(rng: &mut R, config: &FullTextConfig) -> Vec<Word> {
    let word_count = config.words_per_page.sample(rng);
    (0..word_count)
        .map(|_| Word {
            text: random_text_in(rng, config.word_length),
            coordinates: random_coordinates_in(rng, config.coordinate),
        })
        .collect()
}
