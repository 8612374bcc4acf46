//! XML rendering for `publication.xml` and `fulltext.xml`.
//!
//! Both documents are built with [maud](https://maud.lambda.xyz/) straight
//! from the entities in [`types`](crate::types): no intermediate document
//! tree. Maud takes arbitrary element names, emits a closing tag for every
//! braced element and escapes `&`, `<`, `>` and `"` in all interpolated
//! values. Random fixture text is full of those characters, so the escaping
//! is what keeps the output well-formed.
//!
//! ## publication.xml
//!
//! ```text
//! <publication>
//!   <identifier>7</identifier>
//!   <authors>
//!     <author><authorname>..</authorname><dob>03-11-1642</dob></author>
//!   </authors>
//!   <title><longtitle>..</longtitle><shorttitle>..</shorttitle></title>
//!   <subjects><subject>..</subject></subjects>
//! </publication>
//! ```
//!
//! ## fulltext.xml
//!
//! ```text
//! <pages>
//!   <page number="37" sequence="1">
//!     <text><word coords="12,250,3,77">..</word></text>
//!   </page>
//! </pages>
//! ```
//!
//! Output is unindented, one line after the XML declaration.

use crate::types::{FullText, Page, Publication};
use maud::{Markup, PreEscaped, html};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render the metadata document.
pub fn render_publication(publication: &Publication) -> String {
    let markup = html! {
        (PreEscaped(XML_DECLARATION))
        publication {
            identifier { (publication.id.to_string()) }
            authors {
                @for author in &publication.authors {
                    author {
                        authorname { (author.name) }
                        dob { (author.date_of_birth.to_string()) }
                    }
                }
            }
            title {
                longtitle { (publication.title.long()) }
                shorttitle { (publication.title.short()) }
            }
            subjects {
                @for subject in &publication.subjects {
                    subject { (subject.0) }
                }
            }
        }
    };
    markup.into_string()
}

/// Render the full text document.
pub fn render_fulltext(fulltext: &FullText) -> String {
    let markup = html! {
        (PreEscaped(XML_DECLARATION))
        pages {
            @for page in &fulltext.pages {
                (render_page(page))
            }
        }
    };
    markup.into_string()
}

fn render_page(page: &Page) -> Markup {
    html! {
        page number=(page.number) sequence=(page.sequence) {
            text {
                @for word in &page.words {
                    word coords=(word.coordinates.to_string()) { (word.text) }
                }
            }
        }
    }
}
