//! Shared test utilities.
//!
//! Provides seeded random sources, small configs that keep generated
//! documents quick to build, tiny hand-built entities, and a minimal XML
//! tree parser (on top of `quick-xml`) for asserting on rendered output.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let publication = build_publication(id(1), &mut seeded(7), &MetadataConfig::default());
//! let root = parse_xml(&render_publication(&publication));
//! assert_eq!(root.child("identifier").text, "1");
//! ```

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

use crate::config::{FullTextConfig, GeneratorConfig};
use crate::random::Bounds;
use crate::types::{
    Author, BirthDate, Coordinates, FullText, Page, Publication, PublicationId, Subject, Title,
    Word,
};

// =========================================================================
// Random sources and configs
// =========================================================================

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Identifier shorthand. Panics on 0.
pub fn id(n: u32) -> PublicationId {
    PublicationId::new(n).unwrap()
}

/// Full text ranges scaled down: 1–12 pages of 1–8 words.
pub fn small_fulltext_config() -> FullTextConfig {
    FullTextConfig {
        pages: Bounds::new(1, 12).unwrap(),
        words_per_page: Bounds::new(1, 8).unwrap(),
        ..FullTextConfig::default()
    }
}

/// Default metadata ranges with [`small_fulltext_config`].
pub fn small_config() -> GeneratorConfig {
    GeneratorConfig {
        fulltext: small_fulltext_config(),
        ..GeneratorConfig::default()
    }
}

// =========================================================================
// Hand-built entities
// =========================================================================

pub fn tiny_publication(n: u32) -> Publication {
    Publication {
        id: id(n),
        authors: vec![Author {
            name: "Author<1>".to_string(),
            date_of_birth: BirthDate {
                day: 9,
                month: 4,
                year: 1901,
            },
        }],
        title: Title::with_prefix("A&Long\"Title".to_string(), 3),
        subjects: vec![Subject("history".to_string())],
    }
}

pub fn tiny_fulltext() -> FullText {
    FullText {
        pages: vec![Page {
            number: 2,
            sequence: 1,
            words: vec![Word {
                text: "w&rd".to_string(),
                coordinates: Coordinates([1, 2, 3, 4]),
            }],
        }],
    }
}

// =========================================================================
// Filesystem
// =========================================================================

/// Sorted names of the directories directly under `root`.
pub fn dir_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(root)
        .unwrap()
        .map(|e| e.unwrap())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

// =========================================================================
// XML tree
// =========================================================================

/// Parsed element: name, attributes, concatenated text and child elements.
#[derive(Debug, Default)]
pub struct XmlElement {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    fn open(start: &BytesStart<'_>) -> Self {
        let attrs = start
            .attributes()
            .map(|a| {
                let a = a.unwrap();
                (
                    String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                    a.unescape_value().unwrap().into_owned(),
                )
            })
            .collect();
        Self {
            name: String::from_utf8(start.name().as_ref().to_vec()).unwrap(),
            attrs,
            ..Self::default()
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children_named(&self, name: &str) -> Vec<&XmlElement> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// The single child called `name`. Panics when missing or repeated.
    pub fn child(&self, name: &str) -> &XmlElement {
        let matches = self.children_named(name);
        assert_eq!(
            matches.len(),
            1,
            "expected exactly one <{name}> under <{}>",
            self.name
        );
        matches[0]
    }
}

/// Parse a document into its root element. Panics on malformed XML.
pub fn parse_xml(xml: &str) -> XmlElement {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root = None;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(start) => stack.push(XmlElement::open(&start)),
            Event::Empty(start) => attach(&mut stack, &mut root, XmlElement::open(&start)),
            Event::End(_) => {
                let element = stack.pop().expect("unbalanced end tag");
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => stack
                .last_mut()
                .expect("text outside the root element")
                .text
                .push_str(&text.unescape().unwrap()),
            Event::Eof => break,
            _ => {}
        }
    }
    assert!(stack.is_empty(), "unclosed elements: {}", stack.len());
    root.expect("document has no root element")
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            assert!(root.is_none(), "more than one root element");
            *root = Some(element);
        }
    }
}
