//! Generator configuration.
//!
//! Every range the synthesis model draws from can be overridden from a TOML
//! file passed with `--config`. Without a file, the stock defaults apply.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [metadata]
//! authors = [1, 5]               # authors per publication
//! author_name_length = [1, 30]
//! birth_year = [1000, 2000]
//! long_title_length = [10, 100]
//! short_title_length = [1, 10]   # capped at the long title's length
//! subjects = [1, 10]             # subjects per publication
//! subject_length = [1, 15]
//!
//! [fulltext]
//! pages = [1, 1000]
//! words_per_page = [100, 200]
//! word_length = [1, 15]
//! coordinate = [1, 300]
//! ```
//!
//! Ranges are inclusive `[min, max]` pairs. Config files are sparse:
//! override just the values you want. Unknown keys are rejected to catch
//! typos early.
//!
//! The document schema, the directory layout and the image extension are not
//! configurable.

use crate::random::{self, Bounds};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full generator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Ranges for `publication.xml` content.
    pub metadata: MetadataConfig,
    /// Ranges for `fulltext.xml` content.
    pub fulltext: FullTextConfig,
}

/// Ranges used by the publication metadata builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    pub authors: Bounds,
    pub author_name_length: Bounds,
    pub birth_year: Bounds,
    pub long_title_length: Bounds,
    /// Further capped at the generated long title's length.
    pub short_title_length: Bounds,
    pub subjects: Bounds,
    pub subject_length: Bounds,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            authors: bounds(1, 5),
            author_name_length: bounds(1, 30),
            birth_year: random::BIRTH_YEAR,
            long_title_length: bounds(10, 100),
            short_title_length: bounds(1, 10),
            subjects: bounds(1, 10),
            subject_length: bounds(1, 15),
        }
    }
}

/// Ranges used by the full text builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FullTextConfig {
    pub pages: Bounds,
    pub words_per_page: Bounds,
    pub word_length: Bounds,
    /// Range of each of the four bounding-box values.
    pub coordinate: Bounds,
}

impl Default for FullTextConfig {
    fn default() -> Self {
        Self {
            pages: bounds(1, 1000),
            words_per_page: bounds(100, 200),
            word_length: bounds(1, 15),
            coordinate: random::COORDINATE,
        }
    }
}

fn bounds(min: u32, max: u32) -> Bounds {
    Bounds::new(min, max).expect("default ranges must be ordered")
}

impl GeneratorConfig {
    /// Reject ranges the synthesis model cannot honor.
    ///
    /// Inverted ranges never get this far (they fail deserialization). What
    /// remains is lower bounds of zero on anything that must be non-empty,
    /// and years that do not fit the four-digit date format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.metadata;
        let f = &self.fulltext;
        for (key, range) in [
            ("metadata.authors", m.authors),
            ("metadata.long_title_length", m.long_title_length),
            ("metadata.short_title_length", m.short_title_length),
            ("metadata.subjects", m.subjects),
            ("fulltext.pages", f.pages),
            ("fulltext.words_per_page", f.words_per_page),
        ] {
            if range.min() == 0 {
                return Err(ConfigError::Validation(format!(
                    "{key} must start at 1 or more, got {range}"
                )));
            }
        }
        if m.birth_year.max() > 9999 {
            return Err(ConfigError::Validation(format!(
                "metadata.birth_year must be at most 9999, got {}",
                m.birth_year
            )));
        }
        // Page numbers run up to twice the page count.
        if f.pages.max() > u32::MAX / 2 {
            return Err(ConfigError::Validation(format!(
                "fulltext.pages is too large, got {}",
                f.pages
            )));
        }
        Ok(())
    }
}

/// Load and validate a config file, or return the defaults when `path` is
/// `None`.
///
/// A path that was given but does not exist is an error, not a fallback.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    let config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => GeneratorConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Parse config TOML without validating it.
pub fn parse_config(content: &str) -> Result<GeneratorConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Returns a fully-commented stock config file with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# archive-fixtures configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Ranges are inclusive [min, max] pairs.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# publication.xml
# ---------------------------------------------------------------------------
[metadata]
# Number of <author> elements per publication.
authors = [1, 5]

# Length of each <authorname>, in characters.
author_name_length = [1, 30]

# Year of each <dob>. Day (1-31) and month (1-12) are fixed ranges and are
# not checked against each other, so dates like 31-02-1500 occur.
birth_year = [1000, 2000]

# Length of <longtitle>, in characters.
long_title_length = [10, 100]

# Length of <shorttitle>, cut from the start of the long title. Capped at
# the long title's length.
short_title_length = [1, 10]

# Number of <subject> elements per publication.
subjects = [1, 10]

# Length of each <subject>, in characters.
subject_length = [1, 15]

# ---------------------------------------------------------------------------
# fulltext.xml
# ---------------------------------------------------------------------------
[fulltext]
# Number of <page> elements. The first page number is drawn from
# [1, page count]; later pages count up from there.
pages = [1, 1000]

# Number of <word> elements per page.
words_per_page = [100, 200]

# Length of each word, in characters.
word_length = [1, 15]

# Range of each of the four values in a word's coords="a,b,c,d".
coordinate = [1, 300]
"##
}
