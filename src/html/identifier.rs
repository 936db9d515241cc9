use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_IDENTIFIER_REGEX: Regex = Regex::new(r"[^A-Za-z0-9_-]").unwrap();
}

/// Default algorithm for generating an html id from heading text.
///
/// Lower-cases the text, turns each run of whitespace into one hyphen and
/// drops everything that is not a word character or a hyphen. Duplicate text
/// gives duplicate ids; nothing here tracks what was generated before.
pub fn to_identifier(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = WHITESPACE_REGEX.replace_all(&lowered, "-");
    NON_IDENTIFIER_REGEX.replace_all(&hyphenated, "").into_owned()
}

fn slug_identifier(text: &str) -> String {
    slug::slugify(text)
}

/// Named identifier generators, selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierStyle {
    /// [`to_identifier`]
    #[default]
    Default,
    /// `slug::slugify`, which also collapses and trims hyphens
    Slug,
}

impl IdentifierStyle {
    pub fn identifier_fn(self) -> fn(&str) -> String {
        match self {
            IdentifierStyle::Default => to_identifier,
            IdentifierStyle::Slug => slug_identifier,
        }
    }
}
