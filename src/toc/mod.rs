mod generator;
mod tree;

pub use generator::{build_toc, build_toc_from, clean_label, TocBuilder};
pub use tree::{Entry, ListId, ListItem, ListNode, TocTree, ROOT};

use serde::{Deserialize, Serialize};

use crate::html::document::is_valid_tag_name;
use crate::html::headings::DEFAULT_SELECTOR;
use crate::utils::error::{Result, TocError};

/// What to do with a heading that has no id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MissingIdPolicy {
    /// Fail with [`TocError::MissingIdentifier`]
    #[default]
    Error,
    /// Leave the heading out of the table of contents
    Skip,
    /// Keep the heading as a plain-text item without a link
    Unlinked,
}

/// Where a nested list goes when the heading level increases
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NestingStrategy {
    /// Inside the previous item, after its link
    #[default]
    LastItem,
    /// Inside a new item of its own
    WrapInItem,
}

/// Options for table of contents generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocOptions {
    /// Ordered heading pattern; position in the list is the nesting level
    pub selector: String,
    pub list_tag: String,
    pub item_tag: String,
    pub list_classes: Vec<String>,
    pub item_classes: Vec<String>,
    /// Classes of the links inside items
    pub anchor_classes: Vec<String>,
    pub missing_id: MissingIdPolicy,
    pub nesting: NestingStrategy,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            list_tag: "ul".to_string(),
            item_tag: "li".to_string(),
            list_classes: Vec::new(),
            item_classes: Vec::new(),
            anchor_classes: Vec::new(),
            missing_id: MissingIdPolicy::default(),
            nesting: NestingStrategy::default(),
        }
    }
}

impl TocOptions {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    /// Use `ol`/`li` style tags, e.g. `("ol", "li")`
    pub fn with_tags(mut self, list_tag: impl Into<String>, item_tag: impl Into<String>) -> Self {
        self.list_tag = list_tag.into();
        self.item_tag = item_tag.into();
        self
    }

    pub fn with_list_classes(mut self, classes: Vec<String>) -> Self {
        self.list_classes = classes;
        self
    }

    pub fn with_item_classes(mut self, classes: Vec<String>) -> Self {
        self.item_classes = classes;
        self
    }

    pub fn with_anchor_classes(mut self, classes: Vec<String>) -> Self {
        self.anchor_classes = classes;
        self
    }

    pub fn with_missing_id(mut self, policy: MissingIdPolicy) -> Self {
        self.missing_id = policy;
        self
    }

    /// `true` leaves headings without an id out, `false` makes them an error
    pub fn skip_missing_id(self, skip: bool) -> Self {
        let policy = if skip {
            MissingIdPolicy::Skip
        } else {
            MissingIdPolicy::Error
        };
        self.with_missing_id(policy)
    }

    pub fn with_nesting(mut self, nesting: NestingStrategy) -> Self {
        self.nesting = nesting;
        self
    }

    /// Check the string arguments before any parsing happens
    pub fn validate(&self) -> Result<()> {
        if self.selector.trim().is_empty() || self.list_tag.is_empty() || self.item_tag.is_empty() {
            return Err(TocError::invalid(
                "selector, list tag, or item tag should not be empty",
            ));
        }
        for tag in [&self.list_tag, &self.item_tag] {
            if !is_valid_tag_name(tag) {
                return Err(TocError::invalid(format!("\"{}\" is not a valid tag name", tag)));
            }
        }
        Ok(())
    }
}
