use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::html::anchors::AnchorOptions;
use crate::html::identifier::IdentifierStyle;
use crate::html::ids::IdOptions;
use crate::toc::{MissingIdPolicy, NestingStrategy, TocOptions};

/// Id attachment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdsConfig {
    /// Leave headings with empty text without an id
    #[serde(default = "defaults::default_skip_empty_label")]
    pub skip_empty_label: bool,

    /// Identifier generator
    #[serde(default)]
    pub style: IdentifierStyle,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            skip_empty_label: defaults::default_skip_empty_label(),
            style: IdentifierStyle::default(),
        }
    }
}

/// Self-link anchor settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorsConfig {
    /// Anchor text
    #[serde(default = "defaults::default_anchor_label")]
    pub label: String,

    /// Anchor class names
    #[serde(default)]
    pub classes: Vec<String>,
}

impl Default for AnchorsConfig {
    fn default() -> Self {
        Self {
            label: defaults::default_anchor_label(),
            classes: Vec::new(),
        }
    }
}

/// Table of contents settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocConfig {
    /// List container tag
    #[serde(default = "defaults::default_list_tag")]
    pub list_tag: String,

    /// List item tag
    #[serde(default = "defaults::default_item_tag")]
    pub item_tag: String,

    #[serde(default)]
    pub list_classes: Vec<String>,

    #[serde(default)]
    pub item_classes: Vec<String>,

    #[serde(default)]
    pub anchor_classes: Vec<String>,

    /// Behavior for headings without an id
    #[serde(default)]
    pub missing_id: MissingIdPolicy,

    /// Placement of nested lists
    #[serde(default)]
    pub nesting: NestingStrategy,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            list_tag: defaults::default_list_tag(),
            item_tag: defaults::default_item_tag(),
            list_classes: Vec::new(),
            item_classes: Vec::new(),
            anchor_classes: Vec::new(),
            missing_id: MissingIdPolicy::default(),
            nesting: NestingStrategy::default(),
        }
    }
}

/// Configuration structure, as read from `_toc.yml` and friends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ordered heading pattern shared by all transforms
    #[serde(default = "defaults::default_selector")]
    pub selector: String,

    #[serde(default)]
    pub ids: IdsConfig,

    #[serde(default)]
    pub anchors: AnchorsConfig,

    #[serde(default)]
    pub toc: TocConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selector: defaults::default_selector(),
            ids: IdsConfig::default(),
            anchors: AnchorsConfig::default(),
            toc: TocConfig::default(),
        }
    }
}

impl Config {
    pub fn id_options(&self) -> IdOptions {
        IdOptions::new(self.selector.clone())
            .with_skip_empty_label(self.ids.skip_empty_label)
            .with_identifier_fn(self.ids.style.identifier_fn())
    }

    pub fn anchor_options(&self) -> AnchorOptions {
        AnchorOptions::new(self.selector.clone())
            .with_label(self.anchors.label.clone())
            .with_classes(self.anchors.classes.clone())
    }

    pub fn toc_options(&self) -> TocOptions {
        TocOptions::new(self.selector.clone())
            .with_tags(self.toc.list_tag.clone(), self.toc.item_tag.clone())
            .with_list_classes(self.toc.list_classes.clone())
            .with_item_classes(self.toc.item_classes.clone())
            .with_anchor_classes(self.toc.anchor_classes.clone())
            .with_missing_id(self.toc.missing_id)
            .with_nesting(self.toc.nesting)
    }
}
