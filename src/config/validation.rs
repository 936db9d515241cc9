use log::warn;

use crate::config::Config;
use crate::html::document::is_valid_tag_name;
use crate::html::headings::HeadingPattern;
use crate::utils::error::{Result, TocError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> Result<()> {
    // Validate heading pattern
    validate_selector(config)?;

    // Validate list and item tags
    validate_tags(config)?;

    // Class names that would be dropped anyway
    warn_empty_classes(config);

    Ok(())
}

/// Validate the heading pattern
fn validate_selector(config: &Config) -> Result<()> {
    HeadingPattern::parse(&config.selector)
        .map(|_| ())
        .map_err(|e| TocError::Config(format!("selector \"{}\": {}", config.selector, e)))
}

/// Validate the tags written into the table of contents
fn validate_tags(config: &Config) -> Result<()> {
    for (key, tag) in [("toc.list_tag", &config.toc.list_tag), ("toc.item_tag", &config.toc.item_tag)] {
        if !is_valid_tag_name(tag) {
            return Err(TocError::Config(format!(
                "{} \"{}\" is not a valid tag name",
                key, tag
            )));
        }
    }
    Ok(())
}

fn warn_empty_classes(config: &Config) {
    let lists = [
        ("anchors.classes", &config.anchors.classes),
        ("toc.list_classes", &config.toc.list_classes),
        ("toc.item_classes", &config.toc.item_classes),
        ("toc.anchor_classes", &config.toc.anchor_classes),
    ];
    for (key, classes) in lists {
        if classes.iter().any(|class| class.trim().is_empty()) {
            warn!("Empty class names in {} are ignored", key);
        }
    }
}
