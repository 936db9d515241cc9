use log::debug;

use crate::html::document::{create_link, Document};
use crate::html::headings::{locate_headings, DEFAULT_SELECTOR};
use crate::utils::error::{Result, TocError};

/// Options for appending self-link anchors to headings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOptions {
    pub selector: String,
    /// Visible text of the anchor
    pub label: String,
    pub classes: Vec<String>,
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            label: " #".to_string(),
            classes: Vec::new(),
        }
    }
}

impl AnchorOptions {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }
}

/// Append a link pointing at the heading itself to every heading with an id
pub fn attach_anchors(html: &str, options: &AnchorOptions) -> Result<String> {
    if html.is_empty() {
        return Err(TocError::invalid("html should not be empty"));
    }

    let mut document = Document::parse(html);
    attach_anchors_to(&mut document, options)?;
    document.body_html()
}

/// Append anchors in place, returning how many were added.
///
/// Headings without an id are left alone since there is nothing to link to.
pub fn attach_anchors_to(document: &mut Document, options: &AnchorOptions) -> Result<usize> {
    let headings = locate_headings(document, &options.selector)?;

    let mut attached = 0;
    for heading in &headings {
        let Some(identifier) = heading.identifier.as_deref() else {
            continue;
        };
        let link = create_link(&format!("#{}", identifier), &options.label, &options.classes)?;
        heading.append_child(link);
        attached += 1;
    }

    debug!("Attached anchors to {} of {} headings", attached, headings.len());
    Ok(attached)
}
