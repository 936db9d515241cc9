use std::fmt;

use kuchiki::traits::*;
use kuchiki::{ElementData, NodeDataRef, NodeRef, Selectors};
use log::debug;

use crate::html::document::Document;
use crate::utils::error::{Result, TocError};

/// Default heading pattern, h1 ranked highest
pub const DEFAULT_SELECTOR: &str = "h1,h2,h3,h4,h5,h6";

/// A comma-separated, ordered list of selectors.
///
/// The position of an entry is the nesting level of the elements it matches,
/// so `"h1,h2,h3"` puts h1 at level 0 and h3 at level 2. Document order is
/// unaffected by the order of the entries.
pub struct HeadingPattern {
    source: String,
    entries: Vec<Selectors>,
}

impl HeadingPattern {
    /// Compile a pattern such as `"h1,h2,h3"`
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.trim().is_empty() {
            return Err(TocError::invalid("selector should not be empty"));
        }

        let mut entries = Vec::new();
        for entry in pattern.split(',').map(str::trim) {
            if entry.is_empty() {
                return Err(TocError::invalid(format!(
                    "selector \"{}\" contains an empty entry",
                    pattern
                )));
            }
            let selectors = Selectors::compile(entry)
                .map_err(|()| TocError::invalid(format!("invalid selector \"{}\"", entry)))?;
            entries.push(selectors);
        }

        Ok(Self {
            source: pattern.trim().to_string(),
            entries,
        })
    }

    /// Number of ranks in the pattern
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Rank of the first entry the element matches
    pub fn level_of(&self, element: &NodeDataRef<ElementData>) -> Option<usize> {
        self.entries
            .iter()
            .position(|selectors| selectors.matches(element))
    }
}

impl fmt::Display for HeadingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// A heading element located in a document, annotated with its level
pub struct HeadingNode {
    pub level: usize,
    pub tag: String,
    /// The element's `id`; an empty attribute counts as no id
    pub identifier: Option<String>,
    /// Full text content of the element, descendants included
    pub label: String,
    element: NodeDataRef<ElementData>,
}

impl HeadingNode {
    fn new(element: NodeDataRef<ElementData>, level: usize) -> Self {
        let tag = element.name.local.to_string();
        let identifier = element
            .attributes
            .borrow()
            .get("id")
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        let label = element.as_node().text_contents();

        Self {
            level,
            tag,
            identifier,
            label,
            element,
        }
    }

    /// Handle to the element inside its document
    pub fn element(&self) -> &NodeDataRef<ElementData> {
        &self.element
    }

    /// Write the `id` attribute on the element
    pub fn set_identifier(&mut self, identifier: String) {
        self.element
            .attributes
            .borrow_mut()
            .insert("id", identifier.clone());
        self.identifier = Some(identifier).filter(|id| !id.is_empty());
    }

    /// Append a node as the element's last child
    pub fn append_child(&self, node: NodeRef) {
        self.element.as_node().append(node);
    }
}

impl fmt::Debug for HeadingNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadingNode")
            .field("level", &self.level)
            .field("tag", &self.tag)
            .field("identifier", &self.identifier)
            .field("label", &self.label)
            .finish()
    }
}

/// Locate the elements matching `pattern`, in document order
pub fn locate_headings(document: &Document, pattern: &str) -> Result<Vec<HeadingNode>> {
    let pattern = HeadingPattern::parse(pattern)?;
    Ok(locate_with(document, &pattern))
}

/// Locate headings with an already compiled pattern
pub fn locate_with(document: &Document, pattern: &HeadingPattern) -> Vec<HeadingNode> {
    let headings: Vec<HeadingNode> = document
        .root()
        .descendants()
        .elements()
        .filter_map(|element| {
            let level = pattern.level_of(&element)?;
            Some(HeadingNode::new(element, level))
        })
        .collect();

    debug!("Located {} headings matching \"{}\"", headings.len(), pattern);
    headings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_follow_pattern_rank() {
        let document = Document::parse(
            r#"
            <h3 id="c">C</h3>
            <h1 id="a">A</h1>
            <p>Not a heading</p>
            <h2>B</h2>
            "#,
        );

        let headings = locate_headings(&document, "h1,h2,h3").unwrap();
        let summary: Vec<(usize, &str, Option<&str>)> = headings
            .iter()
            .map(|h| (h.level, h.tag.as_str(), h.identifier.as_deref()))
            .collect();

        assert_eq!(
            summary,
            vec![(2, "h3", Some("c")), (0, "h1", Some("a")), (1, "h2", None)]
        );
    }

    #[test]
    fn test_pattern_order_defines_rank() {
        let document = Document::parse("<h1>A</h1><h2>B</h2>");
        let headings = locate_headings(&document, "h2, h1").unwrap();

        assert_eq!(headings[0].level, 1);
        assert_eq!(headings[1].level, 0);
    }

    #[test]
    fn test_unlisted_tags_are_ignored() {
        let document = Document::parse("<h1>A</h1><h4>D</h4><h2>B</h2>");
        let headings = locate_headings(&document, "h1,h2").unwrap();

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].label, "B");
    }

    #[test]
    fn test_label_includes_descendant_text() {
        let document = Document::parse(r##"<h2 id="x">Setup <em>now</em><a href="#x"> #</a></h2>"##);
        let headings = locate_headings(&document, DEFAULT_SELECTOR).unwrap();

        assert_eq!(headings[0].label, "Setup now #");
    }

    #[test]
    fn test_empty_id_counts_as_missing() {
        let document = Document::parse(r#"<h2 id="">B</h2>"#);
        let headings = locate_headings(&document, DEFAULT_SELECTOR).unwrap();

        assert_eq!(headings[0].identifier, None);
    }

    #[test]
    fn test_set_identifier_updates_element() {
        let document = Document::parse("<h2>B</h2>");
        let mut headings = locate_headings(&document, DEFAULT_SELECTOR).unwrap();
        headings[0].set_identifier("b".to_string());

        assert_eq!(headings[0].identifier.as_deref(), Some("b"));
        assert_eq!(document.body_html().unwrap(), r#"<h2 id="b">B</h2>"#);
    }

    #[test]
    fn test_invalid_patterns() {
        for pattern in ["", "   ", "h1,,h2", "h1,", "h1,[[["] {
            let err = HeadingPattern::parse(pattern).err().unwrap();
            assert!(matches!(err, TocError::InvalidArgument(_)), "{}", pattern);
        }
    }

    #[test]
    fn test_class_selectors_rank_too() {
        let document = Document::parse(r#"<p class="title">T</p><h2>B</h2>"#);
        let headings = locate_headings(&document, ".title,h2").unwrap();

        assert_eq!(headings.len(), 2);
        assert_eq!(headings[0].level, 0);
        assert_eq!(headings[0].tag, "p");
        assert_eq!(headings[1].level, 1);
    }
}
