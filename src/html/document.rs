use html_escape::{encode_double_quoted_attribute, encode_text};
use kuchiki::traits::*;
use kuchiki::NodeRef;

use crate::utils::error::{Result, TocError};

/// A parsed HTML document owned by a single transform call.
///
/// Fragments are parsed the way a browser would, so the input ends up inside
/// an implied `<body>`; [`Document::body_html`] hands back only that body.
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse an HTML fragment (or a full document)
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }

    /// The document node
    pub fn root(&self) -> &NodeRef {
        &self.root
    }

    /// Serialize the inner markup of `<body>`
    pub fn body_html(&self) -> Result<String> {
        match self.root.select_first("body") {
            Ok(body) => inner_html(body.as_node()),
            Err(()) => inner_html(&self.root),
        }
    }
}

/// Serialize the children of `node`, without the node itself
pub fn inner_html(node: &NodeRef) -> Result<String> {
    let mut buffer = Vec::new();
    for child in node.children() {
        child.serialize(&mut buffer)?;
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Create a detached `<a>` element ready to be appended somewhere else
pub fn create_link(href: &str, label: &str, classes: &[String]) -> Result<NodeRef> {
    let markup = format!(
        "<a href=\"{}\"{}>{}</a>",
        encode_double_quoted_attribute(href),
        class_attribute(classes),
        encode_text(label)
    );
    let fragment = kuchiki::parse_html().one(markup);
    let link = fragment
        .select_first("a")
        .map_err(|()| TocError::invalid(format!("could not build a link to {}", href)))?;

    let node = link.as_node().clone();
    node.detach();
    Ok(node)
}

/// Class names that survive cleaning: no empty names, no duplicates
pub fn class_list(classes: &[String]) -> Vec<&str> {
    let mut list: Vec<&str> = Vec::with_capacity(classes.len());
    for class in classes.iter().map(|c| c.trim()) {
        if !class.is_empty() && !list.contains(&class) {
            list.push(class);
        }
    }
    list
}

/// Render ` class="..."`, or nothing when no class names remain
pub fn class_attribute(classes: &[String]) -> String {
    let list = class_list(classes);
    if list.is_empty() {
        return String::new();
    }
    format!(" class=\"{}\"", encode_double_quoted_attribute(&list.join(" ")))
}

/// Tag names written verbatim into markup must be plain ASCII names
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
