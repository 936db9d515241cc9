use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::html::document::class_attribute;

/// Index of a list inside a [`TocTree`]
pub type ListId = usize;

/// Id of the top-level list
pub const ROOT: ListId = 0;

/// What a list item shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Link {
        href: String,
        label: String,
        classes: Vec<String>,
    },
    /// A label without a target, for headings that have no id
    Text(String),
}

/// A list item; `entry` is `None` for items that only wrap a nested list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub tag: String,
    pub classes: Vec<String>,
    pub entry: Option<Entry>,
    pub nested: Option<ListId>,
}

impl ListItem {
    pub fn new(tag: &str, classes: &[String]) -> Self {
        Self {
            tag: tag.to_string(),
            classes: classes.to_vec(),
            entry: None,
            nested: None,
        }
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn label(&self) -> Option<&str> {
        match &self.entry {
            Some(Entry::Link { label, .. }) | Some(Entry::Text(label)) => Some(label.as_str()),
            None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub tag: String,
    pub classes: Vec<String>,
    pub items: Vec<ListItem>,
}

/// A table of contents under construction.
///
/// Lists live in one arena and items refer to their nested list by index, so
/// ownership only runs from parent to child. The root list always exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocTree {
    lists: Vec<ListNode>,
}

impl TocTree {
    pub fn new(list_tag: &str, list_classes: &[String]) -> Self {
        let mut tree = Self { lists: Vec::new() };
        tree.add_list(list_tag, list_classes);
        tree
    }

    pub fn root(&self) -> &ListNode {
        &self.lists[ROOT]
    }

    pub fn list(&self, id: ListId) -> &ListNode {
        &self.lists[id]
    }

    /// Nested list of an item, if it has one
    pub fn nested(&self, item: &ListItem) -> Option<&ListNode> {
        item.nested.map(|id| self.list(id))
    }

    /// Create a detached list and return its id
    pub fn add_list(&mut self, tag: &str, classes: &[String]) -> ListId {
        self.lists.push(ListNode {
            tag: tag.to_string(),
            classes: classes.to_vec(),
            items: Vec::new(),
        });
        self.lists.len() - 1
    }

    pub fn push_item(&mut self, list: ListId, item: ListItem) {
        self.lists[list].items.push(item);
    }

    pub fn last_item_mut(&mut self, list: ListId) -> Option<&mut ListItem> {
        self.lists[list].items.last_mut()
    }

    /// Entries in reading order (pre-order walk from the root)
    pub fn entries(&self) -> Vec<&Entry> {
        let mut entries = Vec::new();
        self.collect_entries(ROOT, &mut entries);
        entries
    }

    fn collect_entries<'a>(&'a self, id: ListId, entries: &mut Vec<&'a Entry>) {
        for item in &self.lists[id].items {
            if let Some(entry) = &item.entry {
                entries.push(entry);
            }
            if let Some(nested) = item.nested {
                self.collect_entries(nested, entries);
            }
        }
    }

    /// Render the tree as compact list markup, starting at the root list
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_list(ROOT, &mut html);
        html
    }

    fn write_list(&self, id: ListId, html: &mut String) {
        let list = &self.lists[id];
        html.push_str(&format!("<{}{}>", list.tag, class_attribute(&list.classes)));

        for item in &list.items {
            html.push_str(&format!("<{}{}>", item.tag, class_attribute(&item.classes)));

            match &item.entry {
                Some(Entry::Link { href, label, classes }) => {
                    html.push_str(&format!(
                        "<a href=\"{}\"{}>{}</a>",
                        encode_double_quoted_attribute(href),
                        class_attribute(classes),
                        encode_text(label)
                    ));
                }
                Some(Entry::Text(label)) => html.push_str(&encode_text(label)),
                None => {}
            }

            if let Some(nested) = item.nested {
                self.write_list(nested, html);
            }

            html.push_str(&format!("</{}>", item.tag));
        }

        html.push_str(&format!("</{}>", list.tag));
    }
}
