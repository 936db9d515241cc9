use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::html::document::Document;
use crate::html::headings::{locate_headings, HeadingNode};
use crate::toc::tree::{Entry, ListId, ListItem, TocTree, ROOT};
use crate::toc::{MissingIdPolicy, NestingStrategy, TocOptions};
use crate::utils::error::{Result, TocError};

lazy_static! {
    static ref NON_LABEL_REGEX: Regex = Regex::new(r"[^A-Za-z0-9_\s]").unwrap();
}

/// Label text of a TOC entry: word characters and whitespace only, trimmed
pub fn clean_label(text: &str) -> String {
    NON_LABEL_REGEX.replace_all(text, "").trim().to_string()
}

/// Build a table of contents from the headings of an HTML fragment.
///
/// Headings must already carry ids (see
/// [`attach_identifiers`](crate::html::attach_identifiers)) unless
/// `options.missing_id` says otherwise. The returned markup is the bare
/// nested list, with no whitespace between tags.
pub fn build_toc(html: &str, options: &TocOptions) -> Result<String> {
    if html.is_empty() {
        return Err(TocError::invalid(
            "html, selector, list tag, or item tag should not be empty",
        ));
    }
    options.validate()?;

    let document = Document::parse(html);
    build_toc_from(&document, options)
}

/// Build a table of contents from an already parsed document
pub fn build_toc_from(document: &Document, options: &TocOptions) -> Result<String> {
    options.validate()?;
    let headings = locate_headings(document, &options.selector)?;

    let mut builder = TocBuilder::new(options);
    for heading in &headings {
        builder.push_heading(heading)?;
    }

    let tree = builder.finish();
    debug!("Built table of contents with {} entries", tree.entries().len());
    Ok(tree.to_html())
}

/// Walks headings in order and grows the list tree one entry at a time.
///
/// `cursor` is the path of lists from the root to the list that receives the
/// next item. It is never empty and never loses the root.
pub struct TocBuilder<'a> {
    options: &'a TocOptions,
    tree: TocTree,
    cursor: Vec<ListId>,
    current_level: Option<usize>,
}

impl<'a> TocBuilder<'a> {
    pub fn new(options: &'a TocOptions) -> Self {
        Self {
            options,
            tree: TocTree::new(&options.list_tag, &options.list_classes),
            cursor: vec![ROOT],
            current_level: None,
        }
    }

    /// Number of lists between the root and the insertion point, root included
    pub fn depth(&self) -> usize {
        self.cursor.len()
    }

    /// Add a located heading, applying the missing id policy
    pub fn push_heading(&mut self, heading: &HeadingNode) -> Result<()> {
        match (heading.identifier.as_deref(), self.options.missing_id) {
            (Some(identifier), _) => self.push_entry(heading.level, Some(identifier), &heading.label),
            (None, MissingIdPolicy::Error) => {
                return Err(TocError::MissingIdentifier {
                    tag: heading.tag.clone(),
                    label: clean_label(&heading.label),
                })
            }
            (None, MissingIdPolicy::Skip) => {
                debug!("Skipping <{}> without id", heading.tag);
            }
            (None, MissingIdPolicy::Unlinked) => self.push_entry(heading.level, None, &heading.label),
        }
        Ok(())
    }

    /// Add an entry at `level`; `identifier` of `None` makes a plain-text item
    pub fn push_entry(&mut self, level: usize, identifier: Option<&str>, label: &str) {
        // The first entry sets the baseline, whatever its level
        let current = *self.current_level.get_or_insert(level);

        if level > current {
            self.descend();
        } else if level < current {
            self.ascend(current - level);
        }
        self.current_level = Some(level);

        let label = clean_label(label);
        let entry = match identifier {
            Some(identifier) => Entry::Link {
                href: format!("#{}", identifier),
                label,
                classes: self.options.anchor_classes.clone(),
            },
            None => Entry::Text(label),
        };

        let item = ListItem::new(&self.options.item_tag, &self.options.item_classes).with_entry(entry);
        let cursor = self.cursor();
        self.tree.push_item(cursor, item);
    }

    pub fn finish(self) -> TocTree {
        self.tree
    }

    fn cursor(&self) -> ListId {
        self.cursor.last().copied().unwrap_or(ROOT)
    }

    /// Open one nested list, however many levels were skipped
    fn descend(&mut self) {
        let parent = self.cursor();
        let list = self.tree.add_list(&self.options.list_tag, &self.options.list_classes);

        let attached = match self.options.nesting {
            NestingStrategy::LastItem => match self.tree.last_item_mut(parent) {
                Some(item) if item.nested.is_none() => {
                    item.nested = Some(list);
                    true
                }
                _ => false,
            },
            NestingStrategy::WrapInItem => false,
        };

        if !attached {
            let mut wrapper = ListItem::new(&self.options.item_tag, &self.options.item_classes);
            wrapper.nested = Some(list);
            self.tree.push_item(parent, wrapper);
        }

        self.cursor.push(list);
        trace!("Descended to depth {}", self.cursor.len());
    }

    /// Close up to `steps` lists, stopping at the root.
    ///
    /// Popping a list lands on the list holding its parent item, so lists
    /// always stay nested inside items.
    fn ascend(&mut self, steps: usize) {
        for _ in 0..steps {
            if self.cursor.len() == 1 {
                break;
            }
            self.cursor.pop();
        }
        trace!("Ascended to depth {}", self.cursor.len());
    }
}
