use log::debug;

use crate::config::Config;
use crate::html::anchors::attach_anchors_to;
use crate::html::document::Document;
use crate::html::ids::attach_identifiers_to;
use crate::toc::build_toc_from;
use crate::utils::error::{Result, TocError};

/// Output of [`process_html`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Body markup with ids and anchors attached
    pub html: String,
    /// Table of contents markup
    pub toc: String,
}

/// Run ids, anchors and the table of contents over one parsed document.
///
/// The table of contents is built after the anchors are in place; anchor text
/// is stripped from entry labels, so the result is the same as building it
/// first.
pub fn process_html(html: &str, config: &Config) -> Result<Processed> {
    if html.is_empty() {
        return Err(TocError::invalid("html should not be empty"));
    }

    let id_options = config.id_options();
    let anchor_options = config.anchor_options();
    let toc_options = config.toc_options();
    toc_options.validate()?;

    let mut document = Document::parse(html);
    let ids = attach_identifiers_to(&mut document, &id_options)?;
    let anchors = attach_anchors_to(&mut document, &anchor_options)?;
    let toc = build_toc_from(&document, &toc_options)?;
    debug!("Processed document: {} ids, {} anchors", ids, anchors);

    Ok(Processed {
        html: document.body_html()?,
        toc,
    })
}
