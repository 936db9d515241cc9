//! Heading ids, self-link anchors and tables of contents for rendered HTML.
//!
//! Three post-processing passes a static site generator runs over the HTML it
//! has rendered:
//!
//! - [`attach_identifiers`] gives every heading an `id` derived from its text,
//! - [`attach_anchors`] appends a link to itself to every heading with an `id`,
//! - [`build_toc`] turns the headings into a nested list.
//!
//! Headings are found with an ordered selector list such as `"h1,h2,h3"`; the
//! position of an entry in that list is the nesting level of the headings it
//! matches.
//!
//! ```no_run
//! use rustyll_toc::{attach_identifiers, build_toc, IdOptions, TocOptions};
//!
//! let html = attach_identifiers("<h1>Title</h1><h2>Part</h2>", &IdOptions::default())?;
//! let toc = build_toc(&html, &TocOptions::default())?;
//! # Ok::<(), rustyll_toc::TocError>(())
//! ```

pub mod config;
pub mod html;
pub mod processor;
pub mod toc;
pub mod utils;

pub use config::{load_config, Config};
pub use html::{
    attach_anchors, attach_identifiers, locate_headings, to_identifier, AnchorOptions, Document,
    HeadingNode, IdOptions, IdentifierStyle,
};
pub use processor::{process_html, Processed};
pub use toc::{build_toc, MissingIdPolicy, NestingStrategy, TocBuilder, TocOptions, TocTree};
pub use utils::{normalize_html, Result, TocError};
