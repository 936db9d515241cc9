pub mod anchors;
pub mod document;
pub mod headings;
pub mod identifier;
pub mod ids;

pub use anchors::{attach_anchors, attach_anchors_to, AnchorOptions};
pub use document::Document;
pub use headings::{locate_headings, HeadingNode, HeadingPattern, DEFAULT_SELECTOR};
pub use identifier::{to_identifier, IdentifierStyle};
pub use ids::{attach_identifiers, attach_identifiers_to, IdOptions};
