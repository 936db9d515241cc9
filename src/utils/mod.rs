pub mod error;
pub mod fs;
pub mod text;

pub use error::{BoxResult, Result, TocError};
pub use text::normalize_html;
