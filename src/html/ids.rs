use log::{debug, trace};

use crate::html::document::Document;
use crate::html::headings::{locate_headings, DEFAULT_SELECTOR};
use crate::html::identifier::to_identifier;
use crate::utils::error::Result;

/// Options for attaching ids to headings
#[derive(Debug, Clone)]
pub struct IdOptions {
    pub selector: String,
    /// Leave headings whose text is empty without an id
    pub skip_empty_label: bool,
    pub identifier_fn: fn(&str) -> String,
}

impl Default for IdOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            skip_empty_label: true,
            identifier_fn: to_identifier,
        }
    }
}

impl IdOptions {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    pub fn with_skip_empty_label(mut self, skip: bool) -> Self {
        self.skip_empty_label = skip;
        self
    }

    pub fn with_identifier_fn(mut self, identifier_fn: fn(&str) -> String) -> Self {
        self.identifier_fn = identifier_fn;
        self
    }
}

/// Attach generated ids to the headings of an HTML fragment.
///
/// Returns the body markup with every matched heading carrying an `id`
/// derived from its text. Existing ids are overwritten.
pub fn attach_identifiers(html: &str, options: &IdOptions) -> Result<String> {
    let mut document = Document::parse(html);
    attach_identifiers_to(&mut document, options)?;
    document.body_html()
}

/// Attach ids in place, returning how many headings received one
pub fn attach_identifiers_to(document: &mut Document, options: &IdOptions) -> Result<usize> {
    let mut headings = locate_headings(document, &options.selector)?;

    let mut attached = 0;
    for heading in headings.iter_mut() {
        if options.skip_empty_label && heading.label.is_empty() {
            trace!("Skipping <{}> with empty text", heading.tag);
            continue;
        }
        let identifier = (options.identifier_fn)(&heading.label);
        heading.set_identifier(identifier);
        attached += 1;
    }

    debug!("Attached ids to {} of {} headings", attached, headings.len());
    Ok(attached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TocError;
    use crate::utils::text::normalize_html;

    const RAW_HEADERS: &str = r#"
<h1>Carbonara Recipe</h1>
<h2>Ingredients</h2>
<h3>Pasta</h3>
<h3>Bacon</h3>
<h2>Instructions</h2>
<h3>Prepare eggs and cheese</h3>
"#;

    const HEADERS_WITH_ID: &str = r#"
<h1 id="carbonara-recipe">Carbonara Recipe</h1>
<h2 id="ingredients">Ingredients</h2>
<h3 id="pasta">Pasta</h3>
<h3 id="bacon">Bacon</h3>
<h2 id="instructions">Instructions</h2>
<h3 id="prepare-eggs-and-cheese">Prepare eggs and cheese</h3>
"#;

    #[test]
    fn test_attach_identifiers() {
        let result = attach_identifiers(RAW_HEADERS, &IdOptions::default()).unwrap();
        assert_eq!(normalize_html(&result), normalize_html(HEADERS_WITH_ID));
    }

    #[test]
    fn test_attach_identifiers_is_idempotent() {
        let options = IdOptions::default();
        let once = attach_identifiers(RAW_HEADERS, &options).unwrap();
        let twice = attach_identifiers(&once, &options).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_skip_empty_label() {
        let html = "<h2></h2><h2>Named</h2>";

        let result = attach_identifiers(html, &IdOptions::default()).unwrap();
        assert_eq!(result, r#"<h2></h2><h2 id="named">Named</h2>"#);

        let options = IdOptions::default().with_skip_empty_label(false);
        let result = attach_identifiers(html, &options).unwrap();
        assert_eq!(result, r#"<h2 id=""></h2><h2 id="named">Named</h2>"#);
    }

    #[test]
    fn test_only_selected_headings() {
        let options = IdOptions::new("h2");
        let result = attach_identifiers("<h1>Top</h1><h2>Sub Part</h2>", &options).unwrap();
        assert_eq!(result, r#"<h1>Top</h1><h2 id="sub-part">Sub Part</h2>"#);
    }

    #[test]
    fn test_custom_identifier_fn() {
        fn prefixed(text: &str) -> String {
            format!("sec-{}", to_identifier(text))
        }

        let mut document = Document::parse("<h1>A</h1><h2>B</h2><p>C</p>");
        let options = IdOptions::default().with_identifier_fn(prefixed);
        let attached = attach_identifiers_to(&mut document, &options).unwrap();

        assert_eq!(attached, 2);
        assert_eq!(
            document.body_html().unwrap(),
            r#"<h1 id="sec-a">A</h1><h2 id="sec-b">B</h2><p>C</p>"#
        );
    }

    #[test]
    fn test_empty_selector_is_rejected() {
        let err = attach_identifiers("<h1>A</h1>", &IdOptions::new("")).unwrap_err();
        assert!(matches!(err, TocError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_markup_is_allowed() {
        assert_eq!(attach_identifiers("", &IdOptions::default()).unwrap(), "");
    }
}
