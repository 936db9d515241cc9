use crate::html::headings::DEFAULT_SELECTOR;

/// Default heading pattern
pub fn default_selector() -> String {
    DEFAULT_SELECTOR.to_string()
}

/// Headings with empty text get no id by default
pub fn default_skip_empty_label() -> bool {
    true
}

/// Default anchor text
pub fn default_anchor_label() -> String {
    " #".to_string()
}

/// Default list container tag
pub fn default_list_tag() -> String {
    "ul".to_string()
}

/// Default list item tag
pub fn default_item_tag() -> String {
    "li".to_string()
}
