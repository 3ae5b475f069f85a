use crate::dom::{Document, ScrollBehavior, ScrollBlock};

/// Smoothly scrolls the element with `section_id` to the top of the viewport.
/// Returns `false`, and leaves the page untouched, when no such element exists.
pub fn scroll_to_section(document: &mut Document, section_id: &str) -> bool {
    match document.get_element_by_id(section_id) {
        Some(section) => {
            document.scroll_into_view(section, ScrollBehavior::Smooth, ScrollBlock::Start);
            true
        }
        None => false,
    }
}

pub fn scroll_to_top(document: &mut Document) {
    document.scroll_to(0.0, ScrollBehavior::Smooth);
}
