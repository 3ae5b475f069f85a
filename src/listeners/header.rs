use crate::dom::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub const RESTING: HeaderStyle = HeaderStyle {
    background: "rgba(255, 255, 255, 0.95)",
    box_shadow: "none",
};

pub const SCROLLED: HeaderStyle = HeaderStyle {
    background: "rgba(255, 255, 255, 0.98)",
    box_shadow: "0 2px 20px rgba(0, 0, 0, 0.1)",
};

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            SCROLLED
        } else {
            RESTING
        }
    }
}

/// Restyles the first element with `header_class` for the current scroll
/// offset. Pages without a header are left alone.
pub fn apply_header_style(document: &mut Document, header_class: &str, threshold: f64) {
    let Some(header) = document.query_selector(header_class) else {
        return;
    };
    let style = HeaderStyle::for_scroll(document.window().scroll_y, threshold);
    let element = document.element_mut(header);
    element.style.set("background", style.background);
    element.style.set("box-shadow", style.box_shadow);
}
