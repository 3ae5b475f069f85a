use crate::dom::{Document, Element, NodeId};
use crate::listeners::navigation;

const BUTTON_CLASS: &str = "scroll-to-top";
const BUTTON_ICON: &str = r#"<i class="fas fa-arrow-up"></i>"#;
const BUTTON_CSS: &str = "
    position: fixed;
    bottom: 30px;
    right: 30px;
    width: 50px;
    height: 50px;
    border-radius: 50%;
    background: #4f46e5;
    color: white;
    border: none;
    cursor: pointer;
    display: none;
    z-index: 1000;
    box-shadow: 0 4px 12px rgba(79, 70, 229, 0.3);
    transition: all 0.3s ease;
";
pub const IDLE_BACKGROUND: &str = "#4f46e5";
pub const HOVER_BACKGROUND: &str = "#4338ca";

/// Floating button that appears after scrolling past `threshold` pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScrollToTopButton {
    button: NodeId,
    threshold: f64,
}

impl ScrollToTopButton {
    pub fn install(document: &mut Document, threshold: f64) -> Self {
        let body = document.body();
        let button = document.append_child(
            body,
            Element::new("button")
                .with_class(BUTTON_CLASS)
                .with_inner_html(BUTTON_ICON),
        );
        document.element_mut(button).style.set_css_text(BUTTON_CSS);
        Self { button, threshold }
    }

    pub fn button(&self) -> NodeId {
        self.button
    }

    pub fn on_scroll(&self, document: &mut Document) {
        let display = if document.window().scroll_y > self.threshold {
            "block"
        } else {
            "none"
        };
        document.element_mut(self.button).style.set("display", display);
    }

    pub fn on_click(&self, document: &mut Document) {
        navigation::scroll_to_top(document);
    }

    pub fn on_hover(&self, document: &mut Document, hovered: bool) {
        let (transform, background) = if hovered {
            ("scale(1.1)", HOVER_BACKGROUND)
        } else {
            ("scale(1)", IDLE_BACKGROUND)
        };
        let style = &mut document.element_mut(self.button).style;
        style.set("transform", transform);
        style.set("background", background);
    }
}
