use crate::configuration::PageSettings;
use crate::dom::{Document, Element, NodeId};

pub const OPEN_CLASS: &str = "mobile-open";
const TOGGLE_CLASS: &str = "nav-toggle";
const TOGGLE_ICON: &str = r#"<i class="fas fa-bars"></i>"#;

/// The hamburger button shown on narrow viewports.
#[derive(Debug, Clone)]
pub struct MobileMenu {
    toggle: NodeId,
    nav_class: String,
    nav_links_class: String,
    breakpoint: u32,
}

impl MobileMenu {
    /// Creates the (detached, hidden) toggle button.
    pub fn install(document: &mut Document, settings: &PageSettings) -> Self {
        let toggle = document.create_element(
            Element::new("button")
                .with_class(TOGGLE_CLASS)
                .with_inner_html(TOGGLE_ICON),
        );
        document.element_mut(toggle).style.set("display", "none");
        Self {
            toggle,
            nav_class: settings.nav_class.clone(),
            nav_links_class: settings.nav_links_class.clone(),
            breakpoint: settings.mobile_breakpoint,
        }
    }

    pub fn toggle_button(&self) -> NodeId {
        self.toggle
    }

    /// Shows the toggle at or below the breakpoint; above it, hides the
    /// toggle and closes the menu.
    pub fn check(&self, document: &mut Document) {
        if document.window().inner_width <= self.breakpoint {
            document.element_mut(self.toggle).style.set("display", "block");
            let in_nav = document.element(self.toggle).parent().is_some_and(|parent| {
                document.element(parent).class_list.contains(&self.nav_class)
            });
            if !in_nav {
                if let Some(nav) = document.query_selector(&self.nav_class) {
                    document.move_child(nav, self.toggle);
                }
            }
        } else {
            document.element_mut(self.toggle).style.set("display", "none");
            if let Some(links) = document.query_selector(&self.nav_links_class) {
                document.element_mut(links).class_list.remove(OPEN_CLASS);
            }
        }
    }

    /// Returns whether the menu is open afterwards.
    pub fn toggle(&self, document: &mut Document) -> bool {
        match document.query_selector(&self.nav_links_class) {
            Some(links) => document.element_mut(links).class_list.toggle(OPEN_CLASS),
            None => false,
        }
    }
}
