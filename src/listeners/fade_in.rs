use std::collections::HashSet;

use crate::configuration::PageSettings;
use crate::dom::{Document, NodeId};
use crate::events::IntersectionEntry;

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(30px)";
const TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport before intersecting.
    pub bottom_margin: f64,
}

impl ObserverOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }

    /// Builds the entry the viewport reports for an element spanning
    /// `top..top + height` (viewport coordinates).
    pub fn entry(
        &self,
        target: NodeId,
        top: f64,
        height: f64,
        viewport_height: f64,
    ) -> IntersectionEntry {
        let root_bottom = viewport_height - self.bottom_margin;
        let visible = (top + height).min(root_bottom) - top.max(0.0);
        let intersection_ratio = if height > 0.0 {
            (visible / height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        IntersectionEntry {
            target,
            is_intersecting: visible > 0.0,
            intersection_ratio,
        }
    }
}

impl From<&PageSettings> for ObserverOptions {
    fn from(settings: &PageSettings) -> Self {
        Self {
            threshold: settings.fade_in_threshold,
            bottom_margin: settings.fade_in_bottom_margin,
        }
    }
}

/// Reveals content cards the first time they become visible enough.
#[derive(Debug, Clone)]
pub struct FadeInObserver {
    options: ObserverOptions,
    observed: Vec<NodeId>,
    revealed: HashSet<NodeId>,
}

impl FadeInObserver {
    /// Hides every element carrying one of `classes` and starts observing it.
    pub fn observe(document: &mut Document, classes: &[String], options: ObserverOptions) -> Self {
        let classes: Vec<&str> = classes.iter().map(String::as_str).collect();
        let observed = document.query_selector_all(&classes);
        for node in &observed {
            let style = &mut document.element_mut(*node).style;
            style.set("opacity", HIDDEN_OPACITY);
            style.set("transform", HIDDEN_TRANSFORM);
            style.set("transition", TRANSITION);
        }
        Self {
            options,
            observed,
            revealed: HashSet::new(),
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn observed(&self) -> &[NodeId] {
        &self.observed
    }

    pub fn is_revealed(&self, node: NodeId) -> bool {
        self.revealed.contains(&node)
    }

    /// Returns the elements revealed by this batch of entries.
    pub fn on_intersection(
        &mut self,
        document: &mut Document,
        entries: &[IntersectionEntry],
    ) -> Vec<NodeId> {
        let mut newly_revealed = Vec::new();
        for entry in entries {
            let qualifies = entry.is_intersecting
                && entry.intersection_ratio >= self.options.threshold
                && self.observed.contains(&entry.target);
            if qualifies && self.revealed.insert(entry.target) {
                let style = &mut document.element_mut(entry.target).style;
                style.set("opacity", "1");
                style.set("transform", "translateY(0)");
                newly_revealed.push(entry.target);
            }
        }
        newly_revealed
    }
}
