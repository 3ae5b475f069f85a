use std::collections::HashMap;

use strum::Display;

use crate::dom::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    Scroll,
    Resize,
    Click,
    MouseEnter,
    MouseLeave,
    Intersection,
}

/// One visibility change reported by the viewport for an observed element.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
    pub intersection_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Scroll,
    Resize,
    Click { target: NodeId },
    MouseEnter { target: NodeId },
    MouseLeave { target: NodeId },
    Intersection(Vec<IntersectionEntry>),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Scroll => EventKind::Scroll,
            Event::Resize => EventKind::Resize,
            Event::Click { .. } => EventKind::Click,
            Event::MouseEnter { .. } => EventKind::MouseEnter,
            Event::MouseLeave { .. } => EventKind::MouseLeave,
            Event::Intersection(_) => EventKind::Intersection,
        }
    }

    /// The element an event was fired on, for pointer events.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            Event::Click { target }
            | Event::MouseEnter { target }
            | Event::MouseLeave { target } => Some(*target),
            _ => None,
        }
    }
}

/// The submit event of the contact form.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the navigation-based submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Revokes one handler when passed to [`EventBus::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    kind: EventKind,
    id: u64,
}

impl Subscription {
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

type Handler<C> = Box<dyn FnMut(&mut C, &Event)>;

/// Handlers keyed by event kind, run in subscription order against a
/// shared context.
pub struct EventBus<C> {
    next_id: u64,
    handlers: HashMap<EventKind, Vec<(u64, Handler<C>)>>,
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handlers: HashMap::new(),
        }
    }
}

impl<C> EventBus<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, kind: EventKind, handler: F) -> Subscription
    where
        F: FnMut(&mut C, &Event) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.handlers
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        Subscription { kind, id }
    }

    /// Returns `false` when the subscription was already revoked.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let Some(handlers) = self.handlers.get_mut(&subscription.kind) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|(id, _)| *id != subscription.id);
        handlers.len() != before
    }

    /// Returns the number of handlers that ran.
    pub fn dispatch(&mut self, context: &mut C, event: &Event) -> usize {
        let Some(handlers) = self.handlers.get_mut(&event.kind()) else {
            return 0;
        };
        for (_, handler) in handlers.iter_mut() {
            handler(context, event);
        }
        handlers.len()
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }
}
