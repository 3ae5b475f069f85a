use crate::configuration::PageSettings;
use crate::dom::{Document, NodeId};
use crate::domain::{SubmissionOutcome, ValidationError};
use crate::events::{Event, EventBus, EventKind, IntersectionEntry, Subscription, SubmitEvent};
use crate::listeners::{
    apply_header_style, scroll_to_section, FadeInObserver, MobileMenu, ObserverOptions,
    ScrollToTopButton, SubmissionHandler,
};
use crate::surface::DocumentForm;
use crate::transport::Transport;

/// A loaded page: the document with every enhancement attached.
pub struct Page<T> {
    document: Document,
    settings: PageSettings,
    bus: EventBus<Document>,
    subscriptions: Vec<Subscription>,
    submission_handler: SubmissionHandler<T>,
    mobile_menu: MobileMenu,
    scroll_to_top: ScrollToTopButton,
    fade_in_options: ObserverOptions,
}

impl<T: Transport> Page<T> {
    /// Wires every listener, as done once the document has loaded.
    #[tracing::instrument(name = "Loading page enhancements", skip_all)]
    pub fn load(mut document: Document, settings: PageSettings, transport: T) -> Self {
        let mut bus: EventBus<Document> = EventBus::new();
        let mut subscriptions = Vec::new();

        let header_class = settings.header_class.clone();
        let threshold = settings.header_scroll_threshold;
        subscriptions.push(bus.subscribe(EventKind::Scroll, move |document, _| {
            apply_header_style(document, &header_class, threshold)
        }));

        let fade_in_options = ObserverOptions::from(&settings);
        let mut fade_in = FadeInObserver::observe(
            &mut document,
            &settings.fade_in_classes,
            fade_in_options.clone(),
        );
        tracing::debug!("Observing {} elements for fade-in", fade_in.observed().len());
        subscriptions.push(bus.subscribe(EventKind::Intersection, move |document, event| {
            if let Event::Intersection(entries) = event {
                fade_in.on_intersection(document, entries);
            }
        }));

        let mobile_menu = MobileMenu::install(&mut document, &settings);
        let menu = mobile_menu.clone();
        subscriptions.push(bus.subscribe(EventKind::Click, move |document, event| {
            if event.target() == Some(menu.toggle_button()) {
                menu.toggle(document);
            }
        }));
        let menu = mobile_menu.clone();
        subscriptions.push(bus.subscribe(EventKind::Resize, move |document, _| {
            menu.check(document)
        }));
        mobile_menu.check(&mut document);

        let scroll_to_top =
            ScrollToTopButton::install(&mut document, settings.scroll_to_top_threshold);
        let button = scroll_to_top;
        subscriptions.push(bus.subscribe(EventKind::Scroll, move |document, _| {
            button.on_scroll(document)
        }));
        subscriptions.push(bus.subscribe(EventKind::Click, move |document, event| {
            if event.target() == Some(button.button()) {
                button.on_click(document);
            }
        }));
        subscriptions.push(bus.subscribe(EventKind::MouseEnter, move |document, event| {
            if event.target() == Some(button.button()) {
                button.on_hover(document, true);
            }
        }));
        subscriptions.push(bus.subscribe(EventKind::MouseLeave, move |document, event| {
            if event.target() == Some(button.button()) {
                button.on_hover(document, false);
            }
        }));

        if document.form(&settings.contact_form_id).is_none() {
            tracing::warn!(
                "No form with id {} found, submissions are not handled",
                settings.contact_form_id
            );
        }

        Self {
            document,
            settings,
            bus,
            subscriptions,
            submission_handler: SubmissionHandler::new(transport),
            mobile_menu,
            scroll_to_top,
            fade_in_options,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn mobile_menu_toggle(&self) -> NodeId {
        self.mobile_menu.toggle_button()
    }

    pub fn scroll_to_top_button(&self) -> NodeId {
        self.scroll_to_top.button()
    }

    pub fn fade_in_options(&self) -> &ObserverOptions {
        &self.fade_in_options
    }

    /// Returns the number of handlers that ran.
    pub fn dispatch(&mut self, event: &Event) -> usize {
        self.bus.dispatch(&mut self.document, event)
    }

    pub fn scroll_window(&mut self, scroll_y: f64) -> usize {
        self.document.window_mut().scroll_y = scroll_y;
        self.dispatch(&Event::Scroll)
    }

    pub fn resize_window(&mut self, inner_width: u32) -> usize {
        self.document.window_mut().inner_width = inner_width;
        self.dispatch(&Event::Resize)
    }

    pub fn click(&mut self, target: NodeId) -> usize {
        self.dispatch(&Event::Click { target })
    }

    pub fn hover(&mut self, target: NodeId, entered: bool) -> usize {
        let event = if entered {
            Event::MouseEnter { target }
        } else {
            Event::MouseLeave { target }
        };
        self.dispatch(&event)
    }

    pub fn report_intersections(&mut self, entries: Vec<IntersectionEntry>) -> usize {
        self.dispatch(&Event::Intersection(entries))
    }

    pub fn navigate_to(&mut self, section_id: &str) -> bool {
        scroll_to_section(&mut self.document, section_id)
    }

    /// Submits the contact form. `None` when the page has no contact form.
    pub async fn submit(&mut self) -> Option<Result<SubmissionOutcome, ValidationError>> {
        let mut form = DocumentForm::new(&mut self.document, &self.settings.contact_form_id)?;
        let mut event = SubmitEvent::new();
        Some(
            self.submission_handler
                .on_submit(&mut event, &mut form)
                .await,
        )
    }

    /// Revokes every listener attached by [`Page::load`]. Returns how many
    /// were still attached.
    pub fn detach(&mut self) -> usize {
        self.subscriptions
            .drain(..)
            .filter(|subscription| self.bus.unsubscribe(*subscription))
            .count()
    }
}
