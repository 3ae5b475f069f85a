use url::Url;

use crate::dom::Document;
use crate::domain::Notification;

/// What the submission flow reads from and writes to the hosting form.
pub trait FormSurface {
    fn field_value(&self, name: &str) -> Option<String>;
    fn action(&self) -> Option<String>;
    fn method(&self) -> Option<String>;
    fn document_url(&self) -> Option<Url>;
    fn reset(&mut self);
}

/// Shows an outcome notification to the user.
pub trait Notifier {
    fn alert(&mut self, notification: &Notification);
}

/// The contact form of a headless [`Document`], addressed by its id.
pub struct DocumentForm<'a> {
    document: &'a mut Document,
    form_id: &'a str,
}

impl<'a> DocumentForm<'a> {
    /// `None` when the document has no form with that id.
    pub fn new(document: &'a mut Document, form_id: &'a str) -> Option<Self> {
        document.form(form_id)?;
        Some(Self { document, form_id })
    }
}

impl FormSurface for DocumentForm<'_> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.document
            .form(self.form_id)
            .and_then(|form| form.field(name))
            .map(String::from)
    }

    fn action(&self) -> Option<String> {
        self.document
            .form(self.form_id)
            .and_then(|form| form.action.clone())
    }

    fn method(&self) -> Option<String> {
        self.document
            .form(self.form_id)
            .and_then(|form| form.method.clone())
    }

    fn document_url(&self) -> Option<Url> {
        self.document.url().cloned()
    }

    fn reset(&mut self) {
        if let Some(form) = self.document.form_mut(self.form_id) {
            form.reset();
        }
    }
}

impl Notifier for DocumentForm<'_> {
    fn alert(&mut self, notification: &Notification) {
        self.document.push_alert(notification.as_ref());
    }
}
