use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    ContactFields, ContactSubmission, Notification, SubmissionOutcome, SubmissionTarget,
    ValidationError,
};
use crate::events::SubmitEvent;
use crate::surface::{FormSurface, Notifier};
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Validates the contact form on submit and sends it through a [`Transport`].
pub struct SubmissionHandler<T> {
    transport: T,
}

impl<T: Transport> SubmissionHandler<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Runs one submission attempt. Every path alerts the user exactly once;
    /// only a successful attempt resets the form.
    #[tracing::instrument(
        name = "Submitting the contact form",
        skip(self, event, surface),
        fields(
            attempt_id = %Uuid::new_v4(),
            contact_email = tracing::field::Empty,
        )
    )]
    pub async fn on_submit<S>(
        &self,
        event: &mut SubmitEvent,
        surface: &mut S,
    ) -> Result<SubmissionOutcome, ValidationError>
    where
        S: FormSurface + Notifier,
    {
        event.prevent_default();

        let fields = ContactFields {
            name: surface.field_value("name"),
            email: surface.field_value("email"),
            message: surface.field_value("message"),
        };
        let submission: ContactSubmission = match fields.try_into() {
            Ok(submission) => submission,
            Err(e) => {
                tracing::info!("Form validation failed: {}", e);
                surface.alert(&Notification::from(&e));
                return Err(e);
            }
        };
        tracing::Span::current().record(
            "contact_email",
            tracing::field::display(&submission.email),
        );

        let action = surface.action();
        let method = surface.method();
        let document_url = surface.document_url();
        let outcome = match SubmissionTarget::resolve(
            action.as_deref(),
            method.as_deref(),
            document_url.as_ref(),
        ) {
            Ok(target) => {
                tracing::info!(
                    "Submitting form to: {} using method: {}",
                    target.url,
                    target.method
                );
                self.dispatch(&submission, &target).await
            }
            Err(e) => {
                tracing::error!("Form submission target is unusable: {:?}", e);
                SubmissionOutcome::NetworkError
            }
        };

        tracing::info!(outcome = %outcome, "Contact submission attempt finished");
        surface.alert(&outcome.notification());
        if outcome.is_success() {
            surface.reset();
        }

        Ok(outcome)
    }

    /// Sends exactly one request and classifies how it ended. Never retries.
    #[tracing::instrument(
        name = "Dispatching a contact submission",
        skip(self, submission, target),
        fields(url = %target.url, method = %target.method)
    )]
    pub async fn dispatch(
        &self,
        submission: &ContactSubmission,
        target: &SubmissionTarget,
    ) -> SubmissionOutcome {
        let request = TransportRequest {
            method: target.method.clone(),
            url: target.url.clone(),
            fields: submission
                .fields()
                .into_iter()
                .map(|(field, value)| (field, value.to_string()))
                .collect(),
            fields_in_query: target.fields_in_query(),
        };

        match self.transport.send(request).await {
            Ok(response) => {
                tracing::info!("Form submission response status: {}", response.status);
                classify(response)
            }
            Err(e) => {
                tracing::error!("Form submission network error: {:?}", e);
                SubmissionOutcome::NetworkError
            }
        }
    }
}

fn classify(response: TransportResponse) -> SubmissionOutcome {
    if response.status.is_success() {
        tracing::info!("Form submitted successfully");
        return SubmissionOutcome::Success;
    }

    let outcome = match serde_json::from_slice::<Value>(&response.body) {
        Ok(body) => {
            tracing::error!("Form submission server error: {}", body);
            server_error(&body)
        }
        Err(_) => None,
    };
    outcome.unwrap_or_else(|| {
        tracing::error!("Form submission error: Unable to parse error response");
        SubmissionOutcome::ParseError
    })
}

/// `None` when the body cannot be read as an error report: a `null` body, a
/// non-list `errors` value, or a `null` entry.
fn server_error(body: &Value) -> Option<SubmissionOutcome> {
    if body.is_null() {
        return None;
    }
    let errors = match body.get("errors") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => {
            return Some(SubmissionOutcome::ServerError(None))
        }
        Some(Value::String(s)) if s.is_empty() => {
            return Some(SubmissionOutcome::ServerError(None))
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
            return Some(SubmissionOutcome::ServerError(None))
        }
        Some(Value::Array(errors)) => errors,
        Some(_) => return None,
    };

    let messages = errors
        .iter()
        .map(|error| match error {
            Value::Null => None,
            error => Some(match error.get("message") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(message)) => message.clone(),
                Some(other) => other.to_string(),
            }),
        })
        .collect::<Option<Vec<_>>>()?;
    Some(SubmissionOutcome::ServerError(Some(messages)))
}
