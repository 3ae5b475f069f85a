use reqwest::Method;
use url::Url;

use crate::utils::error_chain_fmt;

/// Where and how a contact submission is sent, taken from the form's
/// declared `action` and `method` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTarget {
    pub url: Url,
    pub method: Method,
}

#[derive(thiserror::Error)]
pub enum TargetError {
    #[error("The form has no action and the document has no URL")]
    MissingAction,
    #[error("{0} is not a valid form action")]
    InvalidAction(String, #[source] url::ParseError),
    #[error("{0} is not a valid HTTP method")]
    InvalidMethod(String),
}

impl std::fmt::Debug for TargetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SubmissionTarget {
    /// An absent action posts back to the document itself; a relative one is
    /// resolved against the document URL. The method defaults to `POST`.
    pub fn resolve(
        action: Option<&str>,
        method: Option<&str>,
        document_url: Option<&Url>,
    ) -> Result<Self, TargetError> {
        let url = match (action.filter(|a| !a.is_empty()), document_url) {
            (Some(action), Some(base)) => base
                .join(action)
                .map_err(|e| TargetError::InvalidAction(action.to_string(), e))?,
            (Some(action), None) => Url::parse(action)
                .map_err(|e| TargetError::InvalidAction(action.to_string(), e))?,
            (None, Some(base)) => base.clone(),
            (None, None) => return Err(TargetError::MissingAction),
        };

        let method = method
            .filter(|m| !m.is_empty())
            .unwrap_or("POST")
            .to_uppercase();
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| TargetError::InvalidMethod(method.clone()))?;

        Ok(Self { url, method })
    }

    /// `GET` and `HEAD` requests cannot carry a body.
    pub fn fields_in_query(&self) -> bool {
        self.method == Method::GET || self.method == Method::HEAD
    }
}
