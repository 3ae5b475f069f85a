use crate::domain::ContactEmail;

/// Raw values of the contact form, as read at the moment of submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: ContactEmail,
    pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ContactSubmission {
    /// Presence of all three fields is checked before the email format.
    pub fn parse(fields: ContactFields) -> Result<Self, ValidationError> {
        let name = present(fields.name);
        let email = present(fields.email);
        let message = present(fields.message);

        match (name, email, message) {
            (Some(name), Some(email), Some(message)) => {
                let email =
                    ContactEmail::parse(email).map_err(ValidationError::InvalidEmail)?;
                Ok(Self {
                    name,
                    email,
                    message,
                })
            }
            (name, email, message) => {
                let missing = [("name", name), ("email", email), ("message", message)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| field)
                    .collect();
                Err(ValidationError::MissingFields(missing))
            }
        }
    }

    /// Field-value pairs in form order.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_ref()),
            ("message", self.message.as_str()),
        ]
    }
}

impl TryFrom<ContactFields> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(value: ContactFields) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
