use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .case_insensitive(true)
        .build()
        .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Accepts `local@domain.tld` shapes: no whitespace, exactly one `@`,
    /// and at least one dot after it.
    pub fn parse(s: String) -> Result<Self, String> {
        if EMAIL_PATTERN.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{s} is not a valid email"))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
