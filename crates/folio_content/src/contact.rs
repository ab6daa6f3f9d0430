//! Contact form
//!
//! The page has no backend: submitting the form composes a `mailto:` link the
//! renderer hands to the platform mail client.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ContentError, Result};

/// Loose address check: a non-empty local part and domain around one `@`
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Percent-encode everything outside the RFC 3986 unreserved set
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// All fields are required and the sender address must look like one
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContentError::MissingField(*field));
        }
        if !is_valid_email(&self.email) {
            return Err(ContentError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Compose the `mailto:` link for this message
    pub fn mailto(&self, recipient: &str) -> Result<String> {
        self.validate()?;
        if !is_valid_email(recipient) {
            return Err(ContentError::InvalidEmail(recipient.to_string()));
        }

        let body = format!(
            "{}\n\nFrom: {} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient.trim(),
            percent_encode(self.subject.trim()),
            percent_encode(&body)
        ))
    }

    /// Build the link and clear the form
    ///
    /// On a validation error the form keeps its contents so the visitor can
    /// fix them.
    pub fn submit(&mut self, recipient: &str) -> Result<String> {
        let link = self.mailto(recipient)?;
        debug!(recipient, "contact form submitted");
        *self = Self::default();
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::new("Grace Hopper", "grace@navy.mil", "Hello there", "Let's talk")
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email(" someone@example.com "));
        assert!(!is_valid_email("someone"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("someone@"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("some one@example.com"));
    }

    #[test]
    fn test_percent_encoding() {
        assert_eq!(percent_encode("abc-._~09"), "abc-._~09");
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_encode("line\nbreak"), "line%0Abreak");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn test_all_fields_required() {
        let mut form = filled();
        form.subject = "  ".into();
        assert!(matches!(
            form.validate(),
            Err(ContentError::MissingField("subject"))
        ));
        assert!(matches!(
            ContactForm::default().validate(),
            Err(ContentError::MissingField("name"))
        ));
    }

    #[test]
    fn test_sender_email_checked() {
        let mut form = filled();
        form.email = "grace".into();
        assert!(matches!(form.validate(), Err(ContentError::InvalidEmail(_))));
    }

    #[test]
    fn test_mailto_link() {
        let link = filled().mailto("me@example.com").unwrap();
        assert_eq!(
            link,
            "mailto:me@example.com?subject=Hello%20there\
             &body=Let%27s%20talk%0A%0AFrom%3A%20Grace%20Hopper%20%3Cgrace%40navy.mil%3E"
        );
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = filled();
        let link = form.submit("me@example.com").unwrap();
        assert!(link.starts_with("mailto:me@example.com?"));
        assert!(form.is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_input() {
        let mut form = filled();
        form.message.clear();
        assert!(form.submit("me@example.com").is_err());
        assert_eq!(form.name, "Grace Hopper");

        let mut form = filled();
        assert!(matches!(
            form.submit("not-an-address"),
            Err(ContentError::InvalidEmail(_))
        ));
        assert!(!form.is_empty());
    }
}
