use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Everything `encodeURIComponent` escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    MissingField(ContactField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// A contact form submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = required(name, ContactField::Name)?;
        let email = required(email, ContactField::Email)?;
        let message = required(message, ContactField::Message)?;
        if !is_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject(&self) -> String {
        format!("Portfolio Inquiry from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!("{}\n\n— {} ({})", self.message, self.name, self.email)
    }

    /// `mailto:` link that opens the visitor's mail client with the message filled in.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            utf8_percent_encode(&self.subject(), URI_COMPONENT),
            utf8_percent_encode(&self.body(), URI_COMPONENT),
        )
    }
}

fn required(value: &str, field: ContactField) -> Result<&str, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(value)
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_message_is_trimmed() {
        let msg = ContactMessage::new("  Ada Lovelace ", "ada@example.com\n", " Hello ").unwrap();
        assert_eq!(msg.name(), "Ada Lovelace");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "Hello");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            ContactMessage::new("", "ada@example.com", "Hi"),
            Err(ContactError::MissingField(ContactField::Name))
        );
        assert_eq!(
            ContactMessage::new("Ada", "   ", "Hi"),
            Err(ContactError::MissingField(ContactField::Email))
        );
        assert_eq!(
            ContactMessage::new("Ada", "ada@example.com", "\n\t"),
            Err(ContactError::MissingField(ContactField::Message))
        );
        assert_eq!(
            ContactError::MissingField(ContactField::Email).to_string(),
            "Please fill in your email"
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "ada",
            "@example.com",
            "ada@",
            "ada@example",
            "ada@@example.com",
            "ada@ex@ample.com",
            "ada@.com",
            "ada@example.",
            "a da@example.com",
        ] {
            assert_eq!(
                ContactMessage::new("Ada", email, "Hi"),
                Err(ContactError::InvalidEmail),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn test_mailto_matches_encode_uri_component() {
        let msg = ContactMessage::new("Ada Lovelace", "ada@example.com", "Hi there!").unwrap();
        assert_eq!(
            msg.mailto("me@example.com"),
            "mailto:me@example.com\
             ?subject=Portfolio%20Inquiry%20from%20Ada%20Lovelace\
             &body=Hi%20there!%0A%0A%E2%80%94%20Ada%20Lovelace%20(ada%40example.com)"
        );
    }

    #[test]
    fn test_mailto_escapes_query_delimiters() {
        let msg = ContactMessage::new("R&D", "rd@example.com", "a=b?c#d/e+f").unwrap();
        let href = msg.mailto("me@example.com");
        assert!(href.contains("subject=Portfolio%20Inquiry%20from%20R%26D&body="));
        assert!(href.contains("a%3Db%3Fc%23d%2Fe%2Bf"));
        assert_eq!(href.matches('&').count(), 1);
    }
}
