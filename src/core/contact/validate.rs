use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ContactForm, Field};

/// Minimum message length, counted in `char`s after trimming. An emoji
/// outside the BMP counts once, not as two UTF-16 units.
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Invalid fields and their errors. Valid fields are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0.get(&field).copied()
    }

    /// User-facing message for a field, if it is invalid.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn remove(&mut self, field: Field) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

pub fn validate(form: &ContactForm) -> ValidationErrors {
    let mut errors = BTreeMap::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, ValidationError::NameRequired);
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, ValidationError::EmailRequired);
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(Field::Email, ValidationError::InvalidEmail);
    }

    if form.subject.trim().is_empty() {
        errors.insert(Field::Subject, ValidationError::SubjectRequired);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, ValidationError::MessageRequired);
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(Field::Message, ValidationError::MessageTooShort);
    }

    ValidationErrors(errors)
}
