// src/domain/shared/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Trims nothing; rejects blank input and input longer than `max_chars` characters.
pub(crate) fn bounded_text(
    value: String,
    label: &str,
    max_chars: Option<usize>,
) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{label} cannot be empty")));
    }
    if let Some(max) = max_chars {
        if value.chars().count() > max {
            return Err(DomainError::Validation(format!(
                "{label} may not be greater than {max} characters"
            )));
        }
    }
    Ok(value)
}

/// URL-safe identifier derived from a display title. Not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let valid = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !valid {
            return Err(DomainError::Validation(format!(
                "slug contains invalid characters: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// HTTPS link to a hosted cover image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverUrl(String);

impl CoverUrl {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let host = value.strip_prefix("https://").unwrap_or_default();
        if host.is_empty() || host.starts_with('/') || value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(format!(
                "cover url must be an absolute https url: {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CoverUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form required text without a length cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongText(String);

impl LongText {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        Self::labelled(value, "text")
    }

    /// Like `new`, naming the field in the error message.
    pub fn labelled(value: impl Into<String>, label: &str) -> DomainResult<Self> {
        bounded_text(value.into(), label, None).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
