// src/domain/career/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::value_objects::bounded_text;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CareerId(pub i64);

impl CareerId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("career id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CareerId> for i64 {
    fn from(value: CareerId) -> Self {
        value.0
    }
}

impl fmt::Display for CareerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerTitle(String);

impl CareerTitle {
    pub const MAX_CHARS: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "title", Some(Self::MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CareerTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
