// src/domain/product/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::shared::value_objects::bounded_text;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("product id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub const MAX_CHARS: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "name", Some(Self::MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAbout(String);

impl ProductAbout {
    pub const MAX_CHARS: usize = 65_535;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        bounded_text(value.into(), "about", Some(Self::MAX_CHARS)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Price in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(i64);

impl Price {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            Err(DomainError::Validation("price must be at least 0".into()))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.0
    }
}
