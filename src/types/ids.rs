use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Strong typing for IDs with phantom types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatabaseMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type DatabaseId = Id<DatabaseMarker>;

impl<T> Id<T> {
    /// Accepts any identifier that fits in a single URL path segment.
    ///
    /// Notion accepts both the dashed and the compact UUID form, and the relay
    /// forwards whatever the caller sent, so only emptiness and segment
    /// separators are rejected here.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let value = input.trim();

        if value.is_empty() {
            return Err(ValidationError::EmptyField("id"));
        }

        if let Some(bad) = value.chars().find(|c| matches!(c, '/' | '?' | '#')) {
            return Err(ValidationError::InvalidId(format!(
                "'{}' contains the reserved character '{}'",
                value, bad
            )));
        }

        Ok(Self::from_normalized(value.to_string()))
    }

    /// Create an ID from a string the upstream API already produced
    pub(crate) fn from_normalized(value: String) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    /// Get the ID as a string reference
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_normalized(value))
    }
}
