//! Typed views of the records the relay passes through.
//!
//! The relay handlers never deserialize these; they forward raw JSON. The
//! types exist for the client library and the property extractor.

mod property_value;

pub use property_value::{PropertyTypeValue, PropertyValue};

use crate::formatting::extract_property_value;
use crate::types::{DatabaseId, PageId, RichTextItem};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A Notion page: identity, timestamps and its named properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

impl Page {
    /// Display string of a named property; empty when the page lacks it.
    pub fn property_text(&self, name: &str) -> String {
        extract_property_value(self.properties.get(name))
    }

    /// Display string of the page's title property, wherever it is named.
    pub fn title(&self) -> String {
        self.properties
            .values()
            .find(|value| matches!(value.type_specific_value, PropertyTypeValue::Title { .. }))
            .map(|value| extract_property_value(Some(value)))
            .unwrap_or_default()
    }
}

/// A database's schema as returned by the retrieve-database endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub id: DatabaseId,
    #[serde(default)]
    pub title: Vec<RichTextItem>,
    #[serde(default)]
    pub properties: IndexMap<String, DatabaseProperty>,
}

impl Database {
    /// The database title with all rich-text fragments concatenated.
    pub fn display_title(&self) -> String {
        self.title
            .iter()
            .map(|item| item.plain_text.as_str())
            .collect()
    }
}

/// Schema entry describing one column of a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseProperty {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
}
