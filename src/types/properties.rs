//! Payload shapes that appear inside Notion property values.
//!
//! Every field the relay does not strictly need is optional or defaulted,
//! so a partially populated payload still deserializes.

use serde::{Deserialize, Serialize};

/// One fragment of a rich-text sequence. Only the rendered text is kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RichTextItem {
    #[serde(default)]
    pub plain_text: String,
}

impl RichTextItem {
    /// Create a fragment carrying only plain text.
    pub fn plain_text(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
        }
    }
}

/// Select option
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Date value with optional end date.
///
/// `start` stays a string: Notion sends either a date or a full timestamp and
/// the extractor shows it exactly as received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}
