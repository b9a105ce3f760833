//! Presentation helpers for Notion records.

mod extract;

pub use extract::{extract_json_property_value, extract_property_value};
