// src/formatting/extract.rs
//! Property value → display string.
//!
//! Every branch has a defined fallback: an absent property, an empty
//! payload or an unsupported type all yield the empty string.

use crate::constants::CHECKED_GLYPH;
use crate::model::{PropertyTypeValue, PropertyValue};
use crate::types::{DateValue, RichTextItem, SelectOption};
use serde_json::Value;

/// Projects a typed property onto the single line of text a table cell shows.
pub fn extract_property_value(property: Option<&PropertyValue>) -> String {
    use PropertyTypeValue::*;

    let Some(property) = property else {
        return String::new();
    };

    match &property.type_specific_value {
        Title { title } => first_plain_text(title),
        RichText { rich_text } => first_plain_text(rich_text),
        Number { number } => number.map(format_number).unwrap_or_default(),
        Select { select } => format_select(select.as_ref()),
        MultiSelect { multi_select } => format_multi_select(multi_select),
        Date { date } => format_date(date.as_ref()),
        Checkbox { checkbox } => format_checkbox(*checkbox),
        Url { url } => url.clone().unwrap_or_default(),
        Email { email } => email.clone().unwrap_or_default(),
        PhoneNumber { phone_number } => phone_number.clone().unwrap_or_default(),
        Unsupported { .. } => String::new(),
    }
}

/// Same projection for a raw JSON property, as found in an unparsed page.
pub fn extract_json_property_value(raw: &Value) -> String {
    if raw.is_null() {
        return String::new();
    }
    extract_property_value(Some(&PropertyValue::from_json(raw)))
}

fn first_plain_text(items: &[RichTextItem]) -> String {
    items
        .first()
        .map(|item| item.plain_text.clone())
        .unwrap_or_default()
}

/// Shortest round-trip decimal form: `42.0` prints as `42`, `3.5` as `3.5`.
fn format_number(number: f64) -> String {
    number.to_string()
}

fn format_select(select: Option<&SelectOption>) -> String {
    select.map(|opt| opt.name.clone()).unwrap_or_default()
}

fn format_multi_select(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|opt| opt.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_date(date: Option<&DateValue>) -> String {
    date.map(|d| d.start.clone()).unwrap_or_default()
}

fn format_checkbox(checked: bool) -> String {
    if checked {
        CHECKED_GLYPH.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn extract(raw: Value) -> String {
        extract_json_property_value(&raw)
    }

    #[test]
    fn text_properties_use_the_first_fragment() {
        assert_eq!(
            extract(json!({"type": "title", "title": [{"plain_text": "A"}, {"plain_text": "B"}]})),
            "A"
        );
        assert_eq!(
            extract(json!({"type": "rich_text", "rich_text": [{"plain_text": "note"}]})),
            "note"
        );
        assert_eq!(extract(json!({"type": "title", "title": []})), "");
        assert_eq!(extract(json!({"type": "rich_text"})), "");
    }

    #[test]
    fn numbers_print_without_trailing_zeroes() {
        assert_eq!(extract(json!({"type": "number", "number": 42})), "42");
        assert_eq!(extract(json!({"type": "number", "number": 3.5})), "3.5");
        assert_eq!(extract(json!({"type": "number", "number": 0})), "0");
        assert_eq!(extract(json!({"type": "number", "number": -12.25})), "-12.25");
        assert_eq!(extract(json!({"type": "number", "number": null})), "");
    }

    #[test]
    fn select_properties() {
        assert_eq!(
            extract(json!({"type": "select", "select": {"name": "Doing", "color": "blue"}})),
            "Doing"
        );
        assert_eq!(extract(json!({"type": "select", "select": null})), "");
        assert_eq!(
            extract(json!({"type": "multi_select", "multi_select": [{"name": "A"}, {"name": "B"}]})),
            "A, B"
        );
        assert_eq!(extract(json!({"type": "multi_select", "multi_select": []})), "");
    }

    #[test]
    fn date_uses_the_start() {
        assert_eq!(
            extract(json!({"type": "date", "date": {"start": "2024-05-01", "end": "2024-05-03"}})),
            "2024-05-01"
        );
        assert_eq!(extract(json!({"type": "date", "date": null})), "");
    }

    #[test]
    fn checkbox_renders_glyph_only_when_ticked() {
        assert_eq!(extract(json!({"type": "checkbox", "checkbox": true})), "✓");
        assert_eq!(extract(json!({"type": "checkbox", "checkbox": false})), "");
    }

    #[test]
    fn plain_string_properties() {
        assert_eq!(
            extract(json!({"type": "url", "url": "https://example.com"})),
            "https://example.com"
        );
        assert_eq!(
            extract(json!({"type": "email", "email": "me@example.com"})),
            "me@example.com"
        );
        assert_eq!(
            extract(json!({"type": "phone_number", "phone_number": "+81 3 1234"})),
            "+81 3 1234"
        );
        assert_eq!(extract(json!({"type": "url", "url": null})), "");
        assert_eq!(extract(json!({"type": "email"})), "");
    }

    #[test]
    fn absent_or_unknown_properties_are_empty() {
        assert_eq!(extract_property_value(None), "");
        assert_eq!(extract(Value::Null), "");
        assert_eq!(extract(json!({"type": "people", "people": [{"id": "u1"}]})), "");
        assert_eq!(extract(json!({"checkbox": true})), "");
        assert_eq!(extract(json!("not even an object")), "");
    }

    #[test]
    fn mismatched_payload_never_fails() {
        assert_eq!(extract(json!({"type": "checkbox", "checkbox": "yes"})), "");
        assert_eq!(extract(json!({"type": "title", "title": {"plain_text": "x"}})), "");
        assert_eq!(extract(json!({"type": "select", "select": ["A"]})), "");
    }
}
