use crate::types::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Property value — wraps a typed value with its property ID.
///
/// Deserialization is total: a payload that is missing or does not match its
/// `type` tag becomes the empty value of that variant, and an unknown tag
/// becomes [`PropertyTypeValue::Unsupported`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue {
    pub id: String,
    pub type_specific_value: PropertyTypeValue,
}

/// The specific value types for properties, one variant per `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyTypeValue {
    Title { title: Vec<RichTextItem> },
    RichText { rich_text: Vec<RichTextItem> },
    Number { number: Option<f64> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Date { date: Option<DateValue> },
    Checkbox { checkbox: bool },
    Url { url: Option<String> },
    Email { email: Option<String> },
    PhoneNumber { phone_number: Option<String> },
    /// Any tag without a dedicated variant (formula, people, status, ...).
    Unsupported { kind: String },
}

impl PropertyValue {
    pub fn new(id: impl Into<String>, type_specific_value: PropertyTypeValue) -> Self {
        Self {
            id: id.into(),
            type_specific_value,
        }
    }

    /// Returns the Notion API type name for this property value.
    pub fn type_name(&self) -> &str {
        match &self.type_specific_value {
            PropertyTypeValue::Title { .. } => "title",
            PropertyTypeValue::RichText { .. } => "rich_text",
            PropertyTypeValue::Number { .. } => "number",
            PropertyTypeValue::Select { .. } => "select",
            PropertyTypeValue::MultiSelect { .. } => "multi_select",
            PropertyTypeValue::Date { .. } => "date",
            PropertyTypeValue::Checkbox { .. } => "checkbox",
            PropertyTypeValue::Url { .. } => "url",
            PropertyTypeValue::Email { .. } => "email",
            PropertyTypeValue::PhoneNumber { .. } => "phone_number",
            PropertyTypeValue::Unsupported { kind } => kind,
        }
    }

    /// Builds a property from raw API JSON, degrading instead of failing.
    pub fn from_json(raw: &Value) -> Self {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let kind = raw.get("type").and_then(Value::as_str).unwrap_or_default();
        let payload = raw.get(kind);

        use PropertyTypeValue::*;
        let type_specific_value = match kind {
            "title" => Title {
                title: decode_or_default(payload),
            },
            "rich_text" => RichText {
                rich_text: decode_or_default(payload),
            },
            "number" => Number {
                number: decode_or_default(payload),
            },
            "select" => Select {
                select: decode_or_default(payload),
            },
            "multi_select" => MultiSelect {
                multi_select: decode_or_default(payload),
            },
            "date" => Date {
                date: decode_or_default(payload),
            },
            "checkbox" => Checkbox {
                checkbox: decode_or_default(payload),
            },
            "url" => Url {
                url: decode_or_default(payload),
            },
            "email" => Email {
                email: decode_or_default(payload),
            },
            "phone_number" => PhoneNumber {
                phone_number: decode_or_default(payload),
            },
            other => {
                log::trace!("Property '{}' has unsupported type '{}'", id, other);
                Unsupported {
                    kind: other.to_string(),
                }
            }
        };

        Self {
            id,
            type_specific_value,
        }
    }

    /// Renders the property back into the API's `{id, type, <type>: payload}` shape.
    pub fn to_json(&self) -> Value {
        use PropertyTypeValue::*;
        let payload = match &self.type_specific_value {
            Title { title } => serde_json::to_value(title),
            RichText { rich_text } => serde_json::to_value(rich_text),
            Number { number } => serde_json::to_value(number),
            Select { select } => serde_json::to_value(select),
            MultiSelect { multi_select } => serde_json::to_value(multi_select),
            Date { date } => serde_json::to_value(date),
            Checkbox { checkbox } => serde_json::to_value(checkbox),
            Url { url } => serde_json::to_value(url),
            Email { email } => serde_json::to_value(email),
            PhoneNumber { phone_number } => serde_json::to_value(phone_number),
            Unsupported { .. } => Ok(Value::Null),
        };

        let mut object = Map::new();
        object.insert("id".to_string(), Value::String(self.id.clone()));
        object.insert(
            "type".to_string(),
            Value::String(self.type_name().to_string()),
        );
        if !matches!(self.type_specific_value, Unsupported { .. }) {
            object.insert(
                self.type_name().to_string(),
                payload.unwrap_or(Value::Null),
            );
        }
        Value::Object(object)
    }
}

/// Decodes a payload, falling back to the type's default on absence or mismatch.
fn decode_or_default<T: DeserializeOwned + Default>(payload: Option<&Value>) -> T {
    payload
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&raw))
    }
}

impl Serialize for PropertyValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn parses_each_supported_tag() {
        let title = PropertyValue::from_json(&json!({
            "id": "title",
            "type": "title",
            "title": [{"plain_text": "Hello", "href": null}]
        }));
        assert_eq!(
            title.type_specific_value,
            PropertyTypeValue::Title {
                title: vec![RichTextItem::plain_text("Hello")]
            }
        );

        let number = PropertyValue::from_json(&json!({"id": "n", "type": "number", "number": 5}));
        assert_eq!(
            number.type_specific_value,
            PropertyTypeValue::Number { number: Some(5.0) }
        );

        let select = PropertyValue::from_json(&json!({
            "id": "s",
            "type": "select",
            "select": {"id": "opt", "name": "In Progress", "color": "blue"}
        }));
        assert_eq!(
            select.type_specific_value,
            PropertyTypeValue::Select {
                select: Some(SelectOption {
                    id: Some("opt".to_string()),
                    name: "In Progress".to_string(),
                    color: Some("blue".to_string()),
                })
            }
        );

        let date = PropertyValue::from_json(&json!({
            "id": "d",
            "type": "date",
            "date": {"start": "2024-03-01T10:00:00.000+09:00", "end": null}
        }));
        match date.type_specific_value {
            PropertyTypeValue::Date { date: Some(d) } => {
                assert_eq!(d.start, "2024-03-01T10:00:00.000+09:00");
                assert_eq!(d.end, None);
            }
            other => panic!("expected date, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_payload_degrades_to_empty_variant() {
        let number = PropertyValue::from_json(&json!({"type": "number", "number": "forty-two"}));
        assert_eq!(
            number.type_specific_value,
            PropertyTypeValue::Number { number: None }
        );

        let checkbox = PropertyValue::from_json(&json!({"type": "checkbox"}));
        assert_eq!(
            checkbox.type_specific_value,
            PropertyTypeValue::Checkbox { checkbox: false }
        );

        let multi = PropertyValue::from_json(&json!({"type": "multi_select", "multi_select": null}));
        assert_eq!(
            multi.type_specific_value,
            PropertyTypeValue::MultiSelect {
                multi_select: vec![]
            }
        );
    }

    #[test]
    fn unknown_or_missing_tag_is_unsupported() {
        let formula = PropertyValue::from_json(&json!({
            "id": "f",
            "type": "formula",
            "formula": {"type": "string", "string": "x"}
        }));
        assert_eq!(formula.type_name(), "formula");
        assert!(matches!(
            formula.type_specific_value,
            PropertyTypeValue::Unsupported { .. }
        ));

        let untagged = PropertyValue::from_json(&json!({"id": "x"}));
        assert_eq!(
            untagged.type_specific_value,
            PropertyTypeValue::Unsupported {
                kind: String::new()
            }
        );

        let not_an_object = PropertyValue::from_json(&json!(42));
        assert_eq!(not_an_object.id, "");
    }

    #[test]
    fn serializes_back_to_api_shape() {
        let value = PropertyValue::new(
            "e",
            PropertyTypeValue::Email {
                email: Some("a@example.com".to_string()),
            },
        );
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"id": "e", "type": "email", "email": "a@example.com"})
        );

        let parsed: PropertyValue = serde_json::from_value(value.to_json()).unwrap();
        assert_eq!(parsed, value);
    }
}
