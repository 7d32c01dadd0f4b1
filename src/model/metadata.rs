//! Descriptive metadata of a digitized object.
//!
//! Metadata arrives from the METS/MODS layer as a flat, ordered mapping of
//! field names to either a single text value or a list of values. Field
//! order is kept because identifier-like fields are emitted in input order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A metadata value: one text or an ordered list of texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Text(String),
    List(Vec<String>),
}

impl MetaValue {
    /// True for an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            MetaValue::Text(text) => text.is_empty(),
            MetaValue::List(items) => items.is_empty(),
        }
    }

    /// The first value (the text itself for single values).
    pub fn first(&self) -> Option<&str> {
        match self {
            MetaValue::Text(text) => Some(text.as_str()),
            MetaValue::List(items) => items.first().map(String::as_str),
        }
    }

    /// Iterate over all values in order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            MetaValue::Text(text) => std::slice::from_ref(text),
            MetaValue::List(items) => items,
        };
        items.iter().map(String::as_str)
    }
}

/// Lists render as their values joined with `"; "`.
impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Text(text) => f.write_str(text),
            MetaValue::List(items) => f.write_str(&items.join("; ")),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Text(value)
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(value: Vec<String>) -> Self {
        MetaValue::List(value)
    }
}

impl<const N: usize> From<[&str; N]> for MetaValue {
    fn from(value: [&str; N]) -> Self {
        MetaValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Ordered field mapping for one described object.
///
/// Setting an existing key replaces its value in place, so the position of
/// the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: Vec<(String, MetaValue)>,
}

impl Metadata {
    /// Metadata with a single primary title.
    pub fn new(title: impl Into<String>) -> Self {
        Self::default().with_field("title", MetaValue::List(vec![title.into()]))
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Look up a field, treating empty values as absent.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .filter(|v| !v.is_empty())
    }

    /// First value of a field as text.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetaValue::first)
    }

    /// The primary title, or `""` when the record carries none.
    pub fn title(&self) -> &str {
        self.text("title").unwrap_or_default()
    }

    pub fn creators(&self) -> impl Iterator<Item = &str> {
        self.get("creator").into_iter().flat_map(MetaValue::values)
    }

    /// Iterate over all fields in input order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MetadataVisitor;

        impl<'de> Visitor<'de> for MetadataVisitor {
            type Value = Metadata;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to strings or string lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Metadata, A::Error> {
                let mut metadata = Metadata::default();
                while let Some((key, value)) = access.next_entry::<String, Option<MetaValue>>()? {
                    // null means the field is absent
                    if let Some(value) = value {
                        metadata.set(key, value);
                    }
                }
                Ok(metadata)
            }
        }

        deserializer.deserialize_map(MetadataVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_absent() {
        let meta = Metadata::new("Faust")
            .with_field("creator", MetaValue::List(Vec::new()))
            .with_field("pub_date", "");
        assert!(meta.get("creator").is_none());
        assert!(meta.get("pub_date").is_none());
        assert_eq!(meta.len(), 3);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut meta = Metadata::new("A").with_field("language", "ger");
        meta.set("title", ["B", "C"]);
        let keys: Vec<_> = meta.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["title", "language"]);
        assert_eq!(meta.title(), "B");
    }

    #[test]
    fn deserialize_keeps_input_order() {
        let meta: Metadata = serde_json::from_str(
            r#"{"zdbIdentifier": "1", "title": ["Faust"], "pub_date": "1808", "logo": null}"#,
        )
        .unwrap();
        let keys: Vec<_> = meta.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zdbIdentifier", "title", "pub_date"]);
        assert_eq!(meta.get("pub_date"), Some(&MetaValue::Text("1808".into())));
    }

    #[test]
    fn list_display_joins_values() {
        let value = MetaValue::from(["Leipzig", "Berlin"]);
        assert_eq!(value.to_string(), "Leipzig; Berlin");
        assert_eq!(MetaValue::from("x").values().collect::<Vec<_>>(), ["x"]);
    }

    #[test]
    fn missing_title_is_empty() {
        assert_eq!(Metadata::default().title(), "");
    }
}
