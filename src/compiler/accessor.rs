//! Typed field accessors
//!
//! An accessor extracts one field from an entity. The same accessor serves
//! filtering (fed to a comparison) and sorting (used as an ordering key).

use std::collections::BTreeMap;
use std::fmt;

use super::value::{FieldValue, ValueKind};

enum Source<E> {
    /// Direct member read
    Member(fn(&E) -> FieldValue),
    /// Lookup in a free-form option map; a missing key reads as null
    OptionEntry {
        key: String,
        options: fn(&E) -> &BTreeMap<String, String>,
    },
}

/// Reads one declared-type field of `E`
pub struct Accessor<E> {
    name: String,
    kind: ValueKind,
    source: Source<E>,
}

impl<E> Accessor<E> {
    /// Accessor for a first-class member
    pub fn member(name: &'static str, kind: ValueKind, get: fn(&E) -> FieldValue) -> Self {
        Self {
            name: name.to_string(),
            kind,
            source: Source::Member(get),
        }
    }

    /// Accessor for an entry of a string map, keyed at runtime
    ///
    /// The key is not checked here; a missing key is an absent value at
    /// evaluation time.
    pub fn option_entry(
        key: impl Into<String>,
        options: fn(&E) -> &BTreeMap<String, String>,
    ) -> Self {
        let key = key.into();
        Self {
            name: format!("options[{:?}]", key),
            kind: ValueKind::String,
            source: Source::OptionEntry { key, options },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Reads the field from `entity`
    pub fn get(&self, entity: &E) -> FieldValue {
        match &self.source {
            Source::Member(get) => get(entity),
            Source::OptionEntry { key, options } => options(entity)
                .get(key)
                .map_or(FieldValue::Null, |value| FieldValue::String(value.clone())),
        }
    }
}

impl<E> Clone for Source<E> {
    fn clone(&self) -> Self {
        match self {
            Source::Member(get) => Source::Member(*get),
            Source::OptionEntry { key, options } => Source::OptionEntry {
                key: key.clone(),
                options: *options,
            },
        }
    }
}

impl<E> Clone for Accessor<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            source: self.source.clone(),
        }
    }
}

impl<E> fmt::Debug for Accessor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        label: String,
        options: BTreeMap<String, String>,
    }

    fn item_options(item: &Item) -> &BTreeMap<String, String> {
        &item.options
    }

    fn item() -> Item {
        let mut options = BTreeMap::new();
        options.insert("key1".to_string(), "value1".to_string());
        Item {
            label: "first".into(),
            options,
        }
    }

    #[test]
    fn test_member_accessor() {
        let accessor = Accessor::<Item>::member("label", ValueKind::String, |item| {
            FieldValue::String(item.label.clone())
        });
        assert_eq!(accessor.get(&item()), FieldValue::from("first"));
        assert_eq!(accessor.name(), "label");
        assert_eq!(accessor.kind(), ValueKind::String);
    }

    #[test]
    fn test_option_entry_accessor() {
        let present = Accessor::<Item>::option_entry("key1", item_options);
        assert_eq!(present.get(&item()), FieldValue::from("value1"));

        let missing = Accessor::<Item>::option_entry("key2", item_options);
        assert_eq!(missing.get(&item()), FieldValue::Null);
        assert_eq!(missing.name(), "options[\"key2\"]");
    }
}
