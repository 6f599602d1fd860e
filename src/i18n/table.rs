//! Nested string lookup table for one language

use serde_json::{Map, Value};

use crate::error::LoadError;

/// Parsed locale document: nested objects whose leaves are strings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    root: Map<String, Value>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a locale document. The root must be a JSON object.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(root) => Ok(Self { root }),
            other => Err(LoadError::Parse(format!(
                "expected an object at the root, found {}",
                kind_of(&other)
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Resolve a dot-delimited key, e.g. `tokenInfo.fields.symbol`.
    ///
    /// Returns `None` if any segment is missing, an intermediate value is not
    /// an object, or the leaf is not a string.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut value = self.root.get(first)?;
        for segment in segments {
            value = value.as_object()?.get(segment)?;
        }
        value.as_str()
    }

    /// Resolve a key, echoing the key itself when it cannot be resolved
    pub fn lookup(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    /// Required keys this table cannot resolve, in the order given
    pub fn missing_keys<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|key| self.get(key).is_none())
            .collect()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table(json: &str) -> TranslationTable {
        TranslationTable::from_json(json).unwrap()
    }

    #[test]
    fn test_lookup_nested_hit() {
        let t = table(r#"{"a": {"b": {"c": "X"}}}"#);
        assert_eq!(t.lookup("a.b.c"), "X");
    }

    #[test]
    fn test_lookup_missing_leaf_echoes_key() {
        let t = table(r#"{"a": {"b": {}}}"#);
        assert_eq!(t.lookup("a.b.c"), "a.b.c");
    }

    #[test]
    fn test_lookup_empty_table_echoes_key() {
        assert_eq!(TranslationTable::new().lookup("a.b.c"), "a.b.c");
    }

    #[test]
    fn test_lookup_non_string_leaf_echoes_key() {
        let t = table(r#"{"a": {"b": 3, "c": ["x"], "d": {"e": "deep"}}}"#);
        assert_eq!(t.lookup("a.b"), "a.b");
        assert_eq!(t.lookup("a.c"), "a.c");
        // Intermediate objects are not strings either
        assert_eq!(t.lookup("a.d"), "a.d");
    }

    #[test]
    fn test_lookup_through_string_echoes_key() {
        let t = table(r#"{"tagline": "Happiness"}"#);
        assert_eq!(t.lookup("tagline"), "Happiness");
        assert_eq!(t.lookup("tagline.more"), "tagline.more");
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        assert!(matches!(
            TranslationTable::from_json("[1, 2]"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            TranslationTable::from_json("{not json"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_keys() {
        let t = table(r#"{"a": "x", "b": {"c": "y"}}"#);
        assert_eq!(t.missing_keys(&["a", "b.c", "b.d", "z"]), vec!["b.d", "z"]);
    }

    proptest! {
        #[test]
        fn prop_lookup_on_empty_table_is_identity(key in "[a-zA-Z.]{0,24}") {
            prop_assert_eq!(TranslationTable::new().lookup(&key), key);
        }

        #[test]
        fn prop_lookup_resolves_or_echoes(key in "[abc]{1,3}(\\.[abc]{1,3}){0,3}") {
            let t = table(r#"{"a": {"b": {"c": "X"}, "bb": "Y"}, "c": "Z"}"#);
            let out = t.lookup(&key);
            prop_assert!(out == key || ["X", "Y", "Z"].contains(&out.as_str()));
        }
    }
}
