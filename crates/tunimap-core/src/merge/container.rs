// crates/tunimap-core/src/merge/container.rs
//
// Source exports come in a few wrappers:
//   [ ... ]                      top-level array
//   { "data": [ ... ] }          API dumps
//   { "results": [ ... ] }       paged API dumps
//   { "id1": {...}, "id2": ... } keyed objects (the values are the items)
// The first shape that matches wins, in that order. Keyed objects yield their
// values in record key order (index keys first).

use serde_json::Value;

use crate::error::{MergeError, Result};
use crate::record::key_rank;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    Array,
    Data,
    Results,
    ObjectValues,
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Array => write!(f, "array"),
            Self::Data => write!(f, "data"),
            Self::Results => write!(f, "results"),
            Self::ObjectValues => write!(f, "object_values"),
        }
    }
}

const NESTED_KEYS: [(&str, Container); 2] =
    [("data", Container::Data), ("results", Container::Results)];

/// Pull the item sequence out of a parsed source document.
///
/// `data`/`results` are only taken when they hold an array. A scalar document
/// has no items and is an error.
pub fn unwrap_items(doc: Value) -> Result<(Vec<Value>, Container)> {
    match doc {
        Value::Array(items) => Ok((items, Container::Array)),
        Value::Object(mut map) => {
            for (key, shape) in NESTED_KEYS {
                if matches!(map.get(key), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = map.remove(key) {
                        return Ok((items, shape));
                    }
                }
            }
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by_key(|(k, _)| key_rank(k));
            let items = entries.into_iter().map(|(_, v)| v).collect();
            Ok((items, Container::ObjectValues))
        }
        other => Err(MergeError::UnsupportedShape(format!(
            "top-level {} is not a collection",
            json_kind(&other)
        ))),
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_in_order() {
        let (items, shape) = unwrap_items(json!([1, 2])).unwrap();
        assert_eq!((items.len(), shape), (2, Container::Array));

        let (items, shape) = unwrap_items(json!({"data": [1], "results": [1, 2]})).unwrap();
        assert_eq!((items.len(), shape), (1, Container::Data));

        let doc = json!({"count": 2, "results": [{"a": 1}, {"a": 2}]});
        let (items, shape) = unwrap_items(doc).unwrap();
        assert_eq!((items.len(), shape), (2, Container::Results));
    }

    #[test]
    fn non_array_data_falls_through_to_values() {
        let (items, shape) = unwrap_items(json!({"data": "n/a", "x": {"0": "A"}})).unwrap();
        assert_eq!(shape, Container::ObjectValues);
        assert_eq!(items, vec![json!("n/a"), json!({"0": "A"})]);
    }

    #[test]
    fn keyed_object_lists_index_keys_first() {
        let (items, _) = unwrap_items(json!({"b": "B", "1": "one", "0": "zero"})).unwrap();
        assert_eq!(items, vec![json!("zero"), json!("one"), json!("B")]);
    }

    #[test]
    fn scalar_document_is_unsupported() {
        assert!(matches!(
            unwrap_items(json!(42)),
            Err(MergeError::UnsupportedShape(_))
        ));
    }
}
