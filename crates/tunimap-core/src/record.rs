// crates/tunimap-core/src/record.rs

use serde_json::{Map, Value};

/// Borrowed view over one item of a source collection.
///
/// Object values iterate in key order as a browser would list them: keys that
/// are array indices (`"0"`, `"17"`) first in ascending numeric order, then
/// every other key in document order (serde_json `preserve_order`). See
/// [`key_rank`].
/// Arrays behave like objects keyed by their decimal index, so a row such as
/// `["12345", "Poste Central", "36,5", "10,3"]` reads the same as
/// `{"0": "12345", "1": "Poste Central", ...}`.
#[derive(Clone, Copy, Debug)]
pub enum RawRecord<'a> {
    Object(&'a Map<String, Value>),
    Row(&'a [Value]),
}

impl<'a> RawRecord<'a> {
    /// Returns `None` for scalars (strings, numbers, booleans, null).
    pub fn from_value(v: &'a Value) -> Option<Self> {
        match v {
            Value::Object(m) => Some(Self::Object(m)),
            Value::Array(a) => Some(Self::Row(a.as_slice())),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match *self {
            Self::Object(m) => m.get(key),
            Self::Row(row) => key.parse::<usize>().ok().and_then(|i| row.get(i)),
        }
    }

    pub fn values(&self) -> Values<'a> {
        match *self {
            Self::Object(m) => {
                let mut entries: Vec<(&'a String, &'a Value)> = m.iter().collect();
                entries.sort_by_key(|(k, _)| key_rank(k));
                let ordered: Vec<&'a Value> = entries.into_iter().map(|(_, v)| v).collect();
                Values::Object(ordered.into_iter())
            }
            Self::Row(row) => Values::Row(row.iter()),
        }
    }

    pub fn len(&self) -> usize {
        match *self {
            Self::Object(m) => m.len(),
            Self::Row(row) => row.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub enum Values<'a> {
    Object(std::vec::IntoIter<&'a Value>),
    Row(std::slice::Iter<'a, Value>),
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Object(it) => it.next(),
            Self::Row(it) => it.next(),
        }
    }
}

/// Array-index value of an object key: `"0"`, or ASCII digits without a
/// leading zero, below `u32::MAX`.
pub fn index_key(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

/// Sort key for object entries. Used with a stable sort, index keys come
/// first in numeric order and the rest keep their document order.
pub fn key_rank(key: &str) -> (bool, u32) {
    match index_key(key) {
        Some(n) => (false, n),
        None => (true, 0),
    }
}

/// Scalar text of a value as the classifiers see it.
///
/// Strings are returned as-is, numbers in their JSON spelling. Null, booleans
/// and nested containers have no scalar text.
pub fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
