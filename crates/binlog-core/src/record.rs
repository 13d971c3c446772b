//! The record under test.

use serde::{Deserialize, Serialize};

/// A single benchmark record: an integer identifier and two text fields.
///
/// Fields are fixed at construction. Generated records always carry a
/// non-negative `id`; decoded records carry whatever the wire held.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    id: i32,
    name: String,
    value: String,
}

impl Record {
    /// Create a record from its three fields.
    pub fn new(id: i32, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Total byte length of the two text fields.
    pub fn content_len(&self) -> usize {
        self.name.len() + self.value.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let r = Record::new(7, "name_7", "value_42");
        assert_eq!(r.id(), 7);
        assert_eq!(r.name(), "name_7");
        assert_eq!(r.value(), "value_42");
        assert_eq!(r.content_len(), 6 + 8);
    }

    #[test]
    fn json_field_names_preserved() {
        let r = Record::new(1, "a", "");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"a","value":""}"#);
    }

    #[test]
    fn content_len_counts_bytes_not_chars() {
        let r = Record::new(0, "é", "");
        assert_eq!(r.content_len(), 2);
    }
}
