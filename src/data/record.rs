use crate::error::{EvalError, EvalResult, json_kind};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry from the data document.
///
/// Records are plain JSON objects; the only key the engine relies on is
/// `name`, everything else is reached through field paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The record's `name`, required for filtering.
    pub fn name(&self) -> EvalResult<&str> {
        match self.0.get("name") {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(EvalError::NameNotString {
                found: json_kind(other),
            }),
            None => Err(EvalError::MissingField {
                key: "name".to_string(),
                path: "name".to_string(),
            }),
        }
    }
}

/// Data document (data.json): `{"entries": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataDoc {
    pub entries: Vec<Record>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn reads_name() {
        let r = record(json!({"name": "alpha", "value": 1}));
        assert_eq!(r.name().unwrap(), "alpha");
    }

    #[test]
    fn missing_name() {
        let r = record(json!({"value": 1}));
        assert!(matches!(r.name(), Err(EvalError::MissingField { .. })));
    }

    #[test]
    fn non_string_name() {
        let r = record(json!({"name": 7}));
        assert!(matches!(
            r.name(),
            Err(EvalError::NameNotString { found: "number" })
        ));
    }

    #[test]
    fn entries_must_be_objects() {
        assert!(serde_json::from_str::<DataDoc>(r#"{"entries": [1]}"#).is_err());
        assert!(serde_json::from_str::<DataDoc>(r#"{"rows": []}"#).is_err());
        let doc: DataDoc = serde_json::from_str(r#"{"entries": [{"name": "a"}]}"#).unwrap();
        assert_eq!(doc.entries.len(), 1);
    }
}
