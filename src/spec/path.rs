//! Field paths used to address numeric values inside a record.
//!
//! Example: `"extended.population"` and `["extended", "population"]` both
//! become `FieldPath(vec!["extended", "population"])`.

use crate::error::{EvalError, EvalResult};

use serde::Deserialize;
use std::fmt;

/// Field path entry as it appears in operations.json.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldSpec {
    // "a.b.c"
    Dotted(String),
    // ["a", "b", "c"]
    Segments(Vec<String>),
}

/// Canonical path: a non-empty list of non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl FieldSpec {
    /// Canonicalise into a `FieldPath`.
    ///
    /// List segments may not contain `.`: the dotted form is the only way to
    /// spell nesting, so a dot inside a segment has no defined meaning.
    pub fn to_path(&self) -> EvalResult<FieldPath> {
        let segments: Vec<String> = match self {
            FieldSpec::Dotted(s) => s.split('.').map(str::to_string).collect(),
            FieldSpec::Segments(parts) => {
                if let Some(bad) = parts.iter().find(|p| p.contains('.')) {
                    return Err(EvalError::InvalidFieldSpec {
                        path: bad.clone(),
                        reason: "list segments must not contain '.'",
                    });
                }
                parts.clone()
            }
        };

        if segments.is_empty() {
            return Err(EvalError::InvalidFieldSpec {
                path: String::new(),
                reason: "path has no segments",
            });
        }
        if segments.iter().any(String::is_empty) {
            return Err(EvalError::InvalidFieldSpec {
                path: segments.join("."),
                reason: "path contains an empty segment",
            });
        }

        Ok(FieldPath(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dotted(s: &str) -> FieldSpec {
        FieldSpec::Dotted(s.to_string())
    }

    fn list(parts: &[&str]) -> FieldSpec {
        FieldSpec::Segments(parts.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn dotted_and_list_forms_agree() {
        let a = dotted("extended.area.total").to_path().unwrap();
        let b = list(&["extended", "area", "total"]).to_path().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.segments(), ["extended", "area", "total"]);
        assert_eq!(a.to_string(), "extended.area.total");
    }

    #[test]
    fn single_segment() {
        let p = dotted("value").to_path().unwrap();
        assert_eq!(p.segments(), ["value"]);
    }

    #[test]
    fn rejects_dot_inside_list_segment() {
        let err = list(&["extended", "area.total"]).to_path().unwrap_err();
        assert!(matches!(err, EvalError::InvalidFieldSpec { .. }));
    }

    #[test]
    fn rejects_empty_paths_and_segments() {
        for spec in [dotted(""), dotted("a..b"), dotted("a."), list(&[]), list(&["a", ""])] {
            let err = spec.to_path().unwrap_err();
            assert!(
                matches!(err, EvalError::InvalidFieldSpec { .. }),
                "{spec:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn deserializes_both_shapes() {
        let specs: Vec<FieldSpec> = serde_json::from_str(r#"["a.b", ["c", "d"]]"#).unwrap();
        assert_eq!(specs, vec![dotted("a.b"), list(&["c", "d"])]);
    }

    #[test]
    fn rejects_other_json_shapes() {
        assert!(serde_json::from_str::<FieldSpec>("3").is_err());
        assert!(serde_json::from_str::<FieldSpec>(r#"{"a": "b"}"#).is_err());
        assert!(serde_json::from_str::<FieldSpec>(r#"["a", 1]"#).is_err());
    }
}
