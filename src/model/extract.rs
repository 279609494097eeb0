use crate::data::Record;
use crate::error::{EvalError, EvalResult, json_kind};
use crate::spec::FieldPath;

use serde_json::{Map, Value};

/// Resolve every path against `record` and sum the results.
///
/// With a single path this is exactly the value at that path.
pub fn extract(record: &Record, paths: &[FieldPath]) -> EvalResult<f64> {
    let mut total = 0.0;
    for path in paths {
        total += resolve(record, path)?;
    }
    Ok(total)
}

/// Walk `path` from the record root down to a numeric leaf.
pub fn resolve(record: &Record, path: &FieldPath) -> EvalResult<f64> {
    let segments = path.segments();
    let Some((leaf, parents)) = segments.split_last() else {
        return Err(EvalError::InvalidFieldSpec {
            path: String::new(),
            reason: "path has no segments",
        });
    };

    let mut map = record.fields();
    for (i, segment) in parents.iter().enumerate() {
        match lookup(map, segment, path)? {
            Value::Object(inner) => map = inner,
            other => {
                return Err(EvalError::PathResolution {
                    segment: segments[i + 1].clone(),
                    path: path.to_string(),
                    found: json_kind(other),
                });
            }
        }
    }

    as_number(lookup(map, leaf, path)?, path)
}

fn lookup<'a>(map: &'a Map<String, Value>, key: &str, path: &FieldPath) -> EvalResult<&'a Value> {
    map.get(key).ok_or_else(|| EvalError::MissingField {
        key: key.to_string(),
        path: path.to_string(),
    })
}

fn as_number(value: &Value, path: &FieldPath) -> EvalResult<f64> {
    let not_numeric = || EvalError::NotNumeric {
        path: path.to_string(),
        found: json_kind(value),
    };
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(not_numeric),
        _ => Err(not_numeric()),
    }
}
