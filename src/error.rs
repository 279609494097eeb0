//! Error kinds raised by operation validation and evaluation.
//!
//! Every variant aborts the whole run; nothing is skipped or absorbed into a
//! partial result.

use thiserror::Error;

/// Result type used by the evaluation core.
pub type EvalResult<T> = std::result::Result<T, EvalError>;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("invalid filter pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("operation has no field entries")]
    MissingFieldList,

    #[error("invalid field path {path:?}: {reason}")]
    InvalidFieldSpec { path: String, reason: &'static str },

    #[error("record has no field {key:?} (path {path:?})")]
    MissingField { key: String, path: String },

    #[error("record field \"name\" is not a string (found {found})")]
    NameNotString { found: &'static str },

    #[error("cannot descend into {found} at segment {segment:?} (path {path:?})")]
    PathResolution {
        segment: String,
        path: String,
        found: &'static str,
    },

    #[error("value at path {path:?} is not a number (found {found})")]
    NotNumeric { path: String, found: &'static str },

    #[error("unknown function {0:?} (expected min, max, sum or average)")]
    UnknownFunction(String),

    #[error("aggregate result is not finite: {0}")]
    NonFiniteResult(f64),

    #[error("cannot represent {value} as a decimal")]
    DecimalConversion {
        value: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("operation #{index} {name:?} failed")]
    Operation {
        index: usize,
        name: String,
        #[source]
        source: Box<EvalError>,
    },
}

impl EvalError {
    /// Attach the position and name of the failing operation.
    pub fn in_operation(self, index: usize, name: &str) -> Self {
        EvalError::Operation {
            index,
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with operation context stripped.
    pub fn kind(&self) -> &EvalError {
        match self {
            EvalError::Operation { source, .. } => source.kind(),
            other => other,
        }
    }
}

/// Short JSON type name used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
