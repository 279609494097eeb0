//! Operations spec (operations.json): one entry per aggregate to compute.
//!
//! JSON shape:
//! {
//!   "operations": [
//!     {
//!       "name": "important",          // copied to the result
//!       "function": "sum",            // min | max | sum | average
//!       "filter": "important-.*",     // regex, must match the whole record name
//!       "field": ["value", ["a", "b"]] // paths; several paths are summed per record
//!     },
//!     ...
//!   ]
//! }
//!
//! Every operation is validated (regex compiled, function resolved, paths
//! canonicalised) before any record is looked at.

use crate::error::{EvalError, EvalResult};
use crate::spec::{FieldPath, FieldSpec, Function};

use regex_automata::meta::Regex;
use regex_syntax::hir::{Hir, Look};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OpsSpec {
    pub operations: Vec<RawOperation>,
}

/// Raw operation shape as it appears in operations.json.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOperation {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub function: String,

    #[serde(default)]
    pub filter: String,

    pub field: Option<Vec<FieldSpec>>,
}

/// Validated operation ready for evaluation.
#[derive(Debug, Clone)]
pub struct Operation {
    pub name: String,
    pub function: Function,
    pub filter: NameFilter,
    pub fields: Vec<FieldPath>,
}

/// Full-match name filter.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: String,
    re: Regex,
}

impl NameFilter {
    /// Compile `pattern` so that it must match an entire name, not a substring.
    ///
    /// Anchors are added to the parsed pattern rather than its text, so flags
    /// and comments inside the pattern cannot reach them.
    pub fn new(pattern: &str) -> EvalResult<Self> {
        let invalid = |source: Box<dyn std::error::Error + Send + Sync>| {
            EvalError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        };

        let hir = regex_syntax::Parser::new()
            .parse(pattern)
            .map_err(|e| invalid(Box::new(e)))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        let re = Regex::builder()
            .build_from_hir(&anchored)
            .map_err(|e| invalid(Box::new(e)))?;

        Ok(Self {
            pattern: pattern.to_string(),
            re,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, name: &str) -> bool {
        self.re.is_match(name)
    }
}

impl RawOperation {
    pub fn validate(&self) -> EvalResult<Operation> {
        let filter = NameFilter::new(&self.filter)?;
        let function: Function = self.function.parse()?;

        let specs = match &self.field {
            Some(specs) if !specs.is_empty() => specs,
            _ => return Err(EvalError::MissingFieldList),
        };
        let fields = specs
            .iter()
            .map(FieldSpec::to_path)
            .collect::<EvalResult<Vec<_>>>()?;

        Ok(Operation {
            name: self.name.clone(),
            function,
            filter,
            fields,
        })
    }
}

impl OpsSpec {
    /// Validate every operation, keeping input order.
    ///
    /// Fails on the first invalid operation; the error names its position.
    pub fn validate_and_build(&self) -> EvalResult<Vec<Operation>> {
        self.operations
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                raw.validate()
                    .map_err(|e| e.in_operation(index, &raw.name))
            })
            .collect()
    }
}
