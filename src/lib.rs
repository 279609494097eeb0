//! Aggregate numeric fields of JSON records, driven by a list of operations.
//!
//! Pipeline: load `entries` and `operations`, validate every operation,
//! evaluate them in order (optionally on a thread pool) and write one
//! `{name, roundedValue}` result per operation.

pub mod data;
pub mod error;
pub mod model;
pub mod render;
pub mod spec;

use std::path::Path;

pub type Result<T> = anyhow::Result<T>;

pub use data::Record;
pub use error::{EvalError, EvalResult};
pub use model::{EvalOptions, OperationResult, evaluate, evaluate_all, extract};
pub use spec::{Function, Operation, OpsSpec};

/// Load both documents, evaluate every operation and write the results file.
pub fn run(
    data_path: impl AsRef<Path>,
    ops_path: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
    options: &EvalOptions,
) -> Result<Vec<OperationResult>> {
    // 1) Parse + validate operations before touching the data.
    let ops_spec = data::load_operations(ops_path)?;
    let ops = ops_spec.validate_and_build()?;

    // 2) Load records.
    let records = data::load_records(data_path)?;

    // 3) Evaluate.
    let results = model::evaluate_all(&records, &ops, options)?;

    // 4) Write.
    render::write_results(out_path, &results)?;
    Ok(results)
}
