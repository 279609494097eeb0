//! Evaluation model: run validated operations against the loaded records.

pub mod extract;

pub use extract::{extract, resolve};

use crate::data::Record;
use crate::error::EvalResult;
use crate::render::number::{DEFAULT_DECIMALS, format_rounded};
use crate::spec::Operation;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// One entry of the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    pub name: String,
    #[serde(rename = "roundedValue")]
    pub rounded_value: String,
}

/// Knobs for a full evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Worker threads. 1 evaluates on the calling thread.
    pub jobs: usize,
    /// Decimal places kept in `roundedValue`.
    pub precision: u32,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            jobs: 1,
            precision: DEFAULT_DECIMALS,
        }
    }
}

/// Filter, extract, reduce and format for a single operation.
pub fn evaluate(records: &[Record], op: &Operation, precision: u32) -> EvalResult<OperationResult> {
    let values = collect_values(records, op)?;
    if values.is_empty() {
        log::warn!(
            "operation {:?}: filter {:?} matched no records",
            op.name,
            op.filter.pattern()
        );
    }

    let reduced = op.function.apply(&values);
    log::debug!(
        "operation {:?}: {} over {} records = {}",
        op.name,
        op.function,
        values.len(),
        reduced
    );

    Ok(OperationResult {
        name: op.name.clone(),
        rounded_value: format_rounded(reduced, precision)?,
    })
}

/// One value per record whose whole `name` matches the operation filter.
///
/// Every record must carry a string `name`, matched or not.
fn collect_values(records: &[Record], op: &Operation) -> EvalResult<Vec<f64>> {
    let mut values = Vec::new();
    for record in records {
        let name = record.name()?;
        if !op.filter.matches(name) {
            continue;
        }
        let value = extract(record, &op.fields)?;
        log::trace!("operation {:?}: {} -> {}", op.name, name, value);
        values.push(value);
    }
    Ok(values)
}

/// Evaluate every operation, returning results in input order.
///
/// With `options.jobs > 1` operations run on a rayon pool. Either way the
/// reported error is the one from the earliest failing operation.
pub fn evaluate_all(
    records: &[Record],
    operations: &[Operation],
    options: &EvalOptions,
) -> EvalResult<Vec<OperationResult>> {
    let run = |(index, op): (usize, &Operation)| {
        evaluate(records, op, options.precision).map_err(|e| e.in_operation(index, &op.name))
    };

    let outcomes: Vec<EvalResult<OperationResult>> =
        match build_pool(options.jobs, operations.len()) {
            Some(pool) => pool.install(|| operations.par_iter().enumerate().map(run).collect()),
            None => operations.iter().enumerate().map(run).collect(),
        };

    outcomes.into_iter().collect()
}

fn build_pool(jobs: usize, operations: usize) -> Option<rayon::ThreadPool> {
    if jobs <= 1 || operations <= 1 {
        return None;
    }
    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => Some(pool),
        Err(e) => {
            log::warn!("cannot start {} worker threads ({}), evaluating sequentially", jobs, e);
            None
        }
    }
}
