use crate::Result;
use crate::data::record::{DataDoc, Record};
use crate::spec::OpsSpec;

use anyhow::Context;
use std::fs;
use std::path::Path;

/// Read the data document and return its `entries`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("read data file {}", path.display()))?;
    let doc: DataDoc = serde_json::from_str(&text)
        .with_context(|| format!("parse data file {}", path.display()))?;

    log::info!("loaded {} entries from {}", doc.entries.len(), path.display());
    Ok(doc.entries)
}

/// Read the operations document. Operations are not validated here.
pub fn load_operations(path: impl AsRef<Path>) -> Result<OpsSpec> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("read operations file {}", path.display()))?;
    let spec: OpsSpec = serde_json::from_str(&text)
        .with_context(|| format!("parse operations file {}", path.display()))?;

    log::info!(
        "loaded {} operations from {}",
        spec.operations.len(),
        path.display()
    );
    Ok(spec)
}
