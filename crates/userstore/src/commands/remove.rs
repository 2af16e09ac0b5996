use super::helpers::{load_collection, persist_collection};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::store::backend::StorageBackend;
use std::path::Path;
use tracing::{debug, info};

/// Drop every record whose id equals `id`, keeping the rest in order.
pub fn run<B: StorageBackend>(backend: &B, path: &Path, id: &str) -> Result<CmdResult> {
    let mut handle = backend.open(path)?;
    let records = load_collection(&mut handle)?;
    let before = records.len();

    let retained: Vec<Record> = records.into_iter().filter(|r| r.id != id).collect();

    if retained.len() == before {
        debug!(id, "remove rejected, id not present");
        return Ok(CmdResult::rejected(format!("Item with id {} not found", id)));
    }

    info!(id, removed = before - retained.len(), "removing record");
    let bytes = persist_collection(&mut handle, &retained)?;
    Ok(CmdResult::applied(bytes))
}
