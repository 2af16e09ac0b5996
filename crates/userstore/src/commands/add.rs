use super::helpers::{load_collection, persist_collection};
use crate::codec;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use std::path::Path;
use tracing::{debug, info};

/// Append the record encoded in `item` unless a record with its id exists.
///
/// The item is decoded before the backing file is opened, so a malformed item
/// never touches the store. On success the payload is the new collection.
pub fn run<B: StorageBackend>(backend: &B, path: &Path, item: &[u8]) -> Result<CmdResult> {
    let record = codec::decode_record(item)?;

    let mut handle = backend.open(path)?;
    let mut records = load_collection(&mut handle)?;

    if records.iter().any(|r| r.id == record.id) {
        debug!(id = %record.id, "add rejected, id already present");
        return Ok(CmdResult::rejected(format!(
            "Item with id {} already exists",
            record.id
        )));
    }

    info!(id = %record.id, "adding record");
    records.push(record);
    let bytes = persist_collection(&mut handle, &records)?;
    Ok(CmdResult::applied(bytes))
}
