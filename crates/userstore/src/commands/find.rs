use super::helpers::load_collection;
use crate::codec;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use std::path::Path;

/// Encode the first record with a matching id. A miss is an empty payload.
pub fn run<B: StorageBackend>(backend: &B, path: &Path, id: &str) -> Result<CmdResult> {
    let mut handle = backend.open(path)?;
    let records = load_collection(&mut handle)?;

    match records.iter().find(|r| r.id == id) {
        Some(record) => Ok(CmdResult::unchanged(codec::encode_record(record)?)),
        None => Ok(CmdResult::unchanged(Vec::new())),
    }
}
