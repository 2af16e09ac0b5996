use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::{ByteStore, StorageBackend};
use std::path::Path;

/// Return the backing file verbatim. No decode, so a corrupt file lists fine.
pub fn run<B: StorageBackend>(backend: &B, path: &Path) -> Result<CmdResult> {
    let mut handle = backend.open(path)?;
    let bytes = handle.read_all()?;
    Ok(CmdResult::unchanged(bytes))
}
