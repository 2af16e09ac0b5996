use crate::codec;
use crate::error::Result;
use crate::model::Record;
use crate::store::backend::ByteStore;

/// Read and decode the whole collection behind `handle`.
pub fn load_collection<H: ByteStore>(handle: &mut H) -> Result<Vec<Record>> {
    let bytes = handle.read_all()?;
    codec::decode(&bytes)
}

/// Encode `records` and replace the handle's contents with them.
/// Returns the encoded bytes, which double as the command payload.
pub fn persist_collection<H: ByteStore>(handle: &mut H, records: &[Record]) -> Result<Vec<u8>> {
    let bytes = codec::encode(records)?;
    handle.rewrite(&bytes)?;
    Ok(bytes)
}
