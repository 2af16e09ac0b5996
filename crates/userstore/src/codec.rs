//! JSON codec for records and collections.
//!
//! The on-disk form is a compact JSON array (`serde_json::to_vec`, no
//! whitespace). `<`, `>` and `&` are written literally, not as `\u003c`-style
//! escapes. A zero-length buffer is a valid, empty collection: it is what a
//! freshly created backing file holds before the first write.

use crate::error::Result;
use crate::model::Record;

/// Decode a whole collection. Empty input decodes to an empty collection.
pub fn decode(bytes: &[u8]) -> Result<Vec<Record>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let records: Vec<Record> = serde_json::from_slice(bytes)?;
    Ok(records)
}

/// Decode a single record, as supplied through the `item` operand.
pub fn decode_record(bytes: &[u8]) -> Result<Record> {
    let record: Record = serde_json::from_slice(bytes)?;
    Ok(record)
}

pub fn encode(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}

pub fn encode_record(record: &Record) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}
