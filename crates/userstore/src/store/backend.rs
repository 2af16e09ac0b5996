use crate::error::Result;
use std::path::Path;

/// An open backing store, exclusively owned by one operation.
pub trait ByteStore {
    /// Read the entire current contents. An empty store yields an empty vec.
    fn read_all(&mut self) -> Result<Vec<u8>>;

    /// Replace the entire contents with `bytes`.
    fn rewrite(&mut self, bytes: &[u8]) -> Result<()>;
}

/// Abstract interface for opening backing stores.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while the commands handle the "what".
pub trait StorageBackend {
    type Handle: ByteStore;

    /// Open `path` for reading and writing, creating it empty if absent.
    /// Never truncates existing contents.
    fn open(&self, path: &Path) -> Result<Self::Handle>;
}
