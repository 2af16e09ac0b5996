use super::backend::{ByteStore, StorageBackend};
use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

type Files = Rc<RefCell<HashMap<PathBuf, Vec<u8>>>>;

/// In-memory storage backend for testing.
///
/// Uses `Rc<RefCell<..>>` since the store is single-threaded; handles share
/// the backend's file table so writes are visible after the handle is gone.
#[derive(Default, Clone)]
pub struct MemBackend {
    files: Files,
    simulate_write_error: Rc<Cell<bool>>,
    simulate_open_error: Rc<Cell<bool>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `path` with raw contents, replacing whatever was there.
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), bytes.into());
    }

    /// Current contents of `path`, or `None` if it was never opened or seeded.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Make every `open` fail, as an unwritable path would.
    pub fn set_simulate_open_error(&self, simulate: bool) {
        self.simulate_open_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    type Handle = MemHandle;

    fn open(&self, path: &Path) -> Result<MemHandle> {
        if self.simulate_open_error.get() {
            let err = io::Error::new(io::ErrorKind::PermissionDenied, "Simulated open error");
            return Err(err.into());
        }
        self.files.borrow_mut().entry(path.to_path_buf()).or_default();
        Ok(MemHandle {
            path: path.to_path_buf(),
            files: Rc::clone(&self.files),
            simulate_write_error: Rc::clone(&self.simulate_write_error),
        })
    }
}

pub struct MemHandle {
    path: PathBuf,
    files: Files,
    simulate_write_error: Rc<Cell<bool>>,
}

impl ByteStore for MemHandle {
    fn read_all(&mut self) -> Result<Vec<u8>> {
        Ok(self.files.borrow().get(&self.path).cloned().unwrap_or_default())
    }

    fn rewrite(&mut self, bytes: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(io::Error::other("Simulated write error").into());
        }
        self.files.borrow_mut().insert(self.path.clone(), bytes.to_vec());
        Ok(())
    }
}
