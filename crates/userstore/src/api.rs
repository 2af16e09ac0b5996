//! # API Facade
//!
//! The API layer is the single entry point for record operations. It takes the
//! operand mapping produced by a front end (the CLI, a test, anything else),
//! validates it, and dispatches to exactly one command.
//!
//! ## Validation Order
//!
//! 1. `operation` must be present.
//! 2. `fileName` must be present.
//! 3. `operation` must name a supported operation.
//! 4. `add` needs `item`; `remove` and `findById` need `id`.
//!
//! An operand set to the empty string counts as missing. Validation failures
//! are [`StoreError::Validation`] and nothing is opened.
//!
//! ## Generic Over StorageBackend
//!
//! `RecordApi<B: StorageBackend>` works against any backend:
//! - Production: `RecordApi<FsBackend>`
//! - Testing: `RecordApi<MemBackend>`

use crate::commands::{self, CmdResult};
use crate::error::{Result, StoreError};
use crate::store::backend::StorageBackend;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

pub const OPERATION: &str = "operation";
pub const FILE_NAME: &str = "fileName";
pub const ID: &str = "id";
pub const ITEM: &str = "item";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Add,
    Remove,
    FindById,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::FindById => "findById",
        }
    }
}

impl FromStr for Operation {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Operation::List),
            "add" => Ok(Operation::Add),
            "remove" => Ok(Operation::Remove),
            "findById" => Ok(Operation::FindById),
            other => Err(StoreError::Validation(format!(
                "Operation {} not allowed!",
                other
            ))),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operand mapping: option name to string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(HashMap<String, String>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Value for `key`, treating an empty string as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| StoreError::missing_flag(key))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The main API facade for record operations.
pub struct RecordApi<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecordApi<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn list(&self, path: &Path) -> Result<CmdResult> {
        commands::list::run(&self.backend, path)
    }

    pub fn add(&self, path: &Path, item: &[u8]) -> Result<CmdResult> {
        commands::add::run(&self.backend, path, item)
    }

    pub fn remove(&self, path: &Path, id: &str) -> Result<CmdResult> {
        commands::remove::run(&self.backend, path, id)
    }

    pub fn find_by_id(&self, path: &Path, id: &str) -> Result<CmdResult> {
        commands::find::run(&self.backend, path, id)
    }

    /// Validate `args` and run the operation it names.
    pub fn run(&self, args: &Arguments) -> Result<CmdResult> {
        let operation = args.require(OPERATION)?;
        let file_name = args.require(FILE_NAME)?;
        let operation: Operation = operation.parse()?;
        let path = Path::new(file_name);

        debug!(%operation, file = file_name, "dispatching");

        match operation {
            Operation::List => self.list(path),
            Operation::Add => {
                let item = args.require(ITEM)?;
                self.add(path, item.as_bytes())
            }
            Operation::Remove => {
                let id = args.require(ID)?;
                self.remove(path, id)
            }
            Operation::FindById => {
                let id = args.require(ID)?;
                self.find_by_id(path, id)
            }
        }
    }

    /// Run the operation and write its payload verbatim to `writer`.
    pub fn perform<W: Write>(&self, args: &Arguments, writer: &mut W) -> Result<()> {
        let result = self.run(args)?;
        writer.write_all(&result.payload)?;
        writer.flush()?;
        Ok(())
    }
}
