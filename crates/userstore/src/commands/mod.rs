//! # Command Layer
//!
//! One module per operation. Each command is a single read-modify-write cycle
//! against the backing file:
//!
//! ```text
//! open → read_all → decode → act → (add/remove only) encode → rewrite
//! ```
//!
//! The handle is opened inside the command and dropped when it returns, so the
//! file is released on success, on a logical rejection, and on error alike.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`]: the exact bytes the caller should emit, plus
//! an [`Outcome`] saying whether anything was persisted. The bytes are the
//! compatibility surface; the outcome is for callers that would rather not
//! inspect message text.
//!
//! ## Testing Strategy
//!
//! Command tests use [`crate::store::mem_backend::MemBackend`] and cover every
//! branch, including rejections and corrupt backing contents.
//!
//! ## Command Modules
//!
//! - [`list`]: Raw contents of the backing file
//! - [`add`]: Append a record unless its id is taken
//! - [`remove`]: Drop the record with a given id
//! - [`find`]: Look up one record by id
//! - [`helpers`]: Load/persist shared by the commands

pub mod add;
pub mod find;
pub mod helpers;
pub mod list;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A mutation was written to the backing file.
    Applied,
    /// The request broke a business rule; nothing was written and the payload
    /// holds the reason.
    Rejected,
    /// Read-only operation.
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdResult {
    pub payload: Vec<u8>,
    pub outcome: Outcome,
}

impl CmdResult {
    pub fn applied(payload: Vec<u8>) -> Self {
        Self {
            payload,
            outcome: Outcome::Applied,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            payload: message.into().into_bytes(),
            outcome: Outcome::Rejected,
        }
    }

    pub fn unchanged(payload: Vec<u8>) -> Self {
        Self {
            payload,
            outcome: Outcome::Unchanged,
        }
    }

    pub fn is_rejected(&self) -> bool {
        self.outcome == Outcome::Rejected
    }
}
