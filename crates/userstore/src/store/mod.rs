//! # Storage Layer
//!
//! Raw byte access to the backing file. Nothing in here knows about records;
//! the [`crate::codec`] turns bytes into records and the commands decide what
//! to do with them.
//!
//! ## Traits
//!
//! - [`backend::StorageBackend`] opens a path and hands back an exclusively
//!   owned handle. Opening creates the file (empty) if it does not exist.
//! - [`backend::ByteStore`] is that handle: read everything, or replace
//!   everything. Dropping the handle releases the underlying descriptor, so
//!   every exit path of a command (success, rejection, error) closes the file.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production, backed by `std::fs::File`.
//! - [`mem_backend::MemBackend`]: For testing command logic without touching
//!   the filesystem.
//!
//! ## Write Modes
//!
//! [`WriteMode::Truncate`] truncates the open file, seeks to the start and
//! writes the new payload. A crash in the middle leaves a partial file.
//!
//! [`WriteMode::AtomicRename`] writes a sibling temp file and renames it over
//! the target, so readers only ever see the old or the new contents. The temp
//! file takes the target's permission bits. A symlinked target is replaced by
//! a regular file; the file it pointed to is left as it was.
//!
//! Neither mode locks the file. Concurrent processes race on the
//! read-modify-write cycle and the last rewrite wins.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

/// How [`backend::ByteStore::rewrite`] replaces the file contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Truncate,
    AtomicRename,
}
