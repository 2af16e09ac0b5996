//! # Userstore Architecture
//!
//! Userstore is a small **UI-agnostic record store**: a collection of user records
//! kept in a single file as a JSON array. The `userstore` binary is one client of
//! this library, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/userstore-cli)                           │
//! │  - Parses flags, loads config, installs logging             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Validates the operand mapping                            │
//! │  - Dispatches to a single command                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - open → decode → act → (maybe) encode + rewrite           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/) + Codec (codec.rs)                  │
//! │  - StorageBackend / ByteStore traits                        │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! There is none beyond the backing file. Every operation reloads the whole
//! collection, applies at most one mutation, and rewrites the file before it
//! returns. Nothing is cached between invocations and nothing is locked: two
//! processes racing on the same file can lose an update.
//!
//! ## Logical Rejections
//!
//! Adding a duplicate id or removing an unknown id is **not** an error. The
//! operation succeeds with a human-readable message as its payload, and
//! [`commands::CmdResult::outcome`] is [`commands::Outcome::Rejected`].
//!
//! ## Module Overview
//!
//! - [`api`]: Operand validation and dispatch
//! - [`commands`]: One module per operation
//! - [`store`]: Byte-level access to the backing file
//! - [`codec`]: JSON encoding of records and collections
//! - [`model`]: The [`model::Record`] type
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
