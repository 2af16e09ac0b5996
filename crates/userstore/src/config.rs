//! # Configuration
//!
//! Userstore configuration is managed by [`confique`], layered from highest to
//! lowest priority:
//!
//! 1. **Environment variables**: `USERSTORE_ATOMIC_WRITES`, `USERSTORE_LOG_LEVEL`.
//! 2. **Explicit file**: passed with `--config <path>`.
//! 3. **User file**: `config.toml` in the OS config directory (resolved by the CLI).
//! 4. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! Missing files are skipped. A file that exists but does not parse is an error.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `atomic_writes` | `false` | Rewrite through a temp file + rename |
//! | `log_level` | `warn` | Default tracing filter when `RUST_LOG` is unset |

use crate::error::Result;
use crate::store::WriteMode;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Replace the backing file via temp file + rename instead of truncating it.
    #[config(env = "USERSTORE_ATOMIC_WRITES", default = false)]
    pub atomic_writes: bool,

    /// Tracing filter directive, e.g. "warn" or "userstore=debug".
    #[config(env = "USERSTORE_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            atomic_writes: false,
            log_level: "warn".to_string(),
        }
    }
}

impl StoreConfig {
    /// Load from env, then `explicit`, then `user_file`, then defaults.
    pub fn load(explicit: Option<&Path>, user_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = explicit {
            builder = builder.file(path);
        }
        if let Some(path) = user_file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.atomic_writes {
            WriteMode::AtomicRename
        } else {
            WriteMode::Truncate
        }
    }
}
