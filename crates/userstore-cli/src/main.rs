//! # Userstore CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! Everything user-facing happens here and nowhere in the library: flag
//! parsing (`cli/setup.rs`), config loading and logging setup, and writing the
//! operation's payload to stdout. Logs go to stderr so stdout carries exactly
//! the payload bytes.
//!
//! A logical rejection ("Item with id 1 already exists") is a successful run
//! and exits 0. Anything else that goes wrong prints `Error: <message>` to
//! stderr and exits 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
