//! Filekit - small file, directory and regex helpers
//!
//! Filekit binds a [`ManagedFile`] to a path and offers create, read, write,
//! list and filter operations on it, plus regex validation, substitution and
//! word search, and a few numeric value helpers.
//!
//! # Example
//!
//! ```no_run
//! use filekit::{FileKind, ManagedFile, WriteMode};
//!
//! let file = ManagedFile::new("notes.txt");
//! file.create(FileKind::File).unwrap();
//! file.write("hello", WriteMode::Append).unwrap();
//! println!("{}", file.read().unwrap());
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod files;
pub mod output;
pub mod pattern;
pub mod picker;
pub mod values;

pub use engine::{execute_command, ExecutionContext, ExecutionResult};
pub use error::{FilekitError, Result};
pub use files::{FileEntry, FileKind, ManagedFile, WriteMode};
pub use output::{format_output, OutputFormat};
pub use picker::{ExtensionFilter, PathPicker, PromptPicker};
pub use values::{max_of, parse_delimited, Pair, Scratch};
