//! File and directory operations bound to a managed path

mod kind;
mod managed;

pub use kind::{FileKind, WriteMode};
pub use managed::{FileEntry, ManagedFile, LINE_ENDING};
