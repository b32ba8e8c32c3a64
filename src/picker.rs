//! Path selection capability
//!
//! A `PathPicker` asks someone (a person at a terminal, a dialog, a test) for a
//! single file restricted to one extension. Filesystem code only depends on the
//! trait, never on how the choice is made.

use crate::error::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Restricts a selection to files with a single extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extension: String,
}

impl ExtensionFilter {
    /// Create a filter; a leading dot is ignored, so `".txt"` and `"txt"` are the same
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Human-readable label such as `txt files`
    pub fn description(&self) -> String {
        format!("{} files", self.extension)
    }

    /// Whether `path` carries the filter's extension (case-insensitive)
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}

/// Something that can hand back a single chosen path, or `None` when cancelled
pub trait PathPicker {
    fn pick(&mut self, filter: &ExtensionFilter) -> Result<Option<PathBuf>>;
}

/// Picker that prompts on a writer and reads the answer from a reader.
///
/// A blank answer or end of input counts as cancellation.
pub struct PromptPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> PathPicker for PromptPicker<R, W> {
    fn pick(&mut self, filter: &ExtensionFilter) -> Result<Option<PathBuf>> {
        write!(
            self.output,
            "Select one of {} (empty to cancel): ",
            filter.description()
        )?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(answer)))
        }
    }
}
