//! Command executor

use crate::cli::SubCommand;
use crate::error::{FilekitError, Result};
use crate::files::{FileEntry, FileKind, ManagedFile, WriteMode};
use crate::output::OutputFormat;
use crate::picker::{PathPicker, PromptPicker};
use crate::values::{max_of, parse_delimited, Pair};
use tracing::{debug, info};

/// Execution context containing runtime configuration
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub output_format: OutputFormat,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Human,
        }
    }
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub data: ResultData,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ResultData {
    /// Outcome of `create`; false when the path already existed
    Created { path: String, kind: FileKind, created: bool },
    Written { path: String, append: bool },
    Content { path: String, text: String },
    Names(Vec<String>),
    Files(Vec<FileEntry>),
    Words(Vec<String>),
    Matched { text: String, pattern: String, matched: bool },
    Text(String),
    Numbers(Vec<f64>),
    Maximum(i64),
    Same { left: String, right: String, same: bool },
    /// Managed path after a selection; `None` when cancelled
    Selected(Option<String>),
}

impl ExecutionResult {
    fn new(data: ResultData) -> Self {
        Self { data, message: None }
    }

    fn with_message(data: ResultData, message: String) -> Self {
        Self {
            data,
            message: Some(message),
        }
    }

    /// Whether the command reached a positive outcome (used for the exit status)
    pub fn is_success(&self) -> bool {
        !matches!(self.data, ResultData::Matched { matched: false, .. })
    }
}

/// Execute a command, prompting on the terminal when a selection is needed
pub fn execute_command(cmd: &SubCommand) -> Result<ExecutionResult> {
    let stdin = std::io::stdin();
    let mut picker = PromptPicker::new(stdin.lock(), std::io::stderr());
    execute_command_with_picker(cmd, &mut picker)
}

/// Execute a command using `picker` for interactive selection
pub fn execute_command_with_picker(
    cmd: &SubCommand,
    picker: &mut dyn PathPicker,
) -> Result<ExecutionResult> {
    match cmd {
        SubCommand::Create { path, kind } => {
            let file = ManagedFile::new(path);
            let created = file.create(*kind)?;
            info!(path = %path.display(), created, "create finished");
            Ok(ExecutionResult::new(ResultData::Created {
                path: path.display().to_string(),
                kind: *kind,
                created,
            }))
        }

        SubCommand::Write { path, text, append } => {
            let file = ManagedFile::new(path);
            file.write(text, WriteMode::from_overwrite(!append))?;
            Ok(ExecutionResult::new(ResultData::Written {
                path: path.display().to_string(),
                append: *append,
            }))
        }

        SubCommand::Read { path } => {
            let text = ManagedFile::new(path).read()?;
            Ok(ExecutionResult::new(ResultData::Content {
                path: path.display().to_string(),
                text,
            }))
        }

        SubCommand::List { path, kind, long } => {
            let mut dir = ManagedFile::new(path);
            if !path.exists() {
                return Err(FilekitError::PathNotFound(path.display().to_string()));
            }

            if *long {
                let mut entries = dir.entries()?;
                if let Some(kind) = kind {
                    entries.retain(|e| e.is_dir == (*kind == FileKind::Directory));
                }
                return Ok(ExecutionResult::new(ResultData::Files(entries)));
            }

            let names = match kind {
                Some(kind) => dir.list_files_on_directory(*kind)?,
                None => dir.list_files()?,
            };
            Ok(ExecutionResult::new(ResultData::Names(names)))
        }

        SubCommand::Find { text, pattern } => {
            let mut scratch = ManagedFile::new(".");
            let words = scratch.find_words(text, pattern)?;
            debug!(
                split = scratch.last_names().len(),
                matched = words.len(),
                "find finished"
            );
            Ok(ExecutionResult::new(ResultData::Words(words)))
        }

        SubCommand::Validate { text, pattern } => {
            let matched = ManagedFile::validate(text, pattern)?;
            Ok(ExecutionResult::new(ResultData::Matched {
                text: text.clone(),
                pattern: pattern.clone(),
                matched,
            }))
        }

        SubCommand::Replace {
            text,
            pattern,
            replacement,
        } => {
            let replaced = ManagedFile::replace(text, pattern, replacement)?;
            Ok(ExecutionResult::new(ResultData::Text(replaced)))
        }

        SubCommand::Parse { text, delimiter } => {
            let numbers = parse_delimited(text, delimiter)?;
            Ok(ExecutionResult::new(ResultData::Numbers(numbers)))
        }

        SubCommand::Max { values } => {
            let max = max_of(values)?;
            Ok(ExecutionResult::new(ResultData::Maximum(max)))
        }

        SubCommand::Compare {
            left,
            right,
            numeric,
        } => {
            let same = if *numeric {
                Pair::new(parse_number(left)?, parse_number(right)?).same_number()
            } else {
                Pair::new(left.as_str(), right.as_str()).same_text()
            };
            Ok(ExecutionResult::new(ResultData::Same {
                left: left.clone(),
                right: right.clone(),
                same,
            }))
        }

        SubCommand::Choose { extension, path } => {
            let mut file = ManagedFile::new(path);
            if file.choose_file(picker, extension)? {
                let selected = file.path().display().to_string();
                Ok(ExecutionResult::new(ResultData::Selected(Some(selected))))
            } else {
                Ok(ExecutionResult::with_message(
                    ResultData::Selected(None),
                    format!("Selection cancelled, still managing {}", path.display()),
                ))
            }
        }
    }
}

fn parse_number(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| FilekitError::InvalidNumber {
            token: value.to_string(),
        })
}
