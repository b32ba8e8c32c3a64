//! CLI argument parsing

use crate::files::FileKind;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filekit")]
#[command(author, version, about = "File, directory and regex helpers", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true, env = "FILEKIT_JSON")]
    pub json: bool,

    /// Verbose output (repeat for debug logging)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// Create a file or directory if nothing exists at the path
    Create {
        path: PathBuf,

        #[arg(long, value_enum, default_value = "file")]
        kind: FileKind,
    },

    /// Write a line of text to a file
    Write {
        path: PathBuf,

        text: String,

        /// Append instead of overwriting
        #[arg(long)]
        append: bool,
    },

    /// Print the contents of a file
    Read { path: PathBuf },

    /// List the children of a directory
    List {
        path: PathBuf,

        /// Only list children of this kind
        #[arg(long, value_enum)]
        kind: Option<FileKind>,

        /// Show size and modification time
        #[arg(long, short)]
        long: bool,
    },

    /// Print the words of TEXT that fully match PATTERN
    Find { text: String, pattern: String },

    /// Check whether TEXT fully matches PATTERN (exit status 1 if not)
    Validate { text: String, pattern: String },

    /// Replace every match of PATTERN in TEXT
    Replace {
        text: String,
        pattern: String,
        replacement: String,
    },

    /// Parse a delimited list of numbers
    Parse {
        text: String,

        #[arg(long, short, default_value = ",")]
        delimiter: String,
    },

    /// Print the truncated maximum of the given numbers
    Max {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Compare two values as text, or as numbers with --numeric
    Compare {
        left: String,
        right: String,

        #[arg(long)]
        numeric: bool,
    },

    /// Interactively choose a file with the given extension
    Choose {
        extension: String,

        /// Path managed before the selection
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
}
