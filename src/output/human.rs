//! Human-readable output formatting

use crate::engine::executor::{ExecutionResult, ResultData};
use bytesize::ByteSize;

pub fn format_human(result: &ExecutionResult) -> String {
    let body = match &result.data {
        ResultData::Created { path, kind, created } => {
            if *created {
                format!("Created {}: {}", kind, path)
            } else {
                format!("Not created, {} already exists", path)
            }
        }
        ResultData::Written { path, append } => {
            format!("{} {}", if *append { "Appended to" } else { "Wrote" }, path)
        }
        // Content already ends with a line terminator
        ResultData::Content { text, .. } => text.trim_end_matches(['\r', '\n']).to_string(),
        ResultData::Names(names) | ResultData::Words(names) => names.join("\n"),
        ResultData::Files(files) => {
            if files.is_empty() {
                return "No files found".to_string();
            }
            let mut output = format!("{:<30} {:>12} {:<20}\n", "NAME", "SIZE", "MODIFIED");
            output.push_str(&"-".repeat(64));
            for file in files {
                let name = if file.is_dir {
                    format!("{}/", file.name)
                } else {
                    file.name.clone()
                };
                output.push_str(&format!(
                    "\n{:<30} {:>12} {:<20}",
                    truncate(&name, 30),
                    if file.is_dir {
                        "-".to_string()
                    } else {
                        ByteSize(file.size).to_string()
                    },
                    file.modified.as_deref().unwrap_or("-")
                ));
            }
            output
        }
        ResultData::Matched { text, pattern, matched } => {
            if *matched {
                format!("'{}' matches {}", text, pattern)
            } else {
                format!("'{}' does not match {}", text, pattern)
            }
        }
        ResultData::Text(text) => text.clone(),
        ResultData::Numbers(numbers) => numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        ResultData::Maximum(max) => max.to_string(),
        ResultData::Same { left, right, same } => {
            format!("{} {} {}", left, if *same { "==" } else { "!=" }, right)
        }
        ResultData::Selected(Some(path)) => format!("Selected {}", path),
        ResultData::Selected(None) => String::new(),
    };

    match &result.message {
        Some(message) if body.is_empty() => message.clone(),
        Some(message) => format!("{}\n{}", body, message),
        None => body,
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
