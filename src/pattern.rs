//! Regular expression helpers

use crate::error::Result;
use regex::Regex;

/// Compile `pattern` so that it has to match the whole input
fn compile_full(pattern: &str) -> Result<Regex> {
    Ok(Regex::new(&format!("^(?:{})$", pattern))?)
}

/// Check whether the whole of `text` matches `pattern`
pub fn validate(text: &str, pattern: &str) -> Result<bool> {
    Ok(compile_full(pattern)?.is_match(text))
}

/// Replace every match of `pattern` in `text` with `replacement`.
///
/// `replacement` may reference capture groups as `$1` or `${name}`.
pub fn replace(text: &str, pattern: &str, replacement: &str) -> Result<String> {
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(text, replacement).into_owned())
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '.' | ';')
}

/// Split `text` on whitespace, `,`, `.` and `;`, dropping empty pieces
pub fn split_words(text: &str) -> Vec<String> {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Words of `text` that fully match `pattern`, in the order they appear
pub fn find_words(text: &str, pattern: &str) -> Result<Vec<String>> {
    let re = compile_full(pattern)?;
    Ok(split_words(text)
        .into_iter()
        .filter(|word| re.is_match(word))
        .collect())
}
