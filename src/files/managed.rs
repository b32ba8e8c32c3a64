//! The managed path facade

use crate::error::{FilekitError, Result};
use crate::files::{FileKind, WriteMode};
use crate::pattern;
use crate::picker::{ExtensionFilter, PathPicker};
use crate::values::Scratch;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Line terminator appended by `write` and `read`
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Entry of a detailed directory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub is_dir: bool,
    pub modified: Option<String>,
    pub extension: Option<String>,
}

/// A filesystem location plus scratch storage for names between calls
#[derive(Debug, Clone)]
pub struct ManagedFile {
    path: PathBuf,
    names: Scratch<String>,
}

impl ManagedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            names: Scratch::new(),
        }
    }

    /// The managed path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point the facade at a different path
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// The most recent array of names (directory listing or split words)
    pub fn last_names(&self) -> &[String] {
        self.names.current()
    }

    /// Create the managed path as `kind`.
    ///
    /// Returns `Ok(false)` when something already exists at the path.
    /// Directories are created with any missing parents.
    pub fn create(&self, kind: FileKind) -> Result<bool> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "create skipped, path exists");
            return Ok(false);
        }

        let outcome = match kind {
            FileKind::Directory => fs::create_dir_all(&self.path),
            FileKind::File => OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&self.path)
                .map(drop),
        };

        match outcome {
            Ok(()) => {
                debug!(path = %self.path.display(), %kind, "created");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(FilekitError::IoError(e)),
        }
    }

    /// Write `text` plus a line terminator, creating the file if needed
    pub fn write(&self, text: &str, mode: WriteMode) -> Result<()> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Overwrite => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };

        let mut file = options.open(&self.path)?;
        file.write_all(text.as_bytes())?;
        file.write_all(LINE_ENDING.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), ?mode, bytes = text.len(), "wrote");
        Ok(())
    }

    /// Read every line of the file, each followed by a line terminator
    pub fn read(&self) -> Result<String> {
        if !self.path.exists() {
            return Err(FilekitError::PathNotFound(self.path.display().to_string()));
        }

        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut content = String::new();
        for line in reader.lines() {
            content.push_str(&line?);
            content.push_str(LINE_ENDING);
        }

        debug!(path = %self.path.display(), bytes = content.len(), "read");
        Ok(content)
    }

    /// Names of the direct children, or nothing when the path is not a directory.
    ///
    /// Order is whatever the filesystem reports.
    pub fn list_files(&self) -> Result<Vec<String>> {
        if !self.path.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        Ok(names)
    }

    /// Children of the managed directory that are of the given kind
    pub fn list_files_on_directory(&mut self, kind: FileKind) -> Result<Vec<String>> {
        let names = self.list_files()?;
        self.names.set_current(names);

        for name in self.names.current().to_vec() {
            let child = self.path.join(&name);
            let is_match = match kind {
                FileKind::Directory => child.is_dir(),
                FileKind::File => child.is_file(),
            };
            if is_match {
                self.names.accumulate(name);
            }
        }

        Ok(self.names.take_collected())
    }

    /// Detailed listing of the managed directory, sorted by name
    pub fn entries(&self) -> Result<Vec<FileEntry>> {
        if !self.path.exists() {
            return Err(FilekitError::PathNotFound(self.path.display().to_string()));
        }

        let mut entries = Vec::new();
        if !self.path.is_dir() {
            return Ok(entries);
        }

        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            // Does not follow symlinks, so a dangling link is still listed
            let metadata = entry.metadata()?;
            let child = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let modified = metadata.modified().ok().map(|t| {
                chrono::DateTime::<chrono::Utc>::from(t)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            });

            entries.push(FileEntry {
                name,
                path: child.display().to_string(),
                size: metadata.len(),
                is_dir: metadata.is_dir(),
                modified,
                extension: child.extension().map(|e| e.to_string_lossy().to_string()),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    /// Words of `text` that fully match `pattern`
    pub fn find_words(&mut self, text: &str, pattern: &str) -> Result<Vec<String>> {
        let matches = pattern::find_words(text, pattern)?;
        self.names.set_current(pattern::split_words(text));
        Ok(matches)
    }

    /// Ask `picker` for a file with `extension` and manage it on success.
    ///
    /// Returns `Ok(false)` if the picker was cancelled; the managed path is
    /// left untouched in that case.
    pub fn choose_file(&mut self, picker: &mut dyn PathPicker, extension: &str) -> Result<bool> {
        let filter = ExtensionFilter::new(extension);
        let Some(selected) = picker.pick(&filter)? else {
            debug!("selection cancelled");
            return Ok(false);
        };

        if !selected.is_file() {
            warn!(path = %selected.display(), "selection is not an existing file");
            return Err(FilekitError::InvalidSelection(format!(
                "'{}' is not an existing file",
                selected.display()
            )));
        }
        if !filter.matches(&selected) {
            warn!(path = %selected.display(), "selection has the wrong extension");
            return Err(FilekitError::InvalidSelection(format!(
                "'{}' is not one of {}",
                selected.display(),
                filter.description()
            )));
        }

        self.path = selected;
        Ok(true)
    }

    /// Whether the whole of `text` matches `pattern`
    pub fn validate(text: &str, pattern: &str) -> Result<bool> {
        pattern::validate(text, pattern)
    }

    /// Replace every match of `pattern` in `text`
    pub fn replace(text: &str, pattern: &str, replacement: &str) -> Result<String> {
        pattern::replace(text, pattern, replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedPicker(Option<PathBuf>);

    impl PathPicker for FixedPicker {
        fn pick(&mut self, _filter: &ExtensionFilter) -> Result<Option<PathBuf>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("testFile.txt");
        let file = ManagedFile::new(&path);

        assert!(file.create(FileKind::File).unwrap());
        assert!(path.is_file());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);

        // Second attempt reports the existing file
        assert!(!file.create(FileKind::File).unwrap());
    }

    #[test]
    fn test_create_directory_with_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b");
        let dir = ManagedFile::new(&path);

        assert!(dir.create(FileKind::Directory).unwrap());
        assert!(path.is_dir());
        assert!(!dir.create(FileKind::Directory).unwrap());
    }

    #[test]
    fn test_create_file_in_missing_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = ManagedFile::new(temp_dir.path().join("missing").join("f.txt"));
        assert!(matches!(file.create(FileKind::File), Err(FilekitError::IoError(_))));
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let file = ManagedFile::new(temp_dir.path().join("readTest.txt"));

        file.write("Test content", WriteMode::Overwrite).unwrap();
        assert_eq!(file.read().unwrap(), format!("Test content{}", LINE_ENDING));
    }

    #[test]
    fn test_write_append() {
        let temp_dir = TempDir::new().unwrap();
        let file = ManagedFile::new(temp_dir.path().join("appendTest.txt"));

        file.write("A", WriteMode::Overwrite).unwrap();
        file.write("B", WriteMode::Append).unwrap();

        let content = file.read().unwrap();
        assert_eq!(content, format!("A{0}B{0}", LINE_ENDING));
    }

    #[test]
    fn test_write_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let file = ManagedFile::new(temp_dir.path().join("overwriteTest.txt"));

        file.write("A", WriteMode::from_overwrite(true)).unwrap();
        file.write("B", WriteMode::from_overwrite(true)).unwrap();

        assert_eq!(file.read().unwrap(), format!("B{}", LINE_ENDING));
    }

    #[test]
    fn test_read_missing() {
        let temp_dir = TempDir::new().unwrap();
        let file = ManagedFile::new(temp_dir.path().join("nope.txt"));
        assert!(matches!(file.read(), Err(FilekitError::PathNotFound(_))));
    }

    #[test]
    fn test_list_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::File::create(temp_dir.path().join("file1.txt")).unwrap();
        fs::File::create(temp_dir.path().join("file2.txt")).unwrap();

        let dir = ManagedFile::new(temp_dir.path());
        let mut names = dir.list_files().unwrap();
        names.sort();
        assert_eq!(names, vec!["file1.txt", "file2.txt"]);
    }

    #[test]
    fn test_list_files_on_plain_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.txt");
        fs::File::create(&path).unwrap();

        assert!(ManagedFile::new(&path).list_files().unwrap().is_empty());
        assert!(ManagedFile::new(temp_dir.path().join("missing")).list_files().unwrap().is_empty());
    }

    #[test]
    fn test_list_files_on_directory_by_kind() {
        let temp_dir = TempDir::new().unwrap();
        fs::File::create(temp_dir.path().join("testFile.txt")).unwrap();
        fs::create_dir(temp_dir.path().join("testDir")).unwrap();

        let mut dir = ManagedFile::new(temp_dir.path());
        assert_eq!(dir.list_files_on_directory(FileKind::Directory).unwrap(), vec!["testDir"]);
        assert_eq!(dir.list_files_on_directory(FileKind::File).unwrap(), vec!["testFile.txt"]);
        assert_eq!(dir.last_names().len(), 2);
    }

    #[test]
    fn test_entries_sorted_with_metadata() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.txt"), "12345").unwrap();
        fs::create_dir(temp_dir.path().join("a")).unwrap();

        let entries = ManagedFile::new(temp_dir.path()).entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a");
        assert!(entries[0].is_dir);
        assert_eq!(entries[1].name, "b.txt");
        assert_eq!(entries[1].size, 5);
        assert_eq!(entries[1].extension.as_deref(), Some("txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_entries_lists_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        fs::File::create(temp_dir.path().join("ok.txt")).unwrap();
        std::os::unix::fs::symlink(
            temp_dir.path().join("missing-target"),
            temp_dir.path().join("broken"),
        )
        .unwrap();

        let entries = ManagedFile::new(temp_dir.path()).entries().unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["broken", "ok.txt"]);
        assert!(!entries[0].is_dir);
    }

    #[test]
    fn test_find_words_keeps_split() {
        let mut file = ManagedFile::new(".");
        assert_eq!(file.find_words("Hello, world. 123", r"\d+").unwrap(), vec!["123"]);
        assert_eq!(file.last_names(), &["Hello", "world", "123"]);
    }

    #[test]
    fn test_choose_file_replaces_path() {
        let temp_dir = TempDir::new().unwrap();
        let chosen = temp_dir.path().join("notes.txt");
        fs::File::create(&chosen).unwrap();

        let mut file = ManagedFile::new(temp_dir.path());
        let mut picker = FixedPicker(Some(chosen.clone()));
        assert!(file.choose_file(&mut picker, "txt").unwrap());
        assert_eq!(file.path(), chosen.as_path());
    }

    #[test]
    fn test_choose_file_cancelled() {
        let temp_dir = TempDir::new().unwrap();
        let mut file = ManagedFile::new(temp_dir.path());
        let mut picker = FixedPicker(None);

        assert!(!file.choose_file(&mut picker, "txt").unwrap());
        assert_eq!(file.path(), temp_dir.path());
    }

    #[test]
    fn test_choose_file_rejects_wrong_extension() {
        let temp_dir = TempDir::new().unwrap();
        let chosen = temp_dir.path().join("notes.md");
        fs::File::create(&chosen).unwrap();

        let mut file = ManagedFile::new(temp_dir.path());
        let mut picker = FixedPicker(Some(chosen));
        let result = file.choose_file(&mut picker, "txt");
        assert!(matches!(result, Err(FilekitError::InvalidSelection(_))));
        assert_eq!(file.path(), temp_dir.path());
    }

    #[test]
    fn test_set_path() {
        let mut file = ManagedFile::new("a.txt");
        file.set_path("b.txt");
        assert_eq!(file.path(), Path::new("b.txt"));
    }
}
