//! Index of the files physically present in an addon package.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file in the addon tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIndexEntry {
    /// File name without directory, lossily converted for matching and
    /// messages.
    pub name: String,
    /// Directory containing the file.
    pub path: PathBuf,
    /// On-disk path, kept as-is so names that are not valid UTF-8 still open.
    file: PathBuf,
}

impl FileIndexEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let path = path.into();
        let file = path.join(&name);
        Self { name, path, file }
    }

    /// Builds an entry from the full path of a file.
    pub fn from_file(file: PathBuf) -> Self {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = file.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { name, path, file }
    }

    /// Full path to the file.
    pub fn full_path(&self) -> &Path {
        &self.file
    }
}

/// Errors that can occur while indexing an addon tree.
#[derive(Debug, thiserror::Error)]
pub enum FileIndexError {
    #[error("addon path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to walk addon tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Ordered list of files under an addon root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    entries: Vec<FileIndexEntry>,
}

impl FileIndex {
    pub fn new(entries: Vec<FileIndexEntry>) -> Self {
        Self { entries }
    }

    /// Walks `root` recursively and indexes every regular file.
    ///
    /// Entries are sorted by file name within each directory so repeated
    /// scans of the same tree yield the same order.
    pub fn scan(root: &Path) -> Result<Self, FileIndexError> {
        if !root.is_dir() {
            return Err(FileIndexError::NotADirectory(root.to_path_buf()));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            entries.push(FileIndexEntry::from_file(entry.into_path()));
        }

        log::debug!("indexed {} files under {}", entries.len(), root.display());
        Ok(Self { entries })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileIndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FileIndex {
    type Item = &'a FileIndexEntry;
    type IntoIter = std::slice::Iter<'a, FileIndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
