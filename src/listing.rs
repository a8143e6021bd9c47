//! Read the direct children of a directory.

use crate::errors::{Result, TreeError};
use crate::tree_elements::DirectoryEntry;
use std::fs;
use std::path::Path;

/// Source of directory listings the tree is rendered from.
pub trait DirectoryListing {
    /// Return the direct children of `path` in the order they should be drawn.
    ///
    /// # Errors
    ///
    /// Fails with [`TreeError::Read`] if `path` cannot be listed.
    fn list(&self, path: &Path) -> Result<Vec<DirectoryEntry>>;
}

/// Listing backed by the real filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsListing;

impl DirectoryListing for FsListing {
    /// Read the directory for the given Path and sort the entries by name.
    ///
    /// Names are compared byte-wise, so upper case sorts before lower case. Symbolic links are
    /// not followed: a link is a file whose size is the length of its target.
    ///
    /// # Errors
    ///
    /// Will return an error in the following situations, but not limited to:
    /// * The provided `path` doesn't exist.
    /// * The process lacks permissions to view the contents.
    /// * The `path` points at a non-directory file.
    fn list(&self, path: &Path) -> Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(path).map_err(|err| TreeError::read(path, err))? {
            let dir_entry = dir_entry.map_err(|err| TreeError::read(path, err))?;
            let entry_path = dir_entry.path();
            let file_type = dir_entry
                .file_type()
                .map_err(|err| TreeError::read(&entry_path, err))?;

            let entry = if file_type.is_dir() {
                DirectoryEntry::directory(dir_entry.file_name())
            } else {
                let meta = dir_entry
                    .metadata()
                    .map_err(|err| TreeError::read(&entry_path, err))?;
                DirectoryEntry::file(dir_entry.file_name(), meta.len())
            };
            entries.push(entry);
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }
}
