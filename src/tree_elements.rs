//! Collect all structs that represent parts of the file tree.

use std::ffi::OsString;

/// Bar if more siblings of the parent follow
const TREE_SIGN: &str = "│\t";

/// Indentation if the parent was the last of its siblings
const INDENT_SIGN: &str = "\t";

/// In front of a file or dir if it is not the last
pub const INNER_BRANCH: &str = "├───";

/// In front of a file or dir if it is the last
pub const FINAL_BRANCH: &str = "└───";

/// Represent the different possible indentation components of a line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TreeLevel {
    /// Indentation if no further sibling follows the parent
    Indent,
    /// Bar if further siblings follow the parent
    TreeBar,
}

impl TreeLevel {
    /// The characters this level contributes to a line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeLevel::Indent => INDENT_SIGN,
            TreeLevel::TreeBar => TREE_SIGN,
        }
    }
}

/// Indentation prefix that is put in front of every line at one depth of the tree.
///
/// A prefix is never changed in place. Descending into a directory yields a new owned prefix, so
/// the subtrees of two siblings never share state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Prefix {
    /// List of different levels of parent directories up to the root
    levels: Vec<TreeLevel>,
}

impl Prefix {
    /// Prefix of the entries directly inside the root directory.
    pub fn root() -> Prefix {
        Prefix::default()
    }

    /// Derive the prefix for the children of an entry.
    ///
    /// The last entry of a group needs no continuation bar below it, every other entry does.
    pub fn descend(&self, is_last: bool) -> Prefix {
        let mut levels = self.levels.clone();
        levels.push(if is_last {
            TreeLevel::Indent
        } else {
            TreeLevel::TreeBar
        });
        Prefix { levels }
    }

    /// Number of ancestor directories below the root.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Append the rendered prefix to `out`.
    pub fn write_to(&self, out: &mut String) {
        for level in &self.levels {
            out.push_str(level.as_str());
        }
    }
}

/// Represent which kind of file a DirectoryEntry is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TreeEntryKind {
    /// Anything that is not a directory, symlinks included
    File,
    /// DirectoryEntry is a Directory
    Directory,
}

/// One entry of a directory listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectoryEntry {
    /// Name as shown in the tree, invalid UTF-8 replaced
    pub name: String,

    /// Name as stored on disk, used to build the path of children
    pub file_name: OsString,

    /// Save kind of entry to display it differently
    pub kind: TreeEntryKind,

    /// Size in bytes, only meaningful for files
    pub size: u64,
}

impl DirectoryEntry {
    /// Create an entry from its on-disk name.
    pub fn new(file_name: impl Into<OsString>, kind: TreeEntryKind, size: u64) -> DirectoryEntry {
        let file_name = file_name.into();
        DirectoryEntry {
            name: file_name.to_string_lossy().to_string(),
            file_name,
            kind,
            size,
        }
    }

    /// Create a directory entry.
    pub fn directory(file_name: impl Into<OsString>) -> DirectoryEntry {
        DirectoryEntry::new(file_name, TreeEntryKind::Directory, 0)
    }

    /// Create a file entry with the given size.
    pub fn file(file_name: impl Into<OsString>, size: u64) -> DirectoryEntry {
        DirectoryEntry::new(file_name, TreeEntryKind::File, size)
    }

    /// Whether the entry is a directory that can be descended into.
    pub fn is_dir(&self) -> bool {
        self.kind == TreeEntryKind::Directory
    }

    /// Directories are always shown, files only if requested.
    pub fn is_visible(&self, show_files: bool) -> bool {
        self.is_dir() || show_files
    }
}

/// Format the size annotation that follows a file name.
///
/// Empty files are marked as `(empty)`, all others show their size in bytes like `(42b)`.
pub fn size_annotation(size: u64) -> String {
    if size == 0 {
        "(empty)".to_string()
    } else {
        format!("({}b)", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Verify the size annotation for empty and non-empty files.
    fn test_size_annotation() {
        assert_eq!(size_annotation(0), "(empty)");
        assert_eq!(size_annotation(1), "(1b)");
        assert_eq!(size_annotation(42), "(42b)");
        assert_eq!(size_annotation(1_048_576), "(1048576b)");
    }

    #[test]
    /// Verify that prefixes render bars for open siblings and plain tabs for closed ones.
    fn test_prefix_render() {
        let test_prefixes = vec![
            (Prefix::root(), ""),
            (Prefix::root().descend(false), "│\t"),
            (Prefix::root().descend(true), "\t"),
            (Prefix::root().descend(false).descend(false), "│\t│\t"),
            (Prefix::root().descend(false).descend(true), "│\t\t"),
            (Prefix::root().descend(true).descend(false), "\t│\t"),
        ];

        for (prefix, expected) in test_prefixes {
            assert_eq!(rendered(&prefix), expected);
        }
    }

    /// Render a prefix on its own.
    fn rendered(prefix: &Prefix) -> String {
        let mut out = String::new();
        prefix.write_to(&mut out);
        out
    }

    #[test]
    /// Verify that descending leaves the parent prefix untouched.
    fn test_prefix_descend_is_independent() {
        let parent = Prefix::root().descend(false);
        let first = parent.descend(false);
        let last = parent.descend(true);

        assert_eq!(parent.depth(), 1);
        assert_eq!(first.depth(), 2);
        assert_eq!(rendered(&parent), "│\t");
        assert_eq!(rendered(&first), "│\t│\t");
        assert_eq!(rendered(&last), "│\t\t");
    }

    #[test]
    /// Verify that only directories survive when files are hidden.
    fn test_entry_visibility() {
        let dir = DirectoryEntry::directory("a");
        let file = DirectoryEntry::file("b.txt", 5);

        assert!(dir.is_visible(false));
        assert!(dir.is_visible(true));
        assert!(!file.is_visible(false));
        assert!(file.is_visible(true));
    }

    #[test]
    /// Verify that names which are not UTF-8 keep their raw bytes for path building.
    fn test_entry_non_utf8_name() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"bad\xffname".to_vec());
        let entry = DirectoryEntry::directory(raw.clone());

        assert_eq!(entry.file_name, raw);
        assert_eq!(entry.name, "bad\u{FFFD}name");
    }
}
