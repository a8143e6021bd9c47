//! This crate provides a library to render a textual representation of a directory in a tree like
//! fashion.
//!
//! Every directory below the root is listed, and files are listed with their size when asked to.
//! The whole tree is rendered into one buffer. Reading stops at the first directory that cannot
//! be listed, in which case only the error is returned and nothing of the partial tree.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod errors;
pub mod listing;
pub mod options;
pub mod tree_elements;

pub use errors::{Result, TreeError};
pub use listing::{DirectoryListing, FsListing};
pub use options::Options;

use std::path::Path;
use tree_elements::{size_annotation, Prefix, FINAL_BRANCH, INNER_BRANCH};

/// Render the tree for the given command line options.
pub fn tree(options: &Options) -> Result<String> {
    render(&options.path, options.files)
}

/// Generate a tree representation of the filesystem below `path`.
///
/// Directories are always shown, files only if `show_files` is set, each followed by its size.
///
/// # Errors
///
/// Fails if `path` or any directory below it cannot be listed. No partial output is returned.
pub fn render(path: impl AsRef<Path>, show_files: bool) -> Result<String> {
    render_with(&FsListing, path, show_files)
}

/// Generate a tree representation from the listings provided by `lister`.
pub fn render_with(
    lister: &impl DirectoryListing,
    path: impl AsRef<Path>,
    show_files: bool,
) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), show_files, "rendering tree");

    // only this call stack writes to the buffer; it is dropped on the first error
    let mut rendered = String::new();
    render_level(&mut rendered, lister, path, show_files, &Prefix::root())?;
    Ok(rendered)
}

/// Actually do the work of rendering one directory and everything below it.
fn render_level(
    out: &mut String,
    lister: &impl DirectoryListing,
    path: &Path,
    show_files: bool,
    prefix: &Prefix,
) -> Result<()> {
    let entries = lister.list(path)?;
    let total = entries.len();
    let entries: Vec<_> = entries
        .into_iter()
        .filter(|entry| entry.is_visible(show_files))
        .collect();
    tracing::debug!(
        path = %path.display(),
        depth = prefix.depth(),
        total,
        shown = entries.len(),
        "listed directory"
    );

    let entries_len = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i + 1 == entries_len;
        tracing::trace!(name = %entry.name, is_last, "rendering entry");

        prefix.write_to(out);
        out.push_str(if is_last { FINAL_BRANCH } else { INNER_BRANCH });
        out.push_str(&entry.name);

        if entry.is_dir() {
            out.push('\n');
            render_level(
                out,
                lister,
                &path.join(&entry.file_name),
                show_files,
                &prefix.descend(is_last),
            )?;
        } else if show_files {
            out.push(' ');
            out.push_str(&size_annotation(entry.size));
            out.push('\n');
        }
    }

    Ok(())
}
