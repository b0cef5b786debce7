//! Recursive file discovery.
//!
//! Uses the `ignore` crate to walk a directory tree and keep the regular
//! files whose extension belongs to a resolved [`ExtensionSet`], returning
//! them in a deterministic order.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use thiserror::Error;

use crate::languages::ExtensionSet;

/// Errors that can occur while collecting files.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Options for directory traversal.
///
/// The defaults enumerate every regular file under the root: hidden entries
/// included, ignore files not consulted.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Respect .gitignore, global gitignore, and .git/info/exclude.
    pub respect_gitignore: bool,
    /// Include hidden files and directories.
    pub include_hidden: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            respect_gitignore: false,
            include_hidden: true,
        }
    }
}

/// A discovered file: its path plus normalized extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path from the traversal root.
    pub path: PathBuf,
    /// Extension with leading dot, lower-cased.
    pub extension: String,
}

impl SourceFile {
    /// Base name of the file (name only, not full path).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Order in which collected files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileOrdering {
    /// Ascending by full path.
    #[default]
    ByPath,
    /// Ascending by extension, then by full path within each group.
    ByExtensionThenPath,
}

impl FileOrdering {
    /// Map the CLI `--sort` value: `code` groups by extension, anything else
    /// (or absence) keeps path order.
    pub fn from_sort_arg(sort: Option<&str>) -> Self {
        match sort {
            Some("code") => FileOrdering::ByExtensionThenPath,
            _ => FileOrdering::ByPath,
        }
    }
}

/// Collect matching files under `root` with default traversal options.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use sheaf::collector::{collect_files, FileOrdering};
/// use sheaf::languages::ExtensionSet;
///
/// let extensions = ExtensionSet::resolve("cs md").unwrap();
/// let files = collect_files(Path::new("."), &extensions, FileOrdering::ByPath).unwrap();
/// for file in &files {
///     println!("{}", file.path.display());
/// }
/// ```
pub fn collect_files(
    root: &Path,
    extensions: &ExtensionSet,
    ordering: FileOrdering,
) -> Result<Vec<SourceFile>, CollectError> {
    collect_files_with_options(root, extensions, ordering, &CollectOptions::default())
}

/// Collect matching files under `root` with custom traversal options.
///
/// Recurses to unbounded depth. Extension matching is case-insensitive. Any
/// traversal error aborts the collection; no partial list is returned. An
/// empty result is `Ok` — the caller decides how to report zero matches.
pub fn collect_files_with_options(
    root: &Path,
    extensions: &ExtensionSet,
    ordering: FileOrdering,
    options: &CollectOptions,
) -> Result<Vec<SourceFile>, CollectError> {
    if !root.exists() {
        return Err(CollectError::NotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(CollectError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!options.include_hidden)
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .parents(options.respect_gitignore)
        .follow_links(false);

    let mut files = Vec::new();
    for result in builder.build() {
        let entry = result.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.into_path();
        let Some(extension) = normalized_extension(&path) else {
            continue;
        };

        if extensions.contains(&extension) {
            files.push(SourceFile { path, extension });
        }
    }

    match ordering {
        FileOrdering::ByPath => files.sort_by(|a, b| a.path.cmp(&b.path)),
        FileOrdering::ByExtensionThenPath => files.sort_by(|a, b| {
            a.extension
                .cmp(&b.extension)
                .then_with(|| a.path.cmp(&b.path))
        }),
    }

    Ok(files)
}

fn normalized_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

fn walk_error(root: &Path, error: ignore::Error) -> CollectError {
    match error {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(source) if source.kind() == std::io::ErrorKind::PermissionDenied => {
                CollectError::PermissionDenied { path }
            }
            ignore::Error::Io(source) => CollectError::Io { path, source },
            other => CollectError::Io {
                path,
                source: std::io::Error::other(other.to_string()),
            },
        },
        ignore::Error::Io(source) if source.kind() == std::io::ErrorKind::PermissionDenied => {
            CollectError::PermissionDenied {
                path: root.to_path_buf(),
            }
        }
        ignore::Error::Io(source) => CollectError::Io {
            path: root.to_path_buf(),
            source,
        },
        other => CollectError::Io {
            path: root.to_path_buf(),
            source: std::io::Error::other(other.to_string()),
        },
    }
}
