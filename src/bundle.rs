//! Bundle writing.
//!
//! Streams collected source files into a single output artifact, with an
//! optional author header, per-file boundary annotations, and
//! whitespace-only line stripping.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::collector::SourceFile;

/// Output file name used when `--output` is omitted.
pub const DEFAULT_OUTPUT: &str = "bundle-output.txt";

/// Errors that can occur while writing a bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("cannot create {}: {source}", .path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolved configuration for one bundling run.
///
/// Constructed once from parsed arguments, read-only during execution.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Destination file path.
    pub output: PathBuf,
    /// Bracket each file's content with start/end boundary lines.
    pub annotate: bool,
    /// Drop lines that contain only whitespace.
    pub strip_empty_lines: bool,
    /// Author name written as the artifact's first line.
    pub author: Option<String>,
}

/// Write the bundle artifact from the collector-supplied file sequence.
///
/// Files are written strictly in the given order. If the destination cannot
/// be created, nothing is written. If a source file becomes unreadable
/// mid-run, the remaining writes abort and the artifact is left partial; no
/// rollback is attempted.
///
/// Line endings: every line the writer generates itself (author header,
/// boundaries, stripped-mode content) ends with `\n`. Without stripping, the
/// source's raw bytes are written verbatim as a single block, followed by
/// one `\n`.
pub fn write_bundle(options: &BundleOptions, files: &[SourceFile]) -> Result<(), BundleError> {
    let file = File::create(&options.output).map_err(|source| BundleError::CreateFailed {
        path: options.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    if let Some(author) = &options.author {
        writeln!(writer, "// ====== the author: {author} ======")
            .map_err(|e| write_failed(&options.output, e))?;
    }

    for entry in files {
        let name = entry.file_name();

        if options.annotate {
            writeln!(writer, "// ====== Start of {name} ======")
                .map_err(|e| write_failed(&options.output, e))?;
        }

        if options.strip_empty_lines {
            let content = fs::read_to_string(&entry.path).map_err(|source| {
                BundleError::ReadFailed {
                    path: entry.path.clone(),
                    source,
                }
            })?;
            for line in content.lines().filter(|line| !line.trim().is_empty()) {
                writeln!(writer, "{line}").map_err(|e| write_failed(&options.output, e))?;
            }
        } else {
            let content = fs::read(&entry.path).map_err(|source| BundleError::ReadFailed {
                path: entry.path.clone(),
                source,
            })?;
            writer
                .write_all(&content)
                .and_then(|()| writer.write_all(b"\n"))
                .map_err(|e| write_failed(&options.output, e))?;
        }

        if options.annotate {
            writeln!(writer, "// ====== End of {name} ======")
                .map_err(|e| write_failed(&options.output, e))?;
            writeln!(writer).map_err(|e| write_failed(&options.output, e))?;
        }
    }

    writer.flush().map_err(|e| write_failed(&options.output, e))?;
    Ok(())
}

fn write_failed(path: &Path, source: std::io::Error) -> BundleError {
    BundleError::WriteFailed {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source(dir: &TempDir, name: &str, content: &str) -> SourceFile {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        let extension = format!(
            ".{}",
            path.extension().unwrap().to_str().unwrap().to_lowercase()
        );
        SourceFile { path, extension }
    }

    fn opts(dir: &TempDir) -> BundleOptions {
        BundleOptions {
            output: dir.path().join("out.txt"),
            annotate: false,
            strip_empty_lines: false,
            author: None,
        }
    }

    #[test]
    fn test_raw_content_written_verbatim() {
        let dir = TempDir::new().unwrap();
        let file = source(&dir, "a.cs", "class A {\n\n    int x;\n}\n");
        let options = opts(&dir);

        write_bundle(&options, &[file]).unwrap();

        let bundle = fs::read_to_string(&options.output).unwrap();
        assert_eq!(bundle, "class A {\n\n    int x;\n}\n\n");
    }

    #[test]
    fn test_strip_empty_lines_keeps_order() {
        let dir = TempDir::new().unwrap();
        let file = source(&dir, "a.cs", "first\n   \n\nsecond\n\t\nthird\n");
        let options = BundleOptions {
            strip_empty_lines: true,
            ..opts(&dir)
        };

        write_bundle(&options, &[file]).unwrap();

        let bundle = fs::read_to_string(&options.output).unwrap();
        assert_eq!(bundle, "first\nsecond\nthird\n");
    }

    #[test]
    fn test_annotations_bracket_each_file() {
        let dir = TempDir::new().unwrap();
        let file = source(&dir, "a.cs", "class A{}");
        let options = BundleOptions {
            annotate: true,
            ..opts(&dir)
        };

        write_bundle(&options, &[file]).unwrap();

        let bundle = fs::read_to_string(&options.output).unwrap();
        assert_eq!(
            bundle,
            "// ====== Start of a.cs ======\n\
             class A{}\n\
             // ====== End of a.cs ======\n\n"
        );
    }

    #[test]
    fn test_author_line_leads_artifact() {
        let dir = TempDir::new().unwrap();
        let file = source(&dir, "a.cs", "class A{}");
        let options = BundleOptions {
            author: Some("Dana".to_string()),
            ..opts(&dir)
        };

        write_bundle(&options, &[file]).unwrap();

        let bundle = fs::read_to_string(&options.output).unwrap();
        assert!(bundle.starts_with("// ====== the author: Dana ======\n"));
    }

    #[test]
    fn test_no_author_line_when_omitted() {
        let dir = TempDir::new().unwrap();
        let file = source(&dir, "a.cs", "class A{}");
        let options = opts(&dir);

        write_bundle(&options, &[file]).unwrap();

        let bundle = fs::read_to_string(&options.output).unwrap();
        assert!(!bundle.contains("author"));
    }

    #[test]
    fn test_files_written_in_given_order() {
        let dir = TempDir::new().unwrap();
        let b = source(&dir, "b.cs", "class B{}");
        let a = source(&dir, "a.cs", "class A{}");
        let options = opts(&dir);

        write_bundle(&options, &[b, a]).unwrap();

        let bundle = fs::read_to_string(&options.output).unwrap();
        assert_eq!(bundle, "class B{}\nclass A{}\n");
    }

    #[test]
    fn test_unreadable_source_aborts_with_partial_artifact() {
        let dir = TempDir::new().unwrap();
        let good = source(&dir, "a.cs", "class A{}");
        let missing = SourceFile {
            path: dir.path().join("gone.cs"),
            extension: ".cs".to_string(),
        };
        let options = BundleOptions {
            author: Some("Dana".to_string()),
            ..opts(&dir)
        };

        let err = write_bundle(&options, &[good, missing]).unwrap_err();
        assert!(matches!(err, BundleError::ReadFailed { .. }));

        // Artifact exists and may hold everything written before the failure
        assert!(options.output.exists());
    }

    #[test]
    fn test_create_failure_for_bad_destination() {
        let dir = TempDir::new().unwrap();
        let file = source(&dir, "a.cs", "class A{}");
        let options = BundleOptions {
            output: dir.path().join("no-such-dir/out.txt"),
            ..opts(&dir)
        };

        let err = write_bundle(&options, &[file]).unwrap_err();
        assert!(matches!(err, BundleError::CreateFailed { .. }));
    }
}
