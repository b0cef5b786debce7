//! Sheaf - bundle source files into a single annotated artifact.
//!
//! Sheaf walks a directory tree, keeps the files whose extensions match a
//! requested language set, and concatenates them into one output file with
//! optional per-file boundary annotations, whitespace-only line stripping,
//! and an author header.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sheaf::bundle::{write_bundle, BundleOptions};
//! use sheaf::collector::{collect_files, FileOrdering};
//! use sheaf::languages::ExtensionSet;
//!
//! let extensions = ExtensionSet::resolve("cs md").unwrap();
//! let files = collect_files(Path::new("."), &extensions, FileOrdering::ByPath).unwrap();
//!
//! let options = BundleOptions {
//!     output: "bundle-output.txt".into(),
//!     annotate: true,
//!     strip_empty_lines: false,
//!     author: Some("Dana".to_string()),
//! };
//! write_bundle(&options, &files).unwrap();
//! ```
//!
//! # Modules
//!
//! - [`languages`] - Language token resolution against the extension allow-list
//! - [`collector`] - Recursive file discovery and ordering
//! - [`bundle`] - Writing the single output artifact
//! - [`response`] - Interactive response-file (`@`-file) creation
//! - [`errors`] - Top-level error aggregation and exit codes

pub mod bundle;
pub mod collector;
pub mod errors;
pub mod languages;
pub mod response;

// Re-export key types at crate root for convenience
pub use bundle::{write_bundle, BundleError, BundleOptions, DEFAULT_OUTPUT};
pub use collector::{
    collect_files, collect_files_with_options, CollectError, CollectOptions, FileOrdering,
    SourceFile,
};
pub use errors::SheafError;
pub use languages::{ExtensionSet, LanguageError, ALLOWED_EXTENSIONS, DEFAULT_EXTENSIONS};
pub use response::{
    prompt_answers, response_tokens, write_response_file, ResponseAnswers, ResponseError,
};
