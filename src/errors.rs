//! Error types for sheaf.

use crate::bundle::BundleError;
use crate::collector::CollectError;
use crate::languages::LanguageError;
use crate::response::ResponseError;

/// Top-level error type for sheaf operations.
#[derive(Debug, thiserror::Error)]
pub enum SheafError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Language(#[from] LanguageError),

    #[error("{0}")]
    Collect(#[from] CollectError),

    #[error("{0}")]
    Bundle(#[from] BundleError),

    #[error("{0}")]
    Response(#[from] ResponseError),
}

/// Map an error to its exit code.
pub fn exit_code(error: &SheafError) -> i32 {
    match error {
        SheafError::Io(_) => 1,
        SheafError::Language(_) => 2,
        SheafError::Collect(_) => 3,
        SheafError::Bundle(_) => 4,
        SheafError::Response(_) => 5,
    }
}
