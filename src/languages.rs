//! Language token resolution.
//!
//! Maps a user-supplied language specification (`"cs md"`, `".ts"`, `"all"`)
//! onto a normalized, validated set of file extensions drawn from a fixed
//! allow-list.

use thiserror::Error;

/// Extensions selected by the `all` token.
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".cs", ".js", ".ts", ".html", ".css"];

/// Every extension the bundler recognizes.
pub const ALLOWED_EXTENSIONS: [&str; 7] = [".cs", ".js", ".ts", ".html", ".css", ".json", ".md"];

/// Errors from resolving a language specification.
#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("language is not valid: {token}")]
    UnknownLanguage { token: String },
}

/// An ordered, de-duplicated set of normalized file extensions.
///
/// Every member starts with `.`, is lower-case, and belongs to
/// [`ALLOWED_EXTENSIONS`]. Immutable once constructed.
///
/// # Examples
///
/// ```
/// use sheaf::languages::ExtensionSet;
///
/// let set = ExtensionSet::resolve("cs .MD").unwrap();
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![".cs", ".md"]);
/// assert!(set.contains(".CS"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<String>,
}

impl ExtensionSet {
    /// Resolve a raw language specification into an extension set.
    ///
    /// The input is split on whitespace; the single token `all`
    /// (case-insensitive) selects [`DEFAULT_EXTENSIONS`]. Other tokens are
    /// normalized (leading `.`, lower-cased) and collected in first-occurrence
    /// order. Any token outside the allow-list fails the whole resolution.
    pub fn resolve(raw: &str) -> Result<Self, LanguageError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        if tokens.len() == 1 && tokens[0].eq_ignore_ascii_case("all") {
            return Ok(Self {
                extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            });
        }

        let mut extensions: Vec<String> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let ext = normalize_token(token);
            if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
                return Err(LanguageError::UnknownLanguage {
                    token: token.to_string(),
                });
            }
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }

        Ok(Self { extensions })
    }

    /// Check membership, case-insensitively, with or without a leading dot.
    pub fn contains(&self, extension: &str) -> bool {
        let needle = normalize_token(extension);
        self.extensions.iter().any(|e| *e == needle)
    }

    /// Iterate the normalized extensions in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    /// Number of extensions in the set.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

fn normalize_token(token: &str) -> String {
    let lower = token.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}
