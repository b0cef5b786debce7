//! Interactive response-file creation.
//!
//! Walks the user through the `bundle` flags once and saves the answers as
//! an `@`-file of newline-separated tokens usable in place of typed flags on
//! later runs.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the response-file flow.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("invalid file name")]
    InvalidFileName,

    #[error("prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Choices gathered for one response file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseAnswers {
    /// Response file name, without the `.rsp` extension.
    pub file_name: String,
    /// Destination bundle path, if given.
    pub output: Option<String>,
    /// Language specification; defaults to `all` when left blank.
    pub language: String,
    /// Bracket each file with boundary annotations.
    pub note: bool,
    /// Sort order, if given.
    pub sort: Option<String>,
    /// Drop whitespace-only lines.
    pub remove_empty_lines: bool,
    /// Author name, if given.
    pub author: Option<String>,
}

/// Run the question/answer flow over the given reader and writer.
///
/// Generic over the I/O handles so tests can drive it with in-memory
/// buffers. A blank response file name fails immediately; every other
/// answer may be left blank.
pub fn prompt_answers(
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<ResponseAnswers, ResponseError> {
    let file_name = ask(
        &mut input,
        &mut output,
        "Enter response file name (without extension): ",
    )?;
    if file_name.is_empty() {
        return Err(ResponseError::InvalidFileName);
    }

    let bundle_output = ask(
        &mut input,
        &mut output,
        "Enter output file path (e.g. result.txt): ",
    )?;
    let language = ask(
        &mut input,
        &mut output,
        "Enter languages (space-separated, or 'all'): ",
    )?;
    let note = is_yes(&ask(&mut input, &mut output, "Include note per file? (yes/no): ")?);
    let sort = ask(
        &mut input,
        &mut output,
        "Sort order (type 'code' or 'name', optional): ",
    )?;
    let remove = is_yes(&ask(&mut input, &mut output, "Remove empty lines? (yes/no): ")?);
    let author = ask(&mut input, &mut output, "Author name (optional): ")?;

    Ok(ResponseAnswers {
        file_name,
        output: non_empty(bundle_output),
        language: if language.is_empty() {
            "all".to_string()
        } else {
            language
        },
        note,
        sort: non_empty(sort),
        remove_empty_lines: remove,
        author: non_empty(author),
    })
}

/// Serialize the answers into the token list a response file holds.
///
/// The `bundle` command comes first, then `--language`; optional value
/// flags follow, bare boolean flags last.
pub fn response_tokens(answers: &ResponseAnswers) -> Vec<String> {
    let mut tokens = vec![
        "bundle".to_string(),
        "--language".to_string(),
        answers.language.clone(),
    ];

    if let Some(output) = &answers.output {
        tokens.push("--output".to_string());
        tokens.push(output.clone());
    }
    if let Some(sort) = &answers.sort {
        tokens.push("--sort".to_string());
        tokens.push(sort.clone());
    }
    if let Some(author) = &answers.author {
        tokens.push("--author".to_string());
        tokens.push(author.clone());
    }
    if answers.note {
        tokens.push("--note".to_string());
    }
    if answers.remove_empty_lines {
        tokens.push("--remove-empty-lines".to_string());
    }

    tokens
}

/// Write `<file_name>.rsp` in the current directory and return its path.
pub fn write_response_file(answers: &ResponseAnswers) -> Result<PathBuf, ResponseError> {
    let path = PathBuf::from(format!("{}.rsp", answers.file_name));
    let mut contents = response_tokens(answers).join("\n");
    contents.push('\n');
    std::fs::write(&path, contents).map_err(|source| ResponseError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn ask(
    input: &mut impl BufRead,
    output: &mut impl Write,
    question: &str,
) -> Result<String, ResponseError> {
    write!(output, "{question}").map_err(ResponseError::Prompt)?;
    output.flush().map_err(ResponseError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(ResponseError::Prompt)?;
    Ok(line.trim().to_string())
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
