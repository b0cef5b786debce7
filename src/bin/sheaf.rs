//! Sheaf CLI - bundle source files into a single annotated file.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use serde::Serialize;
use sheaf::bundle::{write_bundle, BundleOptions, DEFAULT_OUTPUT};
use sheaf::collector::{collect_files_with_options, CollectOptions, FileOrdering};
use sheaf::errors::{exit_code, SheafError};
use sheaf::languages::{ExtensionSet, ALLOWED_EXTENSIONS, DEFAULT_EXTENSIONS};
use sheaf::response::{prompt_answers, write_response_file};

#[derive(Parser)]
#[command(name = "sheaf")]
#[command(about = "Bundle source files into a single annotated file")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle matching files under the current directory into one file
    Bundle {
        /// Destination file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Space-separated language tokens, or "all"
        #[arg(short, long)]
        language: String,

        /// Bracket each file with start/end boundary lines
        #[arg(short, long)]
        note: bool,

        /// "code" groups files by extension before path order
        #[arg(short, long)]
        sort: Option<String>,

        /// Drop lines that contain only whitespace
        #[arg(short, long)]
        remove_empty_lines: bool,

        /// Author name written as the artifact's first line
        #[arg(short, long)]
        author: Option<String>,

        /// Respect .gitignore patterns while scanning
        #[arg(long)]
        respect_gitignore: bool,

        /// Skip hidden files and directories
        #[arg(long)]
        no_hidden: bool,
    },

    /// Interactively create a response file for the bundle command
    CreateRsp,

    /// Show the recognized language extensions
    Languages {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let args = match expand_response_files(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code(&SheafError::Io(e)));
        }
    };

    let cli = Cli::parse_from(args);

    let result = match cli.command {
        Commands::Bundle {
            output,
            language,
            note,
            sort,
            remove_empty_lines,
            author,
            respect_gitignore,
            no_hidden,
        } => run_bundle(
            output,
            &language,
            note,
            sort.as_deref(),
            remove_empty_lines,
            author,
            respect_gitignore,
            no_hidden,
        ),
        Commands::CreateRsp => run_create_rsp(),
        Commands::Languages { json } => run_languages(json),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sheaf", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(exit_code(&e));
    }
}

/// Expand `@path` arguments into the newline-separated tokens the named
/// file contains, leaving every other argument untouched.
fn expand_response_files(
    args: impl Iterator<Item = OsString>,
) -> Result<Vec<OsString>, io::Error> {
    let mut expanded = Vec::new();
    for arg in args {
        match arg.to_str() {
            Some(s) if s.starts_with('@') && s.len() > 1 => {
                let path = &s[1..];
                let contents = fs::read_to_string(path).map_err(|e| {
                    io::Error::new(e.kind(), format!("cannot read response file {path}: {e}"))
                })?;
                expanded.extend(
                    contents
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty())
                        .map(OsString::from),
                );
            }
            _ => expanded.push(arg),
        }
    }
    Ok(expanded)
}

// --- Bundle command ---

#[allow(clippy::too_many_arguments)]
fn run_bundle(
    output: Option<PathBuf>,
    language: &str,
    note: bool,
    sort: Option<&str>,
    remove_empty_lines: bool,
    author: Option<String>,
    respect_gitignore: bool,
    no_hidden: bool,
) -> Result<(), SheafError> {
    let extensions = ExtensionSet::resolve(language)?;
    let ordering = FileOrdering::from_sort_arg(sort);
    let collect_options = CollectOptions {
        respect_gitignore,
        include_hidden: !no_hidden,
    };

    let root = std::env::current_dir()?;
    let files = collect_files_with_options(&root, &extensions, ordering, &collect_options)?;

    if files.is_empty() {
        println!("no code files found in {}", root.display());
        return Ok(());
    }

    println!("found {} files, bundling...", files.len());

    let options = BundleOptions {
        output: output.unwrap_or_else(|| root.join(DEFAULT_OUTPUT)),
        annotate: note,
        strip_empty_lines: remove_empty_lines,
        author,
    };

    write_bundle(&options, &files)?;
    println!("bundle created: {}", options.output.display());

    Ok(())
}

// --- Create-rsp command ---

fn run_create_rsp() -> Result<(), SheafError> {
    println!("Let's create a response file (.rsp) for the 'bundle' command\n");

    let stdin = io::stdin();
    let answers = prompt_answers(stdin.lock(), io::stdout())?;
    let path = write_response_file(&answers)?;

    println!("\nresponse file created: {}", path.display());
    println!("run it with: sheaf @{}", path.display());

    Ok(())
}

// --- Languages command ---

#[derive(Serialize)]
struct ExtensionInfo {
    extension: String,
    default: bool,
}

fn run_languages(json: bool) -> Result<(), SheafError> {
    let extensions: Vec<ExtensionInfo> = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| ExtensionInfo {
            extension: (*ext).to_string(),
            default: DEFAULT_EXTENSIONS.contains(ext),
        })
        .collect();

    if json {
        #[derive(Serialize)]
        struct Output {
            extensions: Vec<ExtensionInfo>,
        }
        let output = Output { extensions };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| SheafError::Io(io::Error::other(e.to_string())))?;
        println!("{json}");
    } else {
        println!("Recognized extensions:");
        for info in &extensions {
            let marker = if info.default { " (all)" } else { "" };
            println!("  {}{}", info.extension, marker);
        }
    }

    Ok(())
}
