use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tmm operations
#[derive(Error, Diagnostic, Debug)]
pub enum TmmError {
    #[error("No input files given")]
    #[diagnostic(
        code(tmm::empty_input),
        help("Pass one or more image files, e.g. `tmm merge a.png b.png`")
    )]
    EmptyInput,

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(tmm::config))]
    InvalidConfiguration { message: String },

    #[error("Could not open file {}", path.display())]
    #[diagnostic(code(tmm::file_not_found), help("File not found."))]
    FileNotFound { path: PathBuf },

    #[error("Failed to decode {}: {message}", path.display())]
    #[diagnostic(
        code(tmm::decode),
        help("Use --force-truncated to accept truncated or checksum-damaged images")
    )]
    Decode { path: PathBuf, message: String },

    #[error("Failed to write {}: {message}", path.display())]
    #[diagnostic(code(tmm::encode))]
    Encode { path: PathBuf, message: String },

    #[error("IO error with {}: {message}", path.display())]
    #[diagnostic(code(tmm::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tmm::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TmmError>;
