// ABOUTME: Error types for the touying-export application
// ABOUTME: One variant per failure the front-end reports before exiting

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(
        "No input file specified.\n\n\
         Please set DEFAULT_INPUT in src/config.rs or provide a file as argument.\n\n\
         Usage: touying-export <input.typ> [options]\n\n\
         Use --help for more options."
    )]
    UsageError,

    #[error("File not found: {}\nCurrent directory: {}", .path.display(), .cwd.display())]
    NotFoundError { path: PathBuf, cwd: PathBuf },

    #[error("Invalid JSON in --sys-inputs: {input}")]
    InvalidJsonError {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("--sys-inputs must be a JSON object: {input}")]
    SysInputsNotObject { input: String },

    #[error(
        "Access denied - the file may be open in another program.\n\
         File: {}\n\
         Please close any programs that might be using this file and try again.\n\
         Details: {details}",
        .input.display()
    )]
    AccessDeniedError { input: PathBuf, details: String },

    #[error("{0}")]
    GenericConversionError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
