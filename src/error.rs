use miette::Diagnostic;
use thiserror::Error;

/// Main error type for roster operations.
///
/// Parsing itself never fails; these cover reading inputs, loading the
/// manifest, and writing output.
#[derive(Error, Diagnostic, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    #[diagnostic(code(roster::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(roster::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(roster::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(roster::output))]
    Output { message: String },

    #[error("Check failed: {message}")]
    #[diagnostic(code(roster::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RosterError>;
