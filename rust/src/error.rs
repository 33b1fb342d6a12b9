use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons the docstring command leaves a cursor untouched.
///
/// These are reported and logged, never raised: the command always completes.
#[derive(Error, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DocstringError {
    #[error("unsupported file type: {}", path.display())]
    UnrecognizedFile { path: PathBuf },

    #[error("no class/def declaration found before offset {position}")]
    DeclarationNotFound { position: usize },

    #[error("could not parse declaration `{text}`: {message}")]
    ParseFailure { text: String, message: String },
}
