use std::path::PathBuf;

use thiserror::Error;

/// Failure to open or read a statement document. Fatal for that document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document is password protected; supply a password")]
    PasswordRequired,

    #[error("password rejected")]
    IncorrectPassword,

    #[error("unsupported PDF encryption: {0}")]
    UnsupportedEncryption(String),

    #[error("corrupt or unsupported PDF: {0}")]
    Corrupt(String),

    #[error("malformed extraction dump: {0}")]
    Extraction(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
