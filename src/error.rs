use std::path::PathBuf;

use thiserror::Error;

use crate::runner::RunError;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Failed to get secret \"{name}\": not found or keychain locked")]
    NotFoundOrLocked {
        name: String,
        #[source]
        source: RunError,
    },

    #[error("Failed to set secret \"{name}\"")]
    WriteFailed {
        name: String,
        #[source]
        source: RunError,
    },

    #[error("Failed to delete secret \"{name}\": not found")]
    NotFound {
        name: String,
        #[source]
        source: RunError,
    },

    #[error("Failed to list secrets: keychain locked or inaccessible")]
    StoreUnavailable {
        #[source]
        source: RunError,
    },

    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Could not determine the home directory.")]
    HomeDirUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
