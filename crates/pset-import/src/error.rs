use pset_auth::AuthError;
use thiserror::Error;

/// Errors that stop a preview or an import as a whole.
///
/// Failures of individual problem writes are not errors at this level; they
/// are reported per entry in `ImportReport::outcomes`.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Every recovery step failed (also returned for blank input).
    #[error(
        "no recoverable content: expected an object with \"content1\", \"content2\", ... keys; edit the payload and retry"
    )]
    NoRecoverableContent,

    #[error("payload is {size} bytes, over the {limit} byte limit (import.max_payload_bytes)")]
    PayloadTooLarge { size: usize, limit: u64 },

    #[error("user id is required")]
    MissingUser,

    #[error("nothing to import: no problem entries")]
    NoEntries,

    /// Session check failed; nothing was written.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The task record could not be created; no problems were written.
    #[error("failed to create task: {0}")]
    TaskCreation(String),
}
