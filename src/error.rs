//! Error types for the transcript boundary.
//!
//! Parsing itself never fails (unknown words degrade, unmatched text is a
//! normal outcome); only loading a transcript can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("transcription job did not complete (status: {0})")]
    JobNotCompleted(String),

    #[error("transcript is empty")]
    EmptyTranscript,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;
