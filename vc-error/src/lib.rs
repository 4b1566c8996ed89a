use std::io;
use thiserror::Error;

pub type SubmitResult<T> = Result<T, SubmitError>;
pub type OnboardResult<T> = Result<T, OnboardError>;

/// Final-submission failures. These are user-facing states, not faults: the
/// summary screen shows the message and keeps the session alive.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Complete all required fields before submitting.")]
    MissingRequiredFields,

    #[error("Missing international prefix. Check the phone number.")]
    MissingPhonePrefix,
}

#[derive(Error, Debug)]
pub enum OnboardError {
    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("No TTY detected. The wizard requires an interactive terminal.")]
    NoTerminal,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Other(String),
}
