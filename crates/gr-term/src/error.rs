use thiserror::Error;

/// Result type for terminal operations.
pub type TermResult<T> = Result<T, TermError>;

/// Errors raised while talking to the terminal.
///
/// Output failures are not recoverable: a text adventure nobody can read has
/// nothing left to do, so callers propagate these up and end the session.
#[derive(Debug, Error)]
pub enum TermError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
