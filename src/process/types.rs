/*!
 * Process Types
 * Errors raised while creating a job's process
 */

use thiserror::Error;

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process creation errors
///
/// Each one aborts the command being launched and leaves the shell as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("empty command")]
    EmptyCommand,

    #[error("{0}: Command not found")]
    CommandNotFound(String),

    #[error("fork error: {0}")]
    SpawnFailed(String),
}
