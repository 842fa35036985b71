/*!
 * Control Types
 * Errors and outcomes of job-control requests
 */

use crate::core::types::{JobId, Pid};
use crate::jobs::JobError;
use crate::process::ProcessError;
use crate::signals::SignalError;
use thiserror::Error;

/// Job-control operation result
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors reported to the user by job-control requests
///
/// None of them is fatal to the shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("{command} requires PID or %jobid argument")]
    MissingArgument { command: String },

    #[error("{command}: argument must be a PID or %jobid")]
    InvalidArgument { command: String },

    #[error("%{0}: No such job")]
    NoSuchJob(JobId),

    #[error("({0}): No such process")]
    NoSuchProcess(Pid),

    #[error(transparent)]
    Job(#[from] JobError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Signal(#[from] SignalError),
}

/// Result of a successful launch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub id: JobId,
    pub pid: Pid,
    pub background: bool,
}

/// What the caller must do after an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    /// The shell must exit
    Terminate,
}
