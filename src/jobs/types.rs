/*!
 * Job Types
 * Job records, lifecycle states and table errors
 */

use crate::core::types::{JobId, Pid};
use std::fmt;
use thiserror::Error;

/// Job table operation result
pub type JobResult<T> = Result<T, JobError>;

/// Job table errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("Invalid pid: {0}")]
    InvalidPid(Pid),

    #[error("Process {0} is already tracked")]
    DuplicatePid(Pid),

    #[error("Tried to create too many jobs")]
    TableFull { capacity: usize },

    #[error("Job ({current}) already holds the foreground")]
    ForegroundOccupied { current: Pid },

    #[error("({0}): No such process")]
    NotFound(Pid),
}

/// Job state
///
/// Transitions:
/// - Foreground -> Stopped : interactive stop
/// - Stopped -> Foreground : fg
/// - Stopped -> Background : bg
/// - Background -> Foreground : fg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobState {
    /// Holds the shell's attention; at most one at a time
    Foreground,
    /// Running without the shell waiting on it
    Background,
    /// Suspended by a stop signal
    Stopped,
}

impl JobState {
    /// Label used by the `jobs` listing
    pub fn label(&self) -> &'static str {
        match self {
            JobState::Foreground => "Foreground",
            JobState::Background => "Running",
            JobState::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One launched command
///
/// The process group id of a job always equals its pid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub pid: Pid,
    pub id: JobId,
    pub state: JobState,
    pub cmdline: String,
}

impl Job {
    /// Process group the job leads
    pub fn pgid(&self) -> Pid {
        self.pid
    }

    /// `[<handle>] (<pid>) <cmdline>` as announced for background jobs
    pub fn announcement(&self) -> String {
        format!("[{}] ({}) {}", self.id, self.pid, self.cmdline)
    }
}

impl fmt::Display for Job {
    /// `[<handle>] (<pid>) <state-label> <cmdline>` as printed by `jobs`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {} {}",
            self.id,
            self.pid,
            self.state.label(),
            self.cmdline
        )
    }
}
