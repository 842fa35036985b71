/*!
 * Signal Types
 * Events delivered into the job-control core and child state changes
 */

use crate::core::types::Pid;
use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::WaitStatus;
use thiserror::Error;

/// Signal operation result
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    #[error("signal setup failed: {0}")]
    Setup(Errno),

    #[error("kill error: {source} (group {pgid}, {signal})")]
    Delivery {
        pgid: Pid,
        signal: Signal,
        source: Errno,
    },

    #[error("waitpid error: {0}")]
    Wait(Errno),

    #[error("signal listener could not start: {0}")]
    Listener(String),
}

/// Event delivered to the job-control core by the signal listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// One or more children exited, were killed, or stopped (SIGCHLD)
    ChildStateChanged,
    /// Interactive interrupt aimed at the shell (SIGINT)
    InterruptRequested,
    /// Interactive stop aimed at the shell (SIGTSTP)
    StopRequested,
    /// Request to terminate the shell (SIGQUIT)
    QuitRequested,
}

impl ShellEvent {
    /// Map a received signal to the event it represents
    pub fn from_signal(signal: Signal) -> Option<Self> {
        match signal {
            Signal::SIGCHLD => Some(ShellEvent::ChildStateChanged),
            Signal::SIGINT => Some(ShellEvent::InterruptRequested),
            Signal::SIGTSTP => Some(ShellEvent::StopRequested),
            Signal::SIGQUIT => Some(ShellEvent::QuitRequested),
            _ => None,
        }
    }
}

/// A state change reported for one child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildChange {
    Exited { pid: Pid, code: i32 },
    Signaled { pid: Pid, signal: Signal },
    Stopped { pid: Pid, signal: Signal },
    Continued { pid: Pid },
}

impl ChildChange {
    /// Convert a wait status; `None` when nothing changed
    pub fn from_wait_status(status: WaitStatus) -> Option<Self> {
        match status {
            WaitStatus::Exited(pid, code) => Some(ChildChange::Exited {
                pid: pid.as_raw(),
                code,
            }),
            WaitStatus::Signaled(pid, signal, _) => Some(ChildChange::Signaled {
                pid: pid.as_raw(),
                signal,
            }),
            WaitStatus::Stopped(pid, signal) => Some(ChildChange::Stopped {
                pid: pid.as_raw(),
                signal,
            }),
            WaitStatus::Continued(pid) => Some(ChildChange::Continued { pid: pid.as_raw() }),
            _ => None,
        }
    }

    pub fn pid(&self) -> Pid {
        match *self {
            ChildChange::Exited { pid, .. }
            | ChildChange::Signaled { pid, .. }
            | ChildChange::Stopped { pid, .. }
            | ChildChange::Continued { pid } => pid,
        }
    }
}
