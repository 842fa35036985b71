/*!
 * Child Reaper
 * Notification handler for child state changes
 *
 * Drains every pending change without blocking, then applies each one to
 * the job table: exits and kills delete the job, stops mark it Stopped.
 * Children that are still running are left for a later notification.
 */

use super::types::{ChildChange, SignalError, SignalResult};
use crate::core::types::{JobId, Pid};
use crate::jobs::{JobState, JobTable};
use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitPidFlag};
use nix::unistd::Pid as NixPid;
use std::fmt;
use tracing::{debug, info, warn};

/// Source of pending child state changes
pub trait ChildStatusSource {
    /// Next already-pending change, `None` once nothing more is pending
    fn next_change(&mut self) -> SignalResult<Option<ChildChange>>;
}

/// `waitpid(-1, WNOHANG | WUNTRACED)` over every child of this process
#[derive(Debug, Default, Clone, Copy)]
pub struct WaitPidSource;

impl ChildStatusSource for WaitPidSource {
    fn next_change(&mut self) -> SignalResult<Option<ChildChange>> {
        let flags = WaitPidFlag::WNOHANG | WaitPidFlag::WUNTRACED;
        loop {
            match waitpid(NixPid::from_raw(-1), Some(flags)) {
                Ok(status) => return Ok(ChildChange::from_wait_status(status)),
                Err(Errno::EINTR) => continue,
                Err(Errno::ECHILD) => return Ok(None),
                Err(errno) => return Err(SignalError::Wait(errno)),
            }
        }
    }
}

/// User-visible notice produced while reaping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobNotice {
    Terminated { id: JobId, pid: Pid, signal: Signal },
    Stopped { id: JobId, pid: Pid, signal: Signal },
}

impl fmt::Display for JobNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            JobNotice::Terminated { id, pid, signal } => write!(
                f,
                "job [{}] ({}) terminated by signal {}",
                id, pid, signal as i32
            ),
            JobNotice::Stopped { id, pid, signal } => write!(
                f,
                "job [{}] ({}) stopped by signal {}",
                id, pid, signal as i32
            ),
        }
    }
}

/// Result of applying one change to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Applied {
    pub notice: Option<JobNotice>,
    /// The change took the job out of the Foreground state
    pub released_foreground: bool,
}

/// Apply one child state change to the table
pub fn apply_change(table: &mut JobTable, change: ChildChange) -> Applied {
    let pid = change.pid();
    let Some(job) = table.find_by_pid(pid) else {
        debug!(pid, ?change, "state change for untracked child");
        return Applied::default();
    };
    let id = job.id;
    let was_foreground = job.state == JobState::Foreground;

    match change {
        ChildChange::Exited { code, .. } => {
            table.release(pid);
            info!(job = %id, pid, code, "job exited");
            Applied {
                notice: None,
                released_foreground: was_foreground,
            }
        }
        ChildChange::Signaled { signal, .. } => {
            table.release(pid);
            info!(job = %id, pid, %signal, "job killed by signal");
            // Only interrupts are reported to the user
            let notice = (signal == Signal::SIGINT)
                .then_some(JobNotice::Terminated { id, pid, signal });
            Applied {
                notice,
                released_foreground: was_foreground,
            }
        }
        ChildChange::Stopped { signal, .. } => {
            if let Err(e) = table.set_state(pid, JobState::Stopped) {
                warn!(job = %id, pid, error = %e, "could not mark job stopped");
            }
            info!(job = %id, pid, %signal, "job stopped");
            Applied {
                notice: Some(JobNotice::Stopped { id, pid, signal }),
                released_foreground: was_foreground,
            }
        }
        ChildChange::Continued { .. } => Applied::default(),
    }
}

/// Drain every pending change from `source` into `table`
///
/// Returns the notices in the order the changes were observed and whether
/// the foreground slot was freed. A source error ends the drain early; what
/// was already applied stays applied.
pub fn drain_changes(
    table: &mut JobTable,
    source: &mut dyn ChildStatusSource,
) -> (Vec<JobNotice>, bool) {
    let mut notices = Vec::new();
    let mut released = false;

    loop {
        match source.next_change() {
            Ok(Some(change)) => {
                let applied = apply_change(table, change);
                notices.extend(applied.notice);
                released |= applied.released_foreground;
            }
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "stopped draining child state changes");
                break;
            }
        }
    }

    (notices, released)
}
