/*!
 * Signal Relay
 * Forwards interactive interrupt and stop requests to the foreground job
 */

use super::types::{SignalError, SignalResult};
use crate::core::types::Pid;
use crate::jobs::{JobState, JobTable};
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid as NixPid;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// Delivers a signal to a whole process group
pub trait GroupSignaler: Send + Sync {
    fn signal_group(&self, pgid: Pid, signal: Signal) -> SignalResult<()>;
}

/// `killpg(2)` backed signaler
#[derive(Debug, Default, Clone, Copy)]
pub struct KillpgSignaler;

impl GroupSignaler for KillpgSignaler {
    fn signal_group(&self, pgid: Pid, signal: Signal) -> SignalResult<()> {
        killpg(NixPid::from_raw(pgid), signal).map_err(|source| SignalError::Delivery {
            pgid,
            signal,
            source,
        })
    }
}

/// Signaler that only records what it was asked to deliver
#[derive(Debug, Default)]
pub struct RecordingSignaler {
    sent: Mutex<Vec<(Pid, Signal)>>,
    fail_with: Option<nix::errno::Errno>,
}

impl RecordingSignaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signaler whose every delivery fails with `errno`
    pub fn failing(errno: nix::errno::Errno) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(errno),
        }
    }

    /// Deliveries requested so far, in order
    pub fn sent(&self) -> Vec<(Pid, Signal)> {
        self.sent.lock().clone()
    }
}

impl GroupSignaler for RecordingSignaler {
    fn signal_group(&self, pgid: Pid, signal: Signal) -> SignalResult<()> {
        self.sent.lock().push((pgid, signal));
        match self.fail_with {
            Some(source) => Err(SignalError::Delivery {
                pgid,
                signal,
                source,
            }),
            None => Ok(()),
        }
    }
}

/// What a relay did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// No foreground job; the request is dropped
    NoForeground,
    /// Signal delivered to the foreground job's group
    Delivered { pid: Pid },
}

/// Forward `signal` to the group of the current foreground job
///
/// A delivered stop request marks the job Stopped immediately, so the
/// foreground slot frees even before the child's stop is reaped. A failed
/// delivery leaves the table unchanged.
pub fn relay_to_foreground(
    table: &mut JobTable,
    signaler: &dyn GroupSignaler,
    signal: Signal,
) -> SignalResult<RelayOutcome> {
    let Some(pid) = table.foreground_pid() else {
        debug!(%signal, "no foreground job, signal dropped");
        return Ok(RelayOutcome::NoForeground);
    };

    signaler.signal_group(pid, signal)?;
    info!(pid, %signal, "relayed signal to foreground group");

    if signal == Signal::SIGTSTP {
        if let Err(e) = table.set_state(pid, JobState::Stopped) {
            warn!(pid, error = %e, "could not mark job stopped");
        }
    }

    Ok(RelayOutcome::Delivered { pid })
}
