/*!
 * Foreground Synchronizer
 * Blocks the request path while a job holds the foreground
 *
 * The wait is paired with the job table mutex: the predicate is checked
 * with the guard held and the guard is released atomically on suspension,
 * so a state change published by the reaper between check and wait cannot
 * be missed.
 */

use crate::core::types::Pid;
use crate::jobs::JobTable;
use parking_lot::{Condvar, MutexGuard};
use tracing::debug;

/// Wake-up channel for "the foreground job changed"
#[derive(Debug, Default)]
pub struct ForegroundSync {
    changed: Condvar,
}

impl ForegroundSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend until `pid` is no longer the foreground job
    ///
    /// Returns immediately when it already is not. Returns the number of
    /// wake-ups observed, spurious ones included.
    pub fn wait_while_foreground(&self, table: &mut MutexGuard<'_, JobTable>, pid: Pid) -> usize {
        let mut wakeups = 0;
        while table.foreground_pid() == Some(pid) {
            self.changed.wait(table);
            wakeups += 1;
        }
        debug!(pid, wakeups, "foreground wait finished");
        wakeups
    }

    /// Wake every waiter so it re-checks its predicate
    pub fn notify(&self) {
        self.changed.notify_all();
    }
}
