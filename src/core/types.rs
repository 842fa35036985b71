/*!
 * Core Types
 * Common types used across the shell
 */

use std::fmt;

/// Operating-system process ID (`pid_t`)
///
/// Signed on purpose: non-positive values are never valid job pids and are
/// rejected at the job table boundary.
pub type Pid = i32;

/// Small reusable job handle, printed as `%N` / `[N]`
///
/// Handles are unique among live jobs and distinct from OS process ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(pub u32);

impl JobId {
    /// Raw handle value
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
