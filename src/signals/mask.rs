/*!
 * Signal Mask
 * The set of signals the shell receives through its listener thread
 */

use super::types::{SignalError, SignalResult};
use nix::sys::signal::{SigSet, Signal};
use tracing::debug;

/// SIGCHLD, SIGINT, SIGTSTP and SIGQUIT
pub fn shell_signals() -> SigSet {
    let mut set = SigSet::empty();
    set.add(Signal::SIGCHLD);
    set.add(Signal::SIGINT);
    set.add(Signal::SIGTSTP);
    set.add(Signal::SIGQUIT);
    set
}

/// Block `set` in the calling thread
///
/// Threads spawned afterwards inherit the mask, so calling this from `main`
/// before any other thread exists blocks the set process-wide.
pub fn block_in_current_thread(set: &SigSet) -> SignalResult<()> {
    set.thread_block().map_err(SignalError::Setup)?;
    debug!("shell signals blocked in current thread");
    Ok(())
}
