/*!
 * Signal Listener
 * Dedicated thread that receives the shell's signals synchronously
 *
 * Every shell thread keeps the shell signal set blocked, so pending signals
 * are only ever consumed here with `sigwait`. Each one becomes a
 * `ShellEvent` handled by the job-control core on this thread.
 */

use super::types::{ShellEvent, SignalError, SignalResult};
use crate::control::{EventOutcome, JobControl};
use nix::errno::Errno;
use nix::sys::pthread::Pthread;
use nix::sys::signal::SigSet;
use std::os::unix::thread::JoinHandleExt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

/// Exit status after a quit request
const QUIT_EXIT_CODE: i32 = 1;

/// Handle to the running listener thread
#[derive(Debug)]
pub struct SignalListener {
    handle: JoinHandle<()>,
}

impl SignalListener {
    /// Start receiving `mask` on a new thread
    ///
    /// `mask` must already be blocked in the calling thread so the new
    /// thread inherits it.
    pub fn spawn(mask: SigSet, control: Arc<JobControl>) -> SignalResult<Self> {
        let handle = thread::Builder::new()
            .name("signal-listener".to_string())
            .spawn(move || listen(mask, &control))
            .map_err(|e| SignalError::Listener(e.to_string()))?;

        info!("signal listener started");
        Ok(Self { handle })
    }

    /// Whether the listener thread has stopped
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Thread id for directing a signal at the listener itself
    pub fn pthread(&self) -> Pthread {
        self.handle.as_pthread_t()
    }
}

fn listen(mask: SigSet, control: &JobControl) {
    loop {
        let signal = match mask.wait() {
            Ok(signal) => signal,
            Err(Errno::EINTR) => continue,
            Err(errno) => {
                error!(%errno, "sigwait failed, signal listener stopping");
                return;
            }
        };

        let Some(event) = ShellEvent::from_signal(signal) else {
            debug!(%signal, "ignoring signal outside the shell set");
            continue;
        };

        match control.handle_event(event) {
            Ok(EventOutcome::Handled) => {}
            Ok(EventOutcome::Terminate) => std::process::exit(QUIT_EXIT_CODE),
            Err(e) => control.console().line(&e.to_string()),
        }
    }
}
