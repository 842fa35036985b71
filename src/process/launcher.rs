/*!
 * Process Launcher
 * Spawns each job as the leader of its own process group
 *
 * A fresh process group per job means keyboard-generated signals relayed to
 * `-pid` reach exactly that job and never the shell or a sibling job.
 */

use super::types::{ProcessError, ProcessResult};
use crate::core::types::Pid;
use nix::errno::Errno;
use nix::sys::signal::{sigprocmask, SigSet, SigmaskHow};
use std::io;
use std::os::unix::process::CommandExt;
use std::process::Command;
use tracing::{debug, info, warn};

/// Creates job processes
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    /// Signals the shell keeps blocked; unblocked again in every child
    inherited_mask: SigSet,
}

impl ProcessLauncher {
    /// Launcher whose children unblock `inherited_mask` before exec
    pub fn new(inherited_mask: SigSet) -> Self {
        Self { inherited_mask }
    }

    /// Spawn `argv` in a new process group and return its pid
    ///
    /// The returned process is not waited on; reaping belongs to the
    /// notification handler.
    pub fn spawn(&self, argv: &[String]) -> ProcessResult<Pid> {
        let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;

        let mut command = Command::new(program);
        command.args(args).process_group(0);

        let mask = self.inherited_mask;
        // SAFETY: the closure runs between fork and exec and only calls
        // sigprocmask, which is async-signal-safe. It allocates nothing.
        unsafe {
            command.pre_exec(move || {
                sigprocmask(SigmaskHow::SIG_UNBLOCK, Some(&mask), None).map_err(io::Error::from)
            });
        }

        let child = command.spawn().map_err(|e| classify_spawn_error(program, &e))?;
        let pid = child.id() as Pid;
        info!(pid, program = %program, "spawned job process");

        // Dropping the handle neither kills nor waits for the child
        drop(child);
        Ok(pid)
    }
}

/// Exec failures mean the program image could not be loaded; anything else
/// is a failure to create the process at all.
fn classify_spawn_error(program: &str, err: &io::Error) -> ProcessError {
    match err.raw_os_error().map(Errno::from_raw) {
        Some(Errno::ENOENT | Errno::EACCES | Errno::ENOEXEC | Errno::ENOTDIR | Errno::ELOOP) => {
            debug!(program, error = %err, "program image could not be loaded");
            ProcessError::CommandNotFound(program.to_string())
        }
        _ => {
            warn!(program, error = %err, "process creation failed");
            ProcessError::SpawnFailed(err.to_string())
        }
    }
}
