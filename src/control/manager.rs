/*!
 * Job Control
 * The job-control core shared by the request path and the signal listener
 *
 * Lock discipline: the job table mutex is the only lock. Holding it keeps
 * the notification handler out, because the handler takes it before it
 * reaps anything. Launches hold it from process creation until the job is
 * registered; foreground waits release it only while suspended.
 */

use super::commands::JobSelector;
use super::sync::ForegroundSync;
use super::types::{ControlError, ControlResult, EventOutcome, LaunchOutcome};
use crate::core::console::{Console, StdoutConsole};
use crate::jobs::{Job, JobState, JobTable};
use crate::process::ProcessLauncher;
use crate::signals::{
    drain_changes, relay_to_foreground, ChildStatusSource, GroupSignaler, KillpgSignaler,
    RelayOutcome, ShellEvent, WaitPidSource,
};
use nix::sys::signal::Signal;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Printed before the shell exits on a quit request
pub const QUIT_NOTICE: &str = "Terminating after receipt of SIGQUIT signal";

/// Job-control core
pub struct JobControl {
    table: Mutex<JobTable>,
    foreground: ForegroundSync,
    launcher: ProcessLauncher,
    signaler: Arc<dyn GroupSignaler>,
    console: Arc<dyn Console>,
    verbose: bool,
}

impl JobControl {
    /// Core with a default-sized table, stdout console and `killpg` delivery
    pub fn new(launcher: ProcessLauncher) -> Self {
        Self {
            table: Mutex::new(JobTable::new()),
            foreground: ForegroundSync::new(),
            launcher,
            signaler: Arc::new(KillpgSignaler),
            console: Arc::new(StdoutConsole),
            verbose: false,
        }
    }

    /// Replace the table with an empty one of `capacity` slots
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.table = Mutex::new(JobTable::with_capacity(capacity));
        self
    }

    pub fn with_console(mut self, console: Arc<dyn Console>) -> Self {
        self.console = console;
        self
    }

    pub fn with_signaler(mut self, signaler: Arc<dyn GroupSignaler>) -> Self {
        self.signaler = signaler;
        self
    }

    /// Also announce every registration
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Where user-visible output goes
    pub fn console(&self) -> &dyn Console {
        self.console.as_ref()
    }

    /// Lock the job table; child notifications wait until the guard drops
    pub fn suppress_notifications(&self) -> MutexGuard<'_, JobTable> {
        self.table.lock()
    }

    /// Create and register a job for `argv`
    ///
    /// A foreground job is waited for before returning. A registration
    /// failure is returned after the process was created; such a process
    /// is not waited for.
    #[instrument(skip(self, argv), fields(program = argv.first().map(String::as_str)))]
    pub fn launch(
        &self,
        argv: &[String],
        background: bool,
        cmdline: &str,
    ) -> ControlResult<LaunchOutcome> {
        let state = if background {
            JobState::Background
        } else {
            JobState::Foreground
        };

        let mut table = self.suppress_notifications();
        let pid = self.launcher.spawn(argv)?;
        let id = match table.register(pid, state, cmdline) {
            Ok(id) => id,
            Err(e) => {
                warn!(pid, error = %e, "launched process could not be registered");
                return Err(e.into());
            }
        };

        if self.verbose {
            self.console
                .line(&format!("Added job [{}] {} {}", id, pid, cmdline));
        }

        if background {
            if let Some(job) = table.find_by_pid(pid) {
                self.console.line(&job.announcement());
            }
        } else {
            self.foreground.wait_while_foreground(&mut table, pid);
        }

        Ok(LaunchOutcome {
            id,
            pid,
            background,
        })
    }

    /// Resume the selected job in the foreground or background
    ///
    /// The whole group receives SIGCONT. A foreground continue waits like a
    /// foreground launch; a background continue announces the job.
    #[instrument(skip(self))]
    pub fn continue_job(&self, selector: JobSelector, to_foreground: bool) -> ControlResult<Job> {
        let mut table = self.suppress_notifications();

        let job = match selector {
            JobSelector::Handle(id) => table.find_by_id(id).ok_or(ControlError::NoSuchJob(id)),
            JobSelector::Process(pid) => table
                .find_by_pid(pid)
                .ok_or(ControlError::NoSuchProcess(pid)),
        }?
        .clone();

        let target = if to_foreground {
            JobState::Foreground
        } else {
            JobState::Background
        };
        let previous = table.set_state(job.pid, target)?;

        if let Err(e) = self.signaler.signal_group(job.pgid(), Signal::SIGCONT) {
            if let Err(rollback) = table.set_state(job.pid, previous) {
                warn!(
                    job = %job.id,
                    pid = job.pid,
                    error = %rollback,
                    "could not restore job state"
                );
            }
            return Err(e.into());
        }
        info!(job = %job.id, pid = job.pid, from = ?previous, to = ?target, "continued job");

        if to_foreground {
            self.foreground.wait_while_foreground(&mut table, job.pid);
        } else {
            self.console.line(&job.announcement());
        }

        Ok(Job {
            state: target,
            ..job
        })
    }

    /// Current jobs in table order
    pub fn list_jobs(&self) -> Vec<Job> {
        self.table.lock().snapshot_for_listing().cloned().collect()
    }

    /// Reap every pending child state change
    pub fn on_child_changed(&self) {
        self.on_child_changed_from(&mut WaitPidSource);
    }

    /// Apply every pending change reported by `source`
    pub fn on_child_changed_from(&self, source: &mut dyn ChildStatusSource) {
        let mut table = self.suppress_notifications();
        let (notices, released_foreground) = drain_changes(&mut table, source);

        for notice in &notices {
            self.console.line(&notice.to_string());
        }
        if released_foreground {
            self.foreground.notify();
        }
    }

    /// Forward an interrupt request to the foreground job
    pub fn on_interrupt(&self) -> ControlResult<RelayOutcome> {
        self.relay(Signal::SIGINT)
    }

    /// Forward a stop request to the foreground job
    pub fn on_stop(&self) -> ControlResult<RelayOutcome> {
        self.relay(Signal::SIGTSTP)
    }

    /// Dispatch one event from the signal listener
    pub fn handle_event(&self, event: ShellEvent) -> ControlResult<EventOutcome> {
        debug!(?event, "handling shell event");
        match event {
            ShellEvent::ChildStateChanged => self.on_child_changed(),
            ShellEvent::InterruptRequested => {
                self.on_interrupt()?;
            }
            ShellEvent::StopRequested => {
                self.on_stop()?;
            }
            ShellEvent::QuitRequested => {
                self.console.line(QUIT_NOTICE);
                return Ok(EventOutcome::Terminate);
            }
        }
        Ok(EventOutcome::Handled)
    }

    fn relay(&self, signal: Signal) -> ControlResult<RelayOutcome> {
        let mut table = self.suppress_notifications();
        let outcome = relay_to_foreground(&mut table, self.signaler.as_ref(), signal)?;

        if signal == Signal::SIGTSTP && matches!(outcome, RelayOutcome::Delivered { .. }) {
            self.foreground.notify();
        }
        Ok(outcome)
    }
}
