/*!
 * Job Shell Library
 * Job control for a small interactive Unix shell
 *
 * Launches commands in their own process groups, tracks them in a bounded
 * job table, reaps child state changes on a dedicated signal thread, relays
 * interrupt and stop requests to the foreground job, and resumes stopped
 * jobs with `bg`/`fg`.
 */

pub mod control;
pub mod core;
pub mod jobs;
pub mod monitoring;
pub mod process;
pub mod shell;
pub mod signals;

// Re-exports
pub use control::{ControlError, ControlResult, EventOutcome, JobControl, JobSelector, LaunchOutcome};
pub use crate::core::{BufferedConsole, Console, JobId, Pid, ShellError, ShellResult, StdoutConsole};
pub use jobs::{Job, JobError, JobState, JobTable};
pub use monitoring::init_tracing;
pub use process::{ProcessError, ProcessLauncher};
pub use shell::{parse_line, Builtin, Flow, ParsedLine, Shell, ShellConfig};
pub use signals::{block_in_current_thread, shell_signals, ShellEvent, SignalError, SignalListener};
