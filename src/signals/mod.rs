/*!
 * Signals Module
 * Asynchronous job notifications: child state changes, interrupt and stop relays
 *
 * The shell keeps its signal set blocked in every thread. A dedicated
 * listener thread receives those signals synchronously and turns them into
 * `ShellEvent`s for the job-control core.
 */

pub mod listener;
pub mod mask;
pub mod reaper;
pub mod relay;
pub mod types;

// Re-export public API
pub use listener::SignalListener;
pub use mask::{block_in_current_thread, shell_signals};
pub use reaper::{apply_change, drain_changes, Applied, ChildStatusSource, JobNotice, WaitPidSource};
pub use relay::{relay_to_foreground, GroupSignaler, KillpgSignaler, RecordingSignaler, RelayOutcome};
pub use types::{ChildChange, ShellEvent, SignalError, SignalResult};
