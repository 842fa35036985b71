/*!
 * Process Module
 * OS-level process creation for launched jobs
 */

pub mod launcher;
pub mod types;

// Re-export public API
pub use launcher::ProcessLauncher;
pub use types::{ProcessError, ProcessResult};
