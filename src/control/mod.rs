/*!
 * Control Module
 * Job launch, continue commands, foreground waits and event dispatch
 */

pub mod commands;
pub mod manager;
pub mod sync;
pub mod types;

// Re-export public API
pub use commands::JobSelector;
pub use manager::{JobControl, QUIT_NOTICE};
pub use sync::ForegroundSync;
pub use types::{ControlError, ControlResult, EventOutcome, LaunchOutcome};
