/*!
 * Jobs Module
 * Bounded registry of the jobs launched by this shell session
 */

pub mod table;
pub mod types;

// Re-export public API
pub use table::JobTable;
pub use types::{Job, JobError, JobResult, JobState};
