/*!
 * Shell Limits and Constants
 *
 * Centralized location for the job-control limits and defaults.
 */

// =============================================================================
// JOB TABLE LIMITS
// =============================================================================

/// Default number of concurrently tracked jobs
/// Registration beyond this is a reported, non-fatal failure
pub const MAX_JOBS: usize = 16;

/// Upper bound for a configured table capacity (and therefore for handles)
pub const MAX_JOB_ID: usize = 1 << 16;

// =============================================================================
// INPUT
// =============================================================================

/// Initial capacity of the line buffer used by the read/eval loop
pub const MAX_LINE: usize = 1024;

/// Prompt printed before each command unless prompting is disabled
pub const DEFAULT_PROMPT: &str = "tsh> ";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Overrides the prompt text
pub const ENV_PROMPT: &str = "JOBSHELL_PROMPT";

/// Overrides the job table capacity
pub const ENV_MAX_JOBS: &str = "JOBSHELL_MAX_JOBS";

/// Enables JSON diagnostics on stderr ("1" or "true")
pub const ENV_TRACE_JSON: &str = "JOBSHELL_TRACE_JSON";
