/*!
 * Core Module
 * Fundamental shell types, limits, console output and fatal errors
 */

pub mod console;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use console::{BufferedConsole, Console, StdoutConsole};
pub use errors::{ShellError, ShellResult};
pub use types::{JobId, Pid};
