/*!
 * Shell Module
 * Command-line front end over the job-control core
 */

pub mod builtins;
pub mod config;
pub mod parser;
pub mod repl;

// Re-export public API
pub use builtins::Builtin;
pub use config::ShellConfig;
pub use parser::{parse_line, ParsedLine};
pub use repl::{Flow, Shell};
