/*!
 * Error Types
 * Shell-fatal errors rendered through miette at the process boundary
 */

use miette::Diagnostic;
use thiserror::Error;

/// Result alias for shell-fatal operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Conditions that terminate the shell
///
/// Everything else (bad arguments, failed launches, full table, failed
/// relays) is reported where it is detected and the shell keeps running.
#[derive(Error, Debug, Diagnostic)]
pub enum ShellError {
    #[error("Signal setup failed: {0}")]
    #[diagnostic(
        code(shell::signal_setup),
        help("The shell cannot run job control without its signal listener.")
    )]
    SignalSetup(String),

    #[error("fgets error: {0}")]
    #[diagnostic(code(shell::input), help("Standard input could not be read."))]
    Input(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(shell::config),
        help("Check the JOBSHELL_* environment variables.")
    )]
    InvalidConfig(String),
}

impl From<crate::signals::SignalError> for ShellError {
    fn from(err: crate::signals::SignalError) -> Self {
        ShellError::SignalSetup(err.to_string())
    }
}
