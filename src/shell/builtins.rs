/*!
 * Builtin Commands
 * `quit`, `jobs`, `bg` and `fg`, run inside the shell process
 */

use super::repl::Flow;
use crate::control::{ControlResult, JobControl, JobSelector};
use tracing::debug;

/// Commands the shell runs itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Quit,
    Jobs,
    Bg,
    Fg,
}

impl Builtin {
    /// Builtin named `name`, if any
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "quit" => Some(Builtin::Quit),
            "jobs" => Some(Builtin::Jobs),
            "bg" => Some(Builtin::Bg),
            "fg" => Some(Builtin::Fg),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Quit => "quit",
            Builtin::Jobs => "jobs",
            Builtin::Bg => "bg",
            Builtin::Fg => "fg",
        }
    }

    /// Run with the words after the command name
    pub fn run(&self, control: &JobControl, args: &[String]) -> ControlResult<Flow> {
        debug!(builtin = self.name(), ?args, "running builtin");
        match self {
            Builtin::Quit => Ok(Flow::Exit(0)),
            Builtin::Jobs => {
                for job in control.list_jobs() {
                    control.console().line(&job.to_string());
                }
                Ok(Flow::Continue)
            }
            Builtin::Bg | Builtin::Fg => {
                let selector =
                    JobSelector::parse(self.name(), args.first().map(String::as_str))?;
                control.continue_job(selector, *self == Builtin::Fg)?;
                Ok(Flow::Continue)
            }
        }
    }
}
