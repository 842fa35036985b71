/*!
 * Continue Commands
 * Argument validation for `bg` and `fg`
 */

use super::types::{ControlError, ControlResult};
use crate::core::types::{JobId, Pid};
use std::fmt;

/// Which job a continue command targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSelector {
    /// `%<n>`
    Handle(JobId),
    /// `<pid>`
    Process(Pid),
}

impl JobSelector {
    /// Validate the argument given to `command`
    pub fn parse(command: &str, arg: Option<&str>) -> ControlResult<Self> {
        let arg = arg.ok_or_else(|| ControlError::MissingArgument {
            command: command.to_string(),
        })?;
        let invalid = || ControlError::InvalidArgument {
            command: command.to_string(),
        };

        if let Some(handle) = arg.strip_prefix('%') {
            return parse_number::<u32>(handle)
                .map(|id| JobSelector::Handle(JobId(id)))
                .ok_or_else(invalid);
        }

        parse_number::<Pid>(arg)
            .map(JobSelector::Process)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for JobSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobSelector::Handle(id) => write!(f, "%{}", id),
            JobSelector::Process(pid) => write!(f, "{}", pid),
        }
    }
}

/// Digits only; signs and whitespace are rejected
fn parse_number<T: std::str::FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
