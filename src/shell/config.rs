/*!
 * Shell Configuration
 * Defaults, environment overrides and command-line flags
 */

use crate::core::errors::{ShellError, ShellResult};
use crate::core::limits::{
    DEFAULT_PROMPT, ENV_MAX_JOBS, ENV_PROMPT, ENV_TRACE_JSON, MAX_JOBS, MAX_JOB_ID,
};

/// Runtime settings of one shell session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub prompt: String,
    /// Print the prompt before each read
    pub emit_prompt: bool,
    /// Extra diagnostics on stdout and debug tracing
    pub verbose: bool,
    /// Job table capacity
    pub max_jobs: usize,
    /// Emit tracing as JSON
    pub trace_json: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            emit_prompt: true,
            verbose: false,
            max_jobs: MAX_JOBS,
            trace_json: false,
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> ShellResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through `lookup`
    pub fn from_lookup<F>(lookup: F) -> ShellResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prompt) = lookup(ENV_PROMPT) {
            config.prompt = prompt;
        }
        if let Some(raw) = lookup(ENV_MAX_JOBS) {
            config.max_jobs = parse_max_jobs(&raw)?;
        }
        if let Some(raw) = lookup(ENV_TRACE_JSON) {
            config.trace_json = matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true");
        }

        Ok(config)
    }

    /// Apply the `-v` and `-p` flags
    pub fn with_flags(mut self, verbose: bool, no_prompt: bool) -> Self {
        self.verbose |= verbose;
        if no_prompt {
            self.emit_prompt = false;
        }
        self
    }
}

fn parse_max_jobs(raw: &str) -> ShellResult<usize> {
    let value: usize = raw.trim().parse().map_err(|_| {
        ShellError::InvalidConfig(format!("{}={:?} is not a number", ENV_MAX_JOBS, raw))
    })?;
    if value == 0 || value > MAX_JOB_ID {
        return Err(ShellError::InvalidConfig(format!(
            "{}={} must be between 1 and {}",
            ENV_MAX_JOBS, value, MAX_JOB_ID
        )));
    }
    Ok(value)
}
