/*!
 * Read/Eval Loop
 * Prompts, reads command lines and routes them to builtins or the launcher
 */

use super::builtins::Builtin;
use super::config::ShellConfig;
use super::parser::parse_line;
use crate::control::JobControl;
use crate::core::errors::ShellResult;
use crate::core::limits::MAX_LINE;
use std::io::BufRead;
use std::sync::Arc;
use tracing::{debug, info};

/// What the loop does after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the loop with this exit status
    Exit(i32),
}

/// Interactive shell session
pub struct Shell {
    control: Arc<JobControl>,
    config: ShellConfig,
}

impl Shell {
    pub fn new(control: Arc<JobControl>, config: ShellConfig) -> Self {
        Self { control, config }
    }

    /// Evaluate one command line
    ///
    /// User errors are printed and the session goes on.
    pub fn eval(&self, line: &str) -> Flow {
        let parsed = parse_line(line);
        let Some(program) = parsed.program() else {
            return Flow::Continue;
        };

        let result = match Builtin::lookup(program) {
            Some(builtin) => builtin.run(&self.control, &parsed.argv[1..]),
            None => {
                let cmdline = line.trim_end_matches(['\n', '\r']);
                self.control
                    .launch(&parsed.argv, parsed.background, cmdline)
                    .map(|_| Flow::Continue)
            }
        };

        result.unwrap_or_else(|e| {
            self.control.console().line(&e.to_string());
            Flow::Continue
        })
    }

    /// Run until `quit` or end of input, returning the exit status
    pub fn run<R: BufRead>(&self, mut input: R) -> ShellResult<i32> {
        let mut line = String::with_capacity(MAX_LINE);
        loop {
            if self.config.emit_prompt {
                self.control.console().prompt(&self.config.prompt);
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("end of input");
                return Ok(0);
            }
            debug!(line = line.trim_end(), "read command line");

            if let Flow::Exit(code) = self.eval(&line) {
                return Ok(code);
            }
        }
    }
}
