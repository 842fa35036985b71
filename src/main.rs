/*!
 * Job Shell - Main Entry Point
 *
 * Startup order matters: the shell signal set is blocked in the main thread
 * before any other thread exists, so every thread inherits the mask and
 * only the signal listener ever consumes those signals.
 */

use clap::Parser;
use jobshell::{
    block_in_current_thread, init_tracing, shell_signals, JobControl, ProcessLauncher, Shell,
    ShellConfig, ShellError, SignalListener,
};
use std::sync::Arc;
use tracing::info;

/// Tiny job-control shell
#[derive(Parser, Debug)]
#[command(name = "jobshell", version, about)]
struct Cli {
    /// Print additional diagnostic information
    #[arg(short, long)]
    verbose: bool,

    /// Do not emit a command prompt
    #[arg(short = 'p', long = "no-prompt")]
    no_prompt: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let config = ShellConfig::from_env()?.with_flags(cli.verbose, cli.no_prompt);
    init_tracing(&config);

    let mask = shell_signals();
    block_in_current_thread(&mask).map_err(ShellError::from)?;

    let control = Arc::new(
        JobControl::new(ProcessLauncher::new(mask))
            .with_capacity(config.max_jobs)
            .with_verbose(config.verbose),
    );
    let _listener = SignalListener::spawn(mask, Arc::clone(&control)).map_err(ShellError::from)?;
    info!(capacity = config.max_jobs, "job shell ready");

    let shell = Shell::new(control, config);
    let code = shell.run(std::io::stdin().lock())?;
    std::process::exit(code)
}
