/*!
 * Shared fixtures for job control tests
 */

use jobshell::{shell_signals, BufferedConsole, JobControl, ProcessLauncher};
use nix::sys::signal::{kill, killpg, Signal};
use nix::unistd::Pid as NixPid;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub const TIMEOUT: Duration = Duration::from_secs(5);

/// Job control wired to a buffered console and real processes
pub fn control() -> (Arc<JobControl>, Arc<BufferedConsole>) {
    let console = Arc::new(BufferedConsole::new());
    let control = JobControl::new(ProcessLauncher::new(shell_signals()))
        .with_console(console.clone());
    (Arc::new(control), console)
}

pub fn argv(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Poll `condition` until it holds or the timeout expires
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + TIMEOUT;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

pub fn send(pid: i32, signal: Signal) {
    kill(NixPid::from_raw(pid), signal).unwrap();
}

/// Signal the whole process group led by `pid`
pub fn send_group(pid: i32, signal: Signal) {
    killpg(NixPid::from_raw(pid), signal).unwrap();
}

/// Stands in for the signal listener: reaps pending changes in a loop
pub struct Reaper {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Reaper {
    pub fn start(control: &Arc<JobControl>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let handle = {
            let running = Arc::clone(&running);
            let control = Arc::clone(control);
            thread::spawn(move || {
                while running.load(Ordering::Acquire) {
                    control.on_child_changed();
                    thread::sleep(Duration::from_millis(5));
                }
            })
        };
        Self {
            running,
            handle: Some(handle),
        }
    }
}

impl Drop for Reaper {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Kill whatever is still tracked so no test leaks processes
pub fn kill_all(control: &JobControl) {
    for job in control.list_jobs() {
        let _ = kill(NixPid::from_raw(-job.pid), Signal::SIGKILL);
    }
}
