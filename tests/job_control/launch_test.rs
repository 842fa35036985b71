/*!
 * Launch Tests
 * Process groups, registration, foreground waits and exec failures
 */

use super::support::{argv, control, kill_all, send, wait_until, Reaper};
use jobshell::{
    block_in_current_thread, shell_signals, BufferedConsole, ControlError, JobControl, JobState,
    ProcessError, ProcessLauncher,
};
use std::fs;
use std::sync::Arc;
use nix::sys::signal::Signal;
use nix::unistd::{getpgid, Pid as NixPid};
use pretty_assertions::assert_eq;
use serial_test::serial;

#[test]
#[serial]
fn test_background_launch_announces_and_lists() {
    let (control, console) = control();
    let _reaper = Reaper::start(&control);

    let outcome = control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();

    assert_eq!(outcome.id.get(), 1);
    assert!(outcome.background);
    assert_eq!(
        console.lines(),
        vec![format!("[1] ({}) sleep 30 &", outcome.pid)]
    );

    let jobs = control.list_jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].state, JobState::Background);
    assert_eq!(jobs[0].to_string(), format!("[1] ({}) Running sleep 30 &", outcome.pid));

    kill_all(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
    // Killed by something other than an interrupt: no notice
    assert_eq!(console.lines().len(), 1);
}

#[test]
#[serial]
fn test_job_leads_its_own_process_group() {
    let (control, _console) = control();
    let _reaper = Reaper::start(&control);

    let outcome = control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();

    let pgid = getpgid(Some(NixPid::from_raw(outcome.pid))).unwrap();
    assert_eq!(pgid.as_raw(), outcome.pid);
    assert_ne!(pgid, getpgid(None).unwrap());

    kill_all(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
}

#[test]
#[serial]
fn test_foreground_launches_are_serialized() {
    let (control, console) = control();
    let _reaper = Reaper::start(&control);

    let first = control
        .launch(&argv(&["sh", "-c", "exit 3"]), false, "sh -c 'exit 3'")
        .unwrap();
    assert!(control.list_jobs().is_empty());

    let second = control.launch(&argv(&["true"]), false, "true").unwrap();
    assert!(control.list_jobs().is_empty());

    // The first handle was released before the second registration
    assert_eq!(first.id, second.id);
    assert_ne!(first.pid, second.pid);
    assert!(console.lines().is_empty());
}

#[test]
#[serial]
fn test_missing_program_is_reported_without_state_change() {
    let (control, _console) = control();

    let err = control
        .launch(&argv(&["/no/such/program"]), false, "/no/such/program")
        .unwrap_err();

    assert_eq!(
        err,
        ControlError::Process(ProcessError::CommandNotFound(
            "/no/such/program".to_string()
        ))
    );
    assert_eq!(err.to_string(), "/no/such/program: Command not found");
    assert!(control.list_jobs().is_empty());
}

#[test]
#[serial]
fn test_running_jobs_survive_notification() {
    let (control, console) = control();

    let bg = control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();
    control.on_child_changed();
    assert_eq!(control.list_jobs().len(), 1);

    send(bg.pid, Signal::SIGKILL);
    let _reaper = Reaper::start(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
    assert_eq!(console.lines().len(), 1);
}

#[test]
#[serial]
fn test_full_table_is_reported() {
    let (control, _console) = control();
    let _reaper = Reaper::start(&control);
    {
        let mut table = control.suppress_notifications();
        for pid in 0..table.capacity() as i32 {
            // Placeholder entries far above any real pid
            table
                .register(4_000_000 + pid, JobState::Stopped, "placeholder")
                .unwrap();
        }
    }

    let err = control
        .launch(&argv(&["true"]), false, "true")
        .unwrap_err();
    assert_eq!(err.to_string(), "Tried to create too many jobs");

    // The unregistered process is reaped without touching the table
    std::thread::sleep(std::time::Duration::from_millis(50));
    let capacity = control.suppress_notifications().capacity();
    assert_eq!(control.list_jobs().len(), capacity);
}

/// Hex `SigBlk` mask from a `/proc/.../status` file
fn blocked_mask(status_path: &str) -> String {
    fs::read_to_string(status_path)
        .unwrap()
        .lines()
        .find_map(|line| line.strip_prefix("SigBlk:"))
        .map(|mask| mask.trim().to_string())
        .unwrap()
}

#[test]
#[serial]
fn test_child_does_not_inherit_blocked_shell_signals() {
    let mask = shell_signals();
    block_in_current_thread(&mask).unwrap();
    assert!(blocked_mask("/proc/thread-self/status")
        .chars()
        .any(|c| c != '0'));

    let (control, _console) = control();
    let outcome = control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();

    let child_mask = blocked_mask(&format!("/proc/{}/status", outcome.pid));
    let pgid = getpgid(Some(NixPid::from_raw(outcome.pid))).unwrap();

    kill_all(&control);
    let _reaper = Reaper::start(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
    mask.thread_unblock().unwrap();

    assert!(child_mask.chars().all(|c| c == '0'), "SigBlk {}", child_mask);
    assert_eq!(pgid.as_raw(), outcome.pid);
}

#[test]
#[serial]
fn test_verbose_launch_reports_registration() {
    let console = Arc::new(BufferedConsole::new());
    let control = Arc::new(
        JobControl::new(ProcessLauncher::new(shell_signals()))
            .with_console(console.clone())
            .with_verbose(true),
    );
    let _reaper = Reaper::start(&control);

    let outcome = control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();

    assert_eq!(
        console.lines(),
        vec![
            format!("Added job [1] {} sleep 30 &", outcome.pid),
            format!("[1] ({}) sleep 30 &", outcome.pid),
        ]
    );

    kill_all(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
}
