/*!
 * Relay Tests
 * Interrupt and stop requests forwarded to the foreground group
 */

use super::support::{argv, control, kill_all, wait_until, Reaper};
use jobshell::JobState;
use jobshell::signals::RelayOutcome;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::sync::Arc;
use std::thread;

#[test]
#[serial]
fn test_interrupt_terminates_foreground_job() {
    let (control, console) = control();
    let _reaper = Reaper::start(&control);

    let launcher = {
        let control = Arc::clone(&control);
        thread::spawn(move || control.launch(&argv(&["sleep", "30"]), false, "sleep 30"))
    };
    assert!(wait_until(|| control.suppress_notifications().foreground_pid().is_some()));
    let pid = control.suppress_notifications().foreground_pid().unwrap();

    assert_eq!(
        control.on_interrupt().unwrap(),
        RelayOutcome::Delivered { pid }
    );

    let outcome = launcher.join().unwrap().unwrap();
    assert_eq!(outcome.pid, pid);
    assert!(control.list_jobs().is_empty());
    assert_eq!(
        console.lines(),
        vec![format!("job [1] ({}) terminated by signal 2", pid)]
    );
}

#[test]
#[serial]
fn test_stop_returns_control_and_keeps_job() {
    let (control, console) = control();
    let _reaper = Reaper::start(&control);

    let launcher = {
        let control = Arc::clone(&control);
        thread::spawn(move || control.launch(&argv(&["sleep", "30"]), false, "sleep 30"))
    };
    assert!(wait_until(|| control.suppress_notifications().foreground_pid().is_some()));

    let RelayOutcome::Delivered { pid } = control.on_stop().unwrap() else {
        panic!("stop request was not delivered");
    };

    launcher.join().unwrap().unwrap();
    let notice = format!("job [1] ({}) stopped by signal 20", pid);
    assert!(wait_until(|| console.contains(&notice)));

    let jobs = control.list_jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].state, JobState::Stopped);
    assert_eq!(control.suppress_notifications().foreground_pid(), None);

    kill_all(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
}

#[test]
#[serial]
fn test_requests_without_foreground_are_dropped() {
    let (control, console) = control();
    let _reaper = Reaper::start(&control);

    control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();

    assert_eq!(control.on_interrupt().unwrap(), RelayOutcome::NoForeground);
    assert_eq!(control.on_stop().unwrap(), RelayOutcome::NoForeground);
    assert_eq!(control.list_jobs()[0].state, JobState::Background);
    assert_eq!(console.lines().len(), 1);

    kill_all(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
}
