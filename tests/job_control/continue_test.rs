/*!
 * Continue Tests
 * Stopped jobs resumed with bg and fg
 */

use super::support::{argv, control, kill_all, send, send_group, wait_until, Reaper};
use jobshell::{JobId, JobSelector, JobState};
use nix::sys::signal::Signal;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::sync::Arc;
use std::thread;

#[test]
#[serial]
fn test_stop_background_then_foreground_until_killed() {
    let (control, console) = control();
    let _reaper = Reaper::start(&control);

    let bg = control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();

    send_group(bg.pid, Signal::SIGSTOP);
    let notice = format!("job [1] ({}) stopped by signal 19", bg.pid);
    assert!(wait_until(|| console.contains(&notice)));
    assert_eq!(control.list_jobs()[0].state, JobState::Stopped);

    let waiter = {
        let control = Arc::clone(&control);
        thread::spawn(move || control.continue_job(JobSelector::Handle(JobId(1)), true))
    };
    assert!(wait_until(
        || control.suppress_notifications().foreground_pid() == Some(bg.pid)
    ));

    send(bg.pid, Signal::SIGKILL);
    let job = waiter.join().unwrap().unwrap();

    assert_eq!(job.pid, bg.pid);
    assert_eq!(job.state, JobState::Foreground);
    assert!(control.list_jobs().is_empty());
}

#[test]
#[serial]
fn test_bg_resumes_stopped_job() {
    let (control, console) = control();
    let _reaper = Reaper::start(&control);

    let bg = control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();
    send_group(bg.pid, Signal::SIGTSTP);
    assert!(wait_until(
        || control.list_jobs()[0].state == JobState::Stopped
    ));

    let job = control
        .continue_job(JobSelector::Process(bg.pid), false)
        .unwrap();

    assert_eq!(job.state, JobState::Background);
    assert_eq!(control.list_jobs()[0].state, JobState::Background);
    let announcement = format!("[1] ({}) sleep 30 &", bg.pid);
    assert_eq!(
        console.lines().iter().filter(|l| **l == announcement).count(),
        2
    );

    kill_all(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
}

#[test]
#[serial]
fn test_handles_are_recycled() {
    let (control, _console) = control();
    let _reaper = Reaper::start(&control);

    let mut pids = Vec::new();
    for _ in 0..3 {
        pids.push(
            control
                .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
                .unwrap()
                .pid,
        );
    }

    send(pids[2], Signal::SIGKILL);
    assert!(wait_until(|| control.list_jobs().len() == 2));

    let next = control
        .launch(&argv(&["sleep", "30"]), true, "sleep 30 &")
        .unwrap();
    assert_eq!(next.id.get(), 3);

    kill_all(&control);
    assert!(wait_until(|| control.list_jobs().is_empty()));
}
