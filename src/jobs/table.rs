/*!
 * Job Table
 * Fixed-capacity slot arena keyed by pid, with recyclable small handles
 *
 * Handles are allocated from `next_id`. Releasing a job resets the
 * allocator to one past the largest live handle, so a long session keeps
 * reusing small numbers instead of counting upward forever.
 */

use super::types::{Job, JobError, JobResult, JobState};
use crate::core::limits::MAX_JOBS;
use crate::core::types::{JobId, Pid};
use tracing::{debug, info, warn};

/// Bounded, ordered collection of job slots
#[derive(Debug, Clone)]
pub struct JobTable {
    slots: Vec<Option<Job>>,
    next_id: u32,
}

impl JobTable {
    /// Create a table with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(MAX_JOBS)
    }

    /// Create a table tracking at most `capacity` jobs (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: vec![None; capacity],
            next_id: 1,
        }
    }

    /// Maximum number of concurrently tracked jobs
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live jobs
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Handle the next registration will try first
    pub fn next_id(&self) -> JobId {
        JobId(self.next_id)
    }

    /// Register a new job and return its handle
    ///
    /// Fails without touching the table when the pid is not positive, is
    /// already tracked, would be a second foreground job, or no slot is free.
    pub fn register(&mut self, pid: Pid, state: JobState, cmdline: &str) -> JobResult<JobId> {
        if pid < 1 {
            return Err(JobError::InvalidPid(pid));
        }
        if self.find_by_pid(pid).is_some() {
            return Err(JobError::DuplicatePid(pid));
        }
        if state == JobState::Foreground {
            if let Some(current) = self.foreground_pid() {
                return Err(JobError::ForegroundOccupied { current });
            }
        }

        let index = match self.slots.iter().position(Option::is_none) {
            Some(index) => index,
            None => {
                warn!(pid, capacity = self.capacity(), "job table full");
                return Err(JobError::TableFull {
                    capacity: self.capacity(),
                });
            }
        };

        let id = self.allocate_id();
        self.slots[index] = Some(Job {
            pid,
            id,
            state,
            cmdline: cmdline.to_string(),
        });

        info!(job = %id, pid, ?state, "registered job");
        Ok(id)
    }

    /// Remove the job for `pid`; returns whether one was found
    pub fn release(&mut self, pid: Pid) -> bool {
        if pid < 1 {
            return false;
        }

        let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|job| job.pid == pid))
        else {
            return false;
        };

        if let Some(job) = slot.take() {
            debug!(job = %job.id, pid, "released job");
        }
        self.next_id = self.wrap(self.max_id() + 1);
        true
    }

    /// Find a job by process id
    pub fn find_by_pid(&self, pid: Pid) -> Option<&Job> {
        if pid < 1 {
            return None;
        }
        self.snapshot_for_listing().find(|job| job.pid == pid)
    }

    /// Find a job by handle
    pub fn find_by_id(&self, id: JobId) -> Option<&Job> {
        if id.get() < 1 {
            return None;
        }
        self.snapshot_for_listing().find(|job| job.id == id)
    }

    /// Pid of the unique foreground job
    pub fn foreground_pid(&self) -> Option<Pid> {
        self.snapshot_for_listing()
            .find(|job| job.state == JobState::Foreground)
            .map(|job| job.pid)
    }

    /// Handle of the job for `pid`
    pub fn handle_of(&self, pid: Pid) -> Option<JobId> {
        self.find_by_pid(pid).map(|job| job.id)
    }

    /// Change the state of the job for `pid`, returning its previous state
    ///
    /// Refuses to create a second foreground job.
    pub fn set_state(&mut self, pid: Pid, state: JobState) -> JobResult<JobState> {
        if state == JobState::Foreground {
            if let Some(current) = self.foreground_pid().filter(|current| *current != pid) {
                return Err(JobError::ForegroundOccupied { current });
            }
        }

        let job = self
            .slots
            .iter_mut()
            .flatten()
            .find(|job| pid > 0 && job.pid == pid)
            .ok_or(JobError::NotFound(pid))?;

        let previous = std::mem::replace(&mut job.state, state);
        debug!(job = %job.id, pid, from = ?previous, to = ?state, "job state changed");
        Ok(previous)
    }

    /// Live jobs in table order
    ///
    /// Lazy and restartable: each call walks the current slots.
    pub fn snapshot_for_listing(&self) -> impl Iterator<Item = &Job> + Clone + '_ {
        self.slots.iter().flatten()
    }

    /// Largest live handle, 0 when empty
    fn max_id(&self) -> u32 {
        self.snapshot_for_listing()
            .map(|job| job.id.get())
            .max()
            .unwrap_or(0)
    }

    /// Handles stay within `1..=capacity`
    fn wrap(&self, id: u32) -> u32 {
        if id as usize > self.capacity() {
            1
        } else {
            id
        }
    }

    /// Take `next_id`, skipping handles still held by live jobs
    ///
    /// Only called with a free slot, so some handle in `1..=capacity` is free.
    fn allocate_id(&mut self) -> JobId {
        let mut candidate = self.next_id;
        while self.find_by_id(JobId(candidate)).is_some() {
            candidate = self.wrap(candidate + 1);
        }
        self.next_id = self.wrap(candidate + 1);
        JobId(candidate)
    }
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}
