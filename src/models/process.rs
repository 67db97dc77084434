//! Process model.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! `ProcessInput` is what the caller hands in; `ProcessRecord` is the
//! engine's private, mutable copy for the duration of one run.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Caller-supplied description of a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInput {
    /// Display label. Not required to be unique.
    pub name: String,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time the process requires.
    pub burst_time: i64,
}

impl ProcessInput {
    /// Creates a new process description.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
        }
    }
}

/// Simulation state of one process.
///
/// Created from a [`ProcessInput`] at the start of a run and mutated only
/// by the active algorithm through [`ProcessRecord::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    /// Position in the caller's input list.
    pub index: usize,
    /// Display label.
    pub name: String,
    /// Arrival instant.
    pub arrival_time: i64,
    /// Total required CPU time.
    pub burst_time: i64,
    /// CPU time still owed.
    pub remaining_time: i64,
    /// Instant the process first got the CPU.
    pub first_run_time: Option<i64>,
    /// Instant `remaining_time` reached zero.
    pub completion_time: Option<i64>,
}

impl ProcessRecord {
    /// Creates a fresh record for the `index`-th input.
    pub fn from_input(index: usize, input: &ProcessInput) -> Self {
        Self {
            index,
            name: input.name.clone(),
            arrival_time: input.arrival_time,
            burst_time: input.burst_time,
            remaining_time: input.burst_time,
            first_run_time: None,
            completion_time: None,
        }
    }

    /// Copies a whole input list into records, preserving input order.
    pub fn from_inputs(inputs: &[ProcessInput]) -> Vec<Self> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, p)| Self::from_input(i, p))
            .collect()
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }

    /// Arrived and not yet completed.
    #[inline]
    pub fn is_eligible(&self, now: i64) -> bool {
        self.has_arrived(now) && !self.is_completed()
    }

    /// Runs the process for `duration` ticks starting at `start`.
    ///
    /// `duration` is clamped to the remaining time. Returns `true` if this
    /// call completed the process.
    pub fn execute(&mut self, start: i64, duration: i64) -> bool {
        let run = duration.min(self.remaining_time);
        if run <= 0 {
            return false;
        }
        if self.first_run_time.is_none() {
            self.first_run_time = Some(start);
        }
        self.remaining_time -= run;
        if self.remaining_time == 0 {
            self.completion_time = Some(start + run);
            return true;
        }
        false
    }

    /// Completion minus arrival. `None` until completed.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Turnaround minus burst. `None` until completed.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// First dispatch minus arrival. `None` until first dispatched.
    pub fn response_time(&self) -> Option<i64> {
        self.first_run_time.map(|s| s - self.arrival_time)
    }
}
