//! Process model.
//!
//! A process is a single CPU-bound job described by when it becomes
//! eligible to run (arrival) and how much CPU time it needs (burst).
//!
//! # Timing Fields
//!
//! | Field | Definition |
//! |-------|-----------|
//! | Completion | Time at which `remaining` reaches 0 |
//! | Turnaround | `completion - arrival` |
//! | Waiting | `turnaround - burst` |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// Input description of a process: arrival and burst only.
///
/// Values are signed so that malformed input can be represented and
/// rejected by [`crate::validation`] instead of failing at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Time unit at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total execution time required.
    pub burst: i64,
}

impl ProcessSpec {
    /// Creates a new process spec.
    pub fn new(arrival: i64, burst: i64) -> Self {
        Self { arrival, burst }
    }
}

/// Per-process scheduling state, mutated in place by one policy run.
///
/// # Invariants (after completion)
/// - `0 <= remaining <= burst`, `remaining == 0`
/// - `turnaround == completion - arrival`
/// - `waiting == turnaround - burst`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// 1-based identifier, assigned by input order.
    pub id: u32,
    /// Arrival time.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// CPU time still owed.
    pub remaining: i64,
    /// Time spent ready but not running. Set on completion.
    pub waiting: i64,
    /// Completion minus arrival. Set on completion.
    pub turnaround: i64,
    /// Time at which the process finished.
    pub completion: i64,
}

impl ProcessRecord {
    /// Creates a fresh record with `remaining = burst`.
    pub fn new(id: u32, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            remaining: burst,
            waiting: 0,
            turnaround: 0,
            completion: 0,
        }
    }

    /// Builds records from specs, assigning ids 1..=N by position.
    ///
    /// Callers are expected to have validated the count fits in `u32`.
    pub fn from_specs(specs: &[ProcessSpec]) -> Vec<Self> {
        specs
            .iter()
            .zip(1u32..)
            .map(|(spec, id)| Self::new(id, spec.arrival, spec.burst))
            .collect()
    }

    /// Whether the process has received all of its burst.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival <= time
    }

    /// Consumes up to `units` of remaining time; returns the amount consumed.
    pub fn run_for(&mut self, units: i64) -> i64 {
        let exec = units.min(self.remaining);
        self.remaining -= exec;
        exec
    }

    /// Finalizes the timing fields for a process that finished at `time`.
    pub fn complete_at(&mut self, time: i64) {
        self.remaining = 0;
        self.completion = time;
        self.turnaround = time - self.arrival;
        self.waiting = self.turnaround - self.burst;
    }
}
