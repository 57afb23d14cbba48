//! Execution timeline (Gantt record).
//!
//! A timeline is the ordered list of CPU slices produced by one policy
//! run. Granularity depends on the policy:
//!
//! | Policy | One slice per |
//! |--------|---------------|
//! | FCFS, SJF | process (whole burst) |
//! | SRT | executed time unit |
//! | RR | turn (at most one quantum) |
//!
//! The timeline is a display/analysis artifact and never feeds state
//! back into the process records.

use serde::{Deserialize, Serialize};

/// A contiguous interval `[start, end)` during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Running process.
    pub process_id: u32,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Slice {
    /// Creates a new slice.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered sequence of executed slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty timeline with room for `capacity` slices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slices: Vec::with_capacity(capacity),
        }
    }

    /// Appends a slice.
    pub fn push(&mut self, slice: Slice) {
        self.slices.push(slice);
    }

    /// Appends `[start, end)` for a process.
    pub fn record(&mut self, process_id: u32, start: i64, end: i64) {
        self.push(Slice::new(process_id, start, end));
    }

    /// All slices in execution order.
    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Process id of every slice, in order.
    pub fn process_ids(&self) -> Vec<u32> {
        self.slices.iter().map(|s| s.process_id).collect()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing was executed.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total CPU time attributed to a process.
    pub fn executed_time(&self, process_id: u32) -> i64 {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(Slice::duration)
            .sum()
    }

    /// Start of the first slice of a process, if it ever ran.
    pub fn first_start(&self, process_id: u32) -> Option<i64> {
        self.slices
            .iter()
            .find(|s| s.process_id == process_id)
            .map(|s| s.start)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// End of the last slice (0 for an empty timeline).
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Coalesces adjacent, gap-free slices of the same process.
    ///
    /// SRT produces one slice per unit; this turns `P1 P1 P1 P2` into
    /// `P1[0,3) P2[3,4)` for display.
    pub fn merged(&self) -> Vec<Slice> {
        let mut out: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match out.last_mut() {
                Some(last) if last.process_id == slice.process_id && last.end == slice.start => {
                    last.end = slice.end;
                }
                _ => out.push(*slice),
            }
        }
        out
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.merged()
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record(1, 0, 1);
        t.record(2, 1, 2);
        t.record(2, 2, 3);
        t.record(1, 3, 4);
        t.record(3, 6, 8);
        t
    }

    #[test]
    fn test_process_ids() {
        assert_eq!(sample_timeline().process_ids(), vec![1, 2, 2, 1, 3]);
    }

    #[test]
    fn test_executed_time() {
        let t = sample_timeline();
        assert_eq!(t.executed_time(1), 2);
        assert_eq!(t.executed_time(2), 2);
        assert_eq!(t.executed_time(3), 2);
        assert_eq!(t.executed_time(99), 0);
    }

    #[test]
    fn test_busy_time_and_makespan() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 6);
        assert_eq!(t.makespan(), 8); // idle gap [4, 6)
    }

    #[test]
    fn test_first_start() {
        let t = sample_timeline();
        assert_eq!(t.first_start(2), Some(1));
        assert_eq!(t.first_start(3), Some(6));
        assert_eq!(t.first_start(4), None);
    }

    #[test]
    fn test_merged() {
        let merged = sample_timeline().merged();
        assert_eq!(
            merged,
            vec![
                Slice::new(1, 0, 1),
                Slice::new(2, 1, 3),
                Slice::new(1, 3, 4),
                Slice::new(3, 6, 8),
            ]
        );
    }

    #[test]
    fn test_merged_keeps_gap_split() {
        let mut t = Timeline::new();
        t.record(1, 0, 2);
        t.record(1, 5, 6); // same process after idle
        assert_eq!(t.merged().len(), 2);
        assert_eq!(t.context_switches(), 0);
    }

    #[test]
    fn test_context_switches() {
        assert_eq!(sample_timeline().context_switches(), 3);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.busy_time(), 0);
        assert_eq!(t.context_switches(), 0);
    }
}
