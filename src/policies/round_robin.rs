//! Round-Robin with a fixed time quantum.
//!
//! # Queue Discipline
//!
//! After a process finishes its turn, every other process that has
//! arrived by the new clock value (and is neither finished nor already
//! queued) is enqueued in input order, and only then is the preempted
//! process put at the back. New arrivals therefore never lose their
//! place to the process that was just running.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::trace;

use super::{next_arrival, SchedulingPolicy};
use crate::models::{ProcessRecord, Timeline};

/// FIFO queue of process indices with membership tracking.
///
/// An index can be queued at most once at a time; pushing an index
/// that is already queued is a no-op.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    queue: VecDeque<usize>,
    queued: Vec<bool>,
}

impl ReadyQueue {
    /// Creates an empty queue for `n` processes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(n),
            queued: vec![false; n],
        }
    }

    /// Enqueues `index` at the back. Returns `false` if it was already queued.
    pub fn push(&mut self, index: usize) -> bool {
        if index >= self.queued.len() {
            self.queued.resize(index + 1, false);
        }
        if self.queued[index] {
            return false;
        }
        self.queued[index] = true;
        self.queue.push_back(index);
        true
    }

    /// Dequeues the front index.
    pub fn pop(&mut self) -> Option<usize> {
        let index = self.queue.pop_front()?;
        self.queued[index] = false;
        Some(index)
    }

}

/// Round-Robin scheduling.
///
/// Each turn runs for `min(quantum, remaining)` units and emits one
/// timeline slice. The quantum must be positive; [`crate::validation`]
/// rejects anything else before a simulation runs.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin policy with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Enqueues, in input order, every process other than `skip` that has
    /// arrived by `time` and still has work left.
    fn admit_arrived(
        processes: &[ProcessRecord],
        queue: &mut ReadyQueue,
        time: i64,
        skip: Option<usize>,
    ) {
        for (j, p) in processes.iter().enumerate() {
            if Some(j) != skip && p.has_arrived(time) && !p.is_complete() {
                queue.push(j);
            }
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &mut [ProcessRecord]) -> Timeline {
        debug_assert!(self.quantum > 0, "quantum must be positive");

        let n = processes.len();
        let mut timeline = Timeline::new();
        let mut queue = ReadyQueue::with_capacity(n);
        let mut completed = processes.iter().filter(|p| p.is_complete()).count();
        let mut time = 0;

        Self::admit_arrived(processes, &mut queue, time, None);

        while completed < n {
            let Some(i) = queue.pop() else {
                // Idle: jump to the next arrival and admit everyone arriving then.
                match next_arrival(processes, |j| processes[j].is_complete()) {
                    Some(arrival) => time = time.max(arrival),
                    None => break,
                }
                Self::admit_arrived(processes, &mut queue, time, None);
                continue;
            };

            let start = time;
            let exec = processes[i].run_for(self.quantum);
            time += exec;
            timeline.record(processes[i].id, start, time);
            trace!("RR: P{} runs {start}..{time}", processes[i].id);

            Self::admit_arrived(processes, &mut queue, time, Some(i));

            let p = &mut processes[i];
            if p.is_complete() {
                p.complete_at(time);
                completed += 1;
            } else {
                queue.push(i);
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSpec;

    fn records(pairs: &[(i64, i64)]) -> Vec<ProcessRecord> {
        let specs: Vec<ProcessSpec> = pairs.iter().map(|&(a, b)| ProcessSpec::new(a, b)).collect();
        ProcessRecord::from_specs(&specs)
    }

    #[test]
    fn test_ready_queue_fifo_and_dedup() {
        let mut q = ReadyQueue::with_capacity(3);
        assert!(q.push(2));
        assert!(q.push(0));
        assert!(!q.push(2));

        // Popping clears membership, so the index can be queued again.
        assert_eq!(q.pop(), Some(2));
        assert!(q.push(2));
        assert_eq!(q.pop(), Some(0));
        assert_eq!(q.pop(), Some(2));
        assert!(q.pop().is_none());
    }

    #[test]
    fn test_ready_queue_grows() {
        let mut q = ReadyQueue::default();
        assert!(q.push(4));
        assert!(!q.push(4));
        assert!(q.push(9));
        assert_eq!(q.pop(), Some(4));
        assert_eq!(q.pop(), Some(9));
    }

    #[test]
    fn test_rr_basic_scenario() {
        let mut ps = records(&[(0, 5), (1, 3), (2, 8)]);
        let timeline = RoundRobin::new(2).schedule(&mut ps);

        // P1 runs [0,2); P2 and P3 have arrived by t=2 and queue ahead of P1.
        assert_eq!(timeline.process_ids(), vec![1, 2, 3, 1, 2, 3, 1, 3, 3]);

        assert_eq!((ps[0].completion, ps[0].turnaround, ps[0].waiting), (12, 12, 7));
        assert_eq!((ps[1].completion, ps[1].turnaround, ps[1].waiting), (9, 8, 5));
        assert_eq!((ps[2].completion, ps[2].turnaround, ps[2].waiting), (16, 14, 6));

        let waiting: i64 = ps.iter().map(|p| p.waiting).sum();
        let turnaround: i64 = ps.iter().map(|p| p.turnaround).sum();
        let burst: i64 = ps.iter().map(|p| p.burst).sum();
        assert_eq!(waiting, turnaround - burst);
    }

    #[test]
    fn test_rr_slices_bounded_by_quantum() {
        let mut ps = records(&[(0, 7), (0, 4), (3, 9)]);
        let timeline = RoundRobin::new(3).schedule(&mut ps);
        assert!(timeline.slices().iter().all(|s| s.duration() <= 3));
        assert_eq!(timeline.executed_time(1), 7);
        assert_eq!(timeline.executed_time(3), 9);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs_order() {
        let mut ps = records(&[(0, 3), (1, 2), (1, 4)]);
        let timeline = RoundRobin::new(10).schedule(&mut ps);
        assert_eq!(timeline.process_ids(), vec![1, 2, 3]);
        assert_eq!(ps[2].waiting, 4);
    }

    #[test]
    fn test_rr_initial_queue_in_input_order() {
        let mut ps = records(&[(0, 2), (0, 2), (0, 2)]);
        let timeline = RoundRobin::new(1).schedule(&mut ps);
        assert_eq!(timeline.process_ids(), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_rr_new_arrival_before_requeued_process() {
        // P2 arrives while P1 runs its first quantum; P2 goes first next.
        let mut ps = records(&[(0, 4), (1, 2)]);
        let timeline = RoundRobin::new(2).schedule(&mut ps);
        assert_eq!(timeline.process_ids(), vec![1, 2, 1]);
    }

    #[test]
    fn test_rr_idle_then_arrival() {
        let mut ps = records(&[(0, 1), (5, 2), (5, 1)]);
        let timeline = RoundRobin::new(1).schedule(&mut ps);
        assert_eq!(timeline.process_ids(), vec![1, 2, 3, 2]);
        assert_eq!(timeline.slices()[1].start, 5);
        assert_eq!(ps[1].completion, 8);
        assert_eq!(ps[2].waiting, 1);
    }

    #[test]
    fn test_rr_first_arrival_after_zero() {
        let mut ps = records(&[(3, 2)]);
        let timeline = RoundRobin::new(4).schedule(&mut ps);
        assert_eq!(timeline.slices()[0].start, 3);
        assert_eq!(ps[0].waiting, 0);
        assert_eq!(ps[0].turnaround, 2);
    }
}
