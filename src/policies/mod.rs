//! CPU scheduling policies.
//!
//! Four classical single-CPU disciplines behind one trait:
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | earliest arrival, then lowest id |
//! | SJF | no | shortest burst among arrived, first in input order |
//! | SRT | yes (per unit) | shortest remaining among arrived, first in input order |
//! | RR | yes (per quantum) | FIFO ready queue |
//!
//! # Usage
//!
//! ```
//! use u_cpusched::models::{ProcessRecord, ProcessSpec};
//! use u_cpusched::policies::{Policy, SchedulingPolicy};
//!
//! let specs = [ProcessSpec::new(0, 5), ProcessSpec::new(1, 3)];
//! let mut records = ProcessRecord::from_specs(&specs);
//! let timeline = Policy::Fcfs.engine().schedule(&mut records);
//! assert_eq!(timeline.process_ids(), vec![1, 2]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod round_robin;
mod sjf;
mod srt;

pub use fcfs::Fcfs;
pub use round_robin::{ReadyQueue, RoundRobin};
pub use sjf::Sjf;
pub use srt::Srt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{ProcessRecord, Timeline};

/// A CPU scheduling discipline.
///
/// Implementations assume validated input: at least one process,
/// `arrival >= 0`, `burst > 0`, and `remaining == burst` on entry.
/// They mutate the records in place (`remaining`, `waiting`,
/// `turnaround`, `completion`) and return the execution timeline.
/// Implementations hold no state between calls.
pub trait SchedulingPolicy: Send + Sync + fmt::Debug {
    /// Short name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Whether a running process may be interrupted before completion.
    fn is_preemptive(&self) -> bool;

    /// Runs the policy to completion over `processes`.
    fn schedule(&self, processes: &mut [ProcessRecord]) -> Timeline;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Policy selector carried by a simulation request.
///
/// Serializes as `"fcfs"`, `"sjf"`, `"srt"` or
/// `{"round_robin": {"quantum": 2}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time (preemptive).
    Srt,
    /// Round-Robin with a fixed quantum.
    RoundRobin {
        /// Maximum contiguous slice per turn.
        quantum: i64,
    },
}

impl Policy {
    /// All four policies, using `quantum` for Round-Robin.
    pub fn all(quantum: i64) -> [Policy; 4] {
        [
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Srt,
            Policy::RoundRobin { quantum },
        ]
    }

    /// Returns the implementation for this selector.
    pub fn engine(&self) -> Box<dyn SchedulingPolicy> {
        match *self {
            Policy::Fcfs => Box::new(Fcfs),
            Policy::Sjf => Box::new(Sjf),
            Policy::Srt => Box::new(Srt),
            Policy::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }

    /// Round-Robin quantum, if any.
    pub fn quantum(&self) -> Option<i64> {
        match *self {
            Policy::RoundRobin { quantum } => Some(quantum),
            _ => None,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::Srt => write!(f, "SRT"),
            Policy::RoundRobin { quantum } => write!(f, "RR(q={quantum})"),
        }
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    /// Parses `fcfs`, `sjf`, `srt`, `rr:<q>` or `rr<q>` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "fcfs" | "fifo" => return Ok(Policy::Fcfs),
            "sjf" => return Ok(Policy::Sjf),
            "srt" | "srtf" => return Ok(Policy::Srt),
            _ => {}
        }

        let quantum = lower
            .strip_prefix("rr")
            .map(|rest| rest.trim_start_matches(':'))
            .and_then(|q| q.parse::<i64>().ok());

        match quantum {
            Some(quantum) => Ok(Policy::RoundRobin { quantum }),
            None => Err(SimulationError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Index of the first process (in input order) minimizing `key` among
/// those not yet done and arrived by `time`.
///
/// Strict comparison keeps the first-encountered minimum on ties.
pub(crate) fn select_min<K, F>(
    processes: &[ProcessRecord],
    time: i64,
    done: impl Fn(usize) -> bool,
    key: F,
) -> Option<usize>
where
    K: Ord,
    F: Fn(&ProcessRecord) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for (i, p) in processes.iter().enumerate() {
        if done(i) || !p.has_arrived(time) {
            continue;
        }
        let k = key(p);
        let better = match &best {
            Some((_, best_key)) => k < *best_key,
            None => true,
        };
        if better {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}

/// Earliest arrival among processes that are not done.
///
/// Used to skip idle CPU time in one step.
pub(crate) fn next_arrival(
    processes: &[ProcessRecord],
    done: impl Fn(usize) -> bool,
) -> Option<i64> {
    processes
        .iter()
        .enumerate()
        .filter(|&(i, _)| !done(i))
        .map(|(_, p)| p.arrival)
        .min()
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
    fn test_policy_from_str() {
        assert_eq!("fcfs".parse::<Policy>().unwrap(), Policy::Fcfs);
        assert_eq!("SJF".parse::<Policy>().unwrap(), Policy::Sjf);
        assert_eq!("srt".parse::<Policy>().unwrap(), Policy::Srt);
        assert_eq!(
            "rr:3".parse::<Policy>().unwrap(),
            Policy::RoundRobin { quantum: 3 }
        );
        assert_eq!(
            "RR4".parse::<Policy>().unwrap(),
            Policy::RoundRobin { quantum: 4 }
        );
        assert!("rr".parse::<Policy>().is_err());
        assert!("lottery".parse::<Policy>().is_err());
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(Policy::Fcfs.to_string(), "FCFS");
        assert_eq!(Policy::RoundRobin { quantum: 2 }.to_string(), "RR(q=2)");
    }

    #[test]
    fn test_policy_serde() {
        let json = serde_json::to_string(&Policy::RoundRobin { quantum: 2 }).unwrap();
        assert_eq!(json, r#"{"round_robin":{"quantum":2}}"#);
        let back: Policy = serde_json::from_str(r#""srt""#).unwrap();
        assert_eq!(back, Policy::Srt);
    }

    #[test]
    fn test_engine_names() {
        let names: Vec<&str> = Policy::all(2).iter().map(|p| p.engine().name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "SRT", "RR"]);
        assert!(!Policy::Sjf.engine().is_preemptive());
        assert!(Policy::Srt.engine().is_preemptive());
    }

    #[test]
    fn test_quantum_accessor() {
        assert_eq!(Policy::RoundRobin { quantum: 5 }.quantum(), Some(5));
        assert_eq!(Policy::Fcfs.quantum(), None);
    }

    #[test]
    fn test_select_min_first_encountered() {
        let ps = records(&[(0, 4), (0, 2), (0, 2)]);
        let idx = select_min(&ps, 0, |_| false, |p| p.burst);
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn test_select_min_respects_arrival_and_done() {
        let ps = records(&[(0, 4), (5, 1), (0, 3)]);
        assert_eq!(select_min(&ps, 0, |_| false, |p| p.burst), Some(2));
        assert_eq!(select_min(&ps, 0, |i| i == 2, |p| p.burst), Some(0));
        assert_eq!(select_min(&ps, 0, |i| i != 1, |p| p.burst), None);
    }

    #[test]
    fn test_next_arrival() {
        let ps = records(&[(3, 1), (7, 1)]);
        assert_eq!(next_arrival(&ps, |_| false), Some(3));
        assert_eq!(next_arrival(&ps, |i| i == 0), Some(7));
        assert_eq!(next_arrival(&ps, |_| true), None);
    }
}
