//! Simulation metrics.
//!
//! Aggregates the finalized process records and the timeline of one run
//! into per-process rows and summary statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first start - arrival) |
//! | Makespan | End of the last executed slice |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | Changes of running process |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{ProcessRecord, Timeline};

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process id.
    pub id: u32,
    /// Arrival time.
    pub arrival: i64,
    /// Burst time.
    pub burst: i64,
    /// Completion time.
    pub completion: i64,
    /// Waiting time.
    pub waiting: i64,
    /// Turnaround time.
    pub turnaround: i64,
    /// First start minus arrival.
    pub response: i64,
}

/// Summary statistics for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Per-process rows, ordered by id.
    pub per_process: Vec<ProcessStats>,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// End of the last executed slice.
    pub makespan: i64,
    /// Time the CPU spent executing.
    pub busy_time: i64,
    /// Time the CPU spent idle before the makespan.
    pub idle_time: i64,
    /// Busy fraction of the makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of process changes on the CPU.
    pub context_switches: usize,
}

impl SimulationMetrics {
    /// Computes metrics from completed records and their timeline.
    ///
    /// # Arguments
    /// * `processes` - Finalized records (any order).
    /// * `timeline` - The timeline produced by the same run.
    pub fn calculate(processes: &[ProcessRecord], timeline: &Timeline) -> Self {
        let mut per_process: Vec<ProcessStats> = processes
            .iter()
            .map(|p| ProcessStats {
                id: p.id,
                arrival: p.arrival,
                burst: p.burst,
                completion: p.completion,
                waiting: p.waiting,
                turnaround: p.turnaround,
                response: timeline
                    .first_start(p.id)
                    .map(|start| start - p.arrival)
                    .unwrap_or(0),
            })
            .collect();
        per_process.sort_by_key(|row| row.id);

        let count = per_process.len();
        let mean = |sum: i64| {
            if count == 0 {
                0.0
            } else {
                sum as f64 / count as f64
            }
        };

        let avg_waiting = mean(per_process.iter().map(|r| r.waiting).sum());
        let avg_turnaround = mean(per_process.iter().map(|r| r.turnaround).sum());
        let avg_response = mean(per_process.iter().map(|r| r.response).sum());

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            per_process,
            avg_waiting,
            avg_turnaround,
            avg_response,
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        }
    }

    /// Sum of waiting times.
    pub fn total_waiting(&self) -> i64 {
        self.per_process.iter().map(|r| r.waiting).sum()
    }

    /// Sum of turnaround times.
    pub fn total_turnaround(&self) -> i64 {
        self.per_process.iter().map(|r| r.turnaround).sum()
    }

    /// Row for a process id.
    pub fn stats_for(&self, id: u32) -> Option<&ProcessStats> {
        self.per_process.iter().find(|r| r.id == id)
    }
}
