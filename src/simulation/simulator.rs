//! Stateless simulation driver.
//!
//! # Algorithm
//!
//! 1. Validate the request (workload + policy).
//! 2. Build fresh records, ids 1..=N in input order.
//! 3. Run the selected policy over the records.
//! 4. Compute metrics and return records, timeline and metrics.
//!
//! Each run owns its records exclusively; nothing is retained between runs.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::SimulationMetrics;
use crate::error::SimulationError;
use crate::models::{ProcessRecord, ProcessSpec, Timeline};
use crate::policies::Policy;
use crate::validation::validate_request;

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in input order.
    pub processes: Vec<ProcessSpec>,
    /// Policy to simulate.
    pub policy: Policy,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(processes: Vec<ProcessSpec>, policy: Policy) -> Self {
        Self { processes, policy }
    }

    /// Appends a process.
    pub fn with_process(mut self, arrival: i64, burst: i64) -> Self {
        self.processes.push(ProcessSpec::new(arrival, burst));
        self
    }
}

/// Result of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Execution timeline.
    pub timeline: Timeline,
    /// Finalized records, ordered by id.
    pub processes: Vec<ProcessRecord>,
    /// Aggregate statistics.
    pub metrics: SimulationMetrics,
}

/// Runs simulation requests.
///
/// # Example
///
/// ```
/// use u_cpusched::policies::Policy;
/// use u_cpusched::simulation::{SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(Vec::new(), Policy::Fcfs)
///     .with_process(0, 5)
///     .with_process(1, 3)
///     .with_process(2, 8);
///
/// let outcome = Simulator::new().run(request).unwrap();
/// assert_eq!(outcome.timeline.process_ids(), vec![1, 2, 3]);
/// assert!((outcome.metrics.avg_waiting - 10.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Validates and runs one request.
    pub fn run(&self, request: SimulationRequest) -> Result<SimulationOutcome, SimulationError> {
        let SimulationRequest { processes, policy } = request;

        if let Err(errors) = validate_request(&processes, &policy) {
            warn!("rejected {policy} request: {} problem(s)", errors.len());
            return Err(SimulationError::InvalidRequest(errors));
        }

        let records = ProcessRecord::from_specs(&processes);
        Ok(Self::execute(policy, records))
    }

    /// Runs the same workload under every policy, in the order
    /// FCFS, SJF, SRT, RR.
    pub fn compare(
        &self,
        processes: &[ProcessSpec],
        quantum: i64,
    ) -> Result<Vec<SimulationOutcome>, SimulationError> {
        Policy::all(quantum)
            .into_iter()
            .map(|policy| self.run(SimulationRequest::new(processes.to_vec(), policy)))
            .collect()
    }

    fn execute(policy: Policy, mut records: Vec<ProcessRecord>) -> SimulationOutcome {
        let engine = policy.engine();
        debug!(
            "running {} ({}) over {} process(es)",
            policy,
            engine.description(),
            records.len()
        );

        let timeline = engine.schedule(&mut records);
        records.sort_by_key(|p| p.id);
        let metrics = SimulationMetrics::calculate(&records, &timeline);

        debug!(
            "{policy} finished: makespan={}, avg_waiting={:.2}, avg_turnaround={:.2}",
            metrics.makespan, metrics.avg_waiting, metrics.avg_turnaround
        );

        SimulationOutcome {
            policy,
            timeline,
            processes: records,
            metrics,
        }
    }
}
