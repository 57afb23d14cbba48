//! Simulation driver and metrics.
//!
//! Provides the stateless `Simulator` that validates a request, runs the
//! selected policy over freshly built records, and reports statistics.
//!
//! # Metrics
//!
//! `SimulationMetrics` computes average waiting and turnaround times,
//! per-process rows, and CPU-level figures (makespan, utilization,
//! throughput, context switches).

mod metrics;
mod simulator;

pub use metrics::{ProcessStats, SimulationMetrics};
pub use simulator::{SimulationOutcome, SimulationRequest, Simulator};
