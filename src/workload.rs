//! Random workload generation.
//!
//! Produces valid process specs (non-negative arrivals, positive bursts)
//! for experiments and invariant tests. Pass a seeded RNG for
//! reproducible workloads.

use rand::Rng;

use crate::models::ProcessSpec;

/// Generator of random CPU-bound workloads.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    /// Number of processes per workload.
    pub count: usize,
    /// Latest possible arrival time (inclusive).
    pub max_arrival: i64,
    /// Minimum burst time (inclusive, clamped to at least 1).
    pub min_burst: i64,
    /// Maximum burst time (inclusive).
    pub max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes, arrivals in `0..=10`,
    /// bursts in `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Generates one workload.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let max_arrival = self.max_arrival.max(0);
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);

        (0..self.count)
            .map(|_| {
                ProcessSpec::new(
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                )
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
