//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates four classical single-CPU scheduling disciplines over a set
//! of processes and reports the execution timeline together with
//! per-process waiting and turnaround statistics.
//!
//! # Modules
//!
//! - **`models`**: `ProcessSpec`, `ProcessRecord`, `Timeline`, `Slice`
//! - **`policies`**: `SchedulingPolicy` trait, `Policy` selector, FCFS, SJF,
//!   SRT and Round-Robin implementations
//! - **`simulation`**: stateless `Simulator` and `SimulationMetrics`
//! - **`validation`**: request checks (empty workloads, bad arrivals, bursts, quanta)
//! - **`report`**: Gantt chart and results table rendering
//! - **`workload`**: random workload generation
//!
//! # Example
//!
//! ```
//! use u_cpusched::policies::Policy;
//! use u_cpusched::simulation::{SimulationRequest, Simulator};
//!
//! let request = SimulationRequest::new(Vec::new(), Policy::Sjf)
//!     .with_process(0, 5)
//!     .with_process(1, 3)
//!     .with_process(2, 8);
//!
//! let outcome = Simulator::new().run(request).unwrap();
//! assert_eq!(outcome.timeline.process_ids(), vec![1, 2, 3]);
//! assert_eq!(outcome.processes[1].waiting, 4);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod error;
pub mod models;
pub mod policies;
pub mod report;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
