//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order. Equal arrivals are
//! ordered by id so the result does not depend on sort stability.

use log::trace;

use super::SchedulingPolicy;
use crate::models::{ProcessRecord, Timeline};

/// First-Come-First-Served (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &mut [ProcessRecord]) -> Timeline {
        let mut order: Vec<usize> = (0..processes.len()).collect();
        order.sort_by_key(|&i| (processes[i].arrival, processes[i].id));

        let mut timeline = Timeline::with_capacity(processes.len());
        let mut time = 0;

        for i in order {
            let p = &mut processes[i];
            if time < p.arrival {
                trace!("FCFS: idle {time}..{}", p.arrival);
                time = p.arrival;
            }
            let start = time;
            time += p.run_for(p.burst);
            p.complete_at(time);
            trace!("FCFS: P{} runs {start}..{time}", p.id);
            timeline.record(p.id, start, time);
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
