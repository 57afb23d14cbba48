//! Shortest-Remaining-Time (preemptive SJF).
//!
//! The decision is re-evaluated every time unit, so a newly arrived
//! shorter process preempts the running one at the next tick. The
//! timeline holds one slice per executed unit.

use log::trace;

use super::{next_arrival, select_min, SchedulingPolicy};
use crate::models::{ProcessRecord, Timeline};

/// Shortest-Remaining-Time.
///
/// Ties on remaining time go to the lowest scan index (input order),
/// which also means a running process keeps the CPU only if no earlier
/// process ties with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srt;

impl SchedulingPolicy for Srt {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn schedule(&self, processes: &mut [ProcessRecord]) -> Timeline {
        let n = processes.len();
        let mut timeline = Timeline::new();
        let mut completed = processes.iter().filter(|p| p.is_complete()).count();
        let mut time = 0;

        while completed < n {
            let pick = select_min(processes, time, |i| processes[i].is_complete(), |p| p.remaining);
            let Some(i) = pick else {
                match next_arrival(processes, |i| processes[i].is_complete()) {
                    Some(arrival) => time = time.max(arrival),
                    None => break,
                }
                continue;
            };

            let p = &mut processes[i];
            p.run_for(1);
            timeline.record(p.id, time, time + 1);
            time += 1;

            if p.is_complete() {
                p.complete_at(time);
                trace!("SRT: P{} completes at {time}", p.id);
                completed += 1;
            }
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time (preemptive)"
    }
}
