//! Shortest-Job-First (non-preemptive).

use log::trace;

use super::{next_arrival, select_min, SchedulingPolicy};
use crate::models::{ProcessRecord, Timeline};

/// Shortest-Job-First.
///
/// At each decision point picks the arrived, not-yet-run process with the
/// smallest burst and runs it to completion. Ties go to the process
/// encountered first in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn schedule(&self, processes: &mut [ProcessRecord]) -> Timeline {
        let n = processes.len();
        let mut timeline = Timeline::with_capacity(n);
        let mut done = vec![false; n];
        let mut completed = 0;
        let mut time = 0;

        while completed < n {
            let Some(i) = select_min(processes, time, |i| done[i], |p| p.burst) else {
                // Nothing eligible: idle until the next arrival.
                match next_arrival(processes, |i| done[i]) {
                    Some(arrival) => time = time.max(arrival),
                    None => break,
                }
                continue;
            };

            let p = &mut processes[i];
            let start = time;
            time += p.run_for(p.burst);
            p.complete_at(time);
            trace!("SJF: P{} (burst {}) runs {start}..{time}", p.id, p.burst);
            timeline.record(p.id, start, time);

            done[i] = true;
            completed += 1;
        }

        timeline
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
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
    fn test_sjf_basic_scenario() {
        let mut ps = records(&[(0, 5), (1, 3), (2, 8)]);
        let timeline = Sjf.schedule(&mut ps);

        assert_eq!(timeline.process_ids(), vec![1, 2, 3]);
        assert_eq!((ps[0].waiting, ps[0].turnaround), (0, 5));
        assert_eq!((ps[1].waiting, ps[1].turnaround), (4, 7));
        assert_eq!((ps[2].waiting, ps[2].turnaround), (6, 14));
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        // At t=4 both P2 (burst 6) and P3 (burst 2) are waiting.
        let mut ps = records(&[(0, 4), (1, 6), (2, 2)]);
        let timeline = Sjf.schedule(&mut ps);
        assert_eq!(timeline.process_ids(), vec![1, 3, 2]);
        assert_eq!(ps[2].waiting, 2);
        assert_eq!(ps[1].waiting, 5);
    }

    #[test]
    fn test_sjf_non_preemptive() {
        // P2 is shorter but arrives while P1 runs; P1 is not interrupted.
        let mut ps = records(&[(0, 10), (1, 1)]);
        let timeline = Sjf.schedule(&mut ps);
        assert_eq!(timeline.slices()[0].end, 10);
        assert_eq!(ps[1].waiting, 9);
    }

    #[test]
    fn test_sjf_tie_prefers_input_order() {
        let mut ps = records(&[(0, 3), (0, 3)]);
        let timeline = Sjf.schedule(&mut ps);
        assert_eq!(timeline.process_ids(), vec![1, 2]);
    }

    #[test]
    fn test_sjf_idle_until_arrival() {
        let mut ps = records(&[(5, 2), (6, 1)]);
        let timeline = Sjf.schedule(&mut ps);
        assert_eq!(timeline.process_ids(), vec![1, 2]);
        assert_eq!(timeline.slices()[0].start, 5);
        assert_eq!(ps[1].completion, 8);
    }
}
