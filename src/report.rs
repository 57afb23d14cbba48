//! Text rendering of simulation results.
//!
//! - Gantt chart: merged slices as a bar with a time axis underneath,
//!   idle gaps shown as `idle`.
//! - Results table: one row per process, then the averages with two
//!   decimals.
//! - Comparison table: one row per policy.

use std::fmt::Write as _;

use crate::models::Timeline;
use crate::simulation::{SimulationMetrics, SimulationOutcome};

/// Renders the Gantt chart of a timeline.
///
/// ```
/// use u_cpusched::models::Timeline;
/// use u_cpusched::report::render_gantt;
///
/// let mut t = Timeline::new();
/// t.record(1, 0, 5);
/// t.record(2, 5, 8);
/// assert_eq!(render_gantt(&t), "| P1 | P2 |\n0    5    8\n");
/// ```
pub fn render_gantt(timeline: &Timeline) -> String {
    let mut segments: Vec<(String, i64, i64)> = Vec::new();
    let mut clock = 0;
    for slice in timeline.merged() {
        if slice.start > clock {
            segments.push(("idle".to_string(), clock, slice.start));
        }
        segments.push((format!("P{}", slice.process_id), slice.start, slice.end));
        clock = slice.end;
    }

    let Some(first) = segments.first() else {
        return String::from("(empty)\n");
    };

    let mut bar = String::from("|");
    let mut axis = first.1.to_string();
    for (label, _, end) in &segments {
        let _ = write!(bar, " {label} |");
        let column = bar.len() - 1;
        if axis.len() < column {
            axis.push_str(&" ".repeat(column - axis.len()));
        } else {
            axis.push(' ');
        }
        let _ = write!(axis, "{end}");
    }

    format!("{bar}\n{axis}\n")
}

/// Renders the per-process results table followed by the averages.
pub fn render_table(metrics: &SimulationMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<7}  {:>7}  {:>5}  {:>10}  {:>7}  {:>10}  {:>8}",
        "Process", "Arrival", "Burst", "Completion", "Waiting", "Turnaround", "Response"
    );
    for row in &metrics.per_process {
        let _ = writeln!(
            out,
            "{:<7}  {:>7}  {:>5}  {:>10}  {:>7}  {:>10}  {:>8}",
            format!("P{}", row.id),
            row.arrival,
            row.burst,
            row.completion,
            row.waiting,
            row.turnaround,
            row.response
        );
    }
    let _ = writeln!(out, "Average Waiting Time: {:.2}", metrics.avg_waiting);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", metrics.avg_turnaround);
    let _ = writeln!(out, "Average Response Time: {:.2}", metrics.avg_response);
    let _ = writeln!(
        out,
        "CPU Utilization: {:.1}% (makespan {}, idle {}, {} context switches)",
        metrics.cpu_utilization * 100.0,
        metrics.makespan,
        metrics.idle_time,
        metrics.context_switches
    );
    out
}

/// Renders a full outcome: heading, Gantt chart and results table.
pub fn render_outcome(outcome: &SimulationOutcome) -> String {
    format!(
        "=== {} ===\n\nGantt Chart:\n{}\n{}",
        outcome.policy,
        render_gantt(&outcome.timeline),
        render_table(&outcome.metrics)
    )
}

/// Renders a one-row-per-policy summary of several outcomes.
pub fn render_comparison(outcomes: &[SimulationOutcome]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8}  {:>11}  {:>14}  {:>12}  {:>8}",
        "Policy", "Avg Waiting", "Avg Turnaround", "Avg Response", "Switches"
    );
    for outcome in outcomes {
        let m = &outcome.metrics;
        let _ = writeln!(
            out,
            "{:<8}  {:>11.2}  {:>14.2}  {:>12.2}  {:>8}",
            outcome.policy.to_string(),
            m.avg_waiting,
            m.avg_turnaround,
            m.avg_response,
            m.context_switches
        );
    }
    out
}
