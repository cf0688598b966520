//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | dispatches after the first |

use serde::{Deserialize, Serialize};

use crate::models::{ProcessResult, ScheduleOutcome};

/// Schedule performance indicators.
///
/// All time values are in simulation time units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Largest single waiting time.
    pub max_waiting: i64,
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time the CPU sat idle before the makespan.
    pub idle_time: i64,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of times the CPU switched to a different process.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduling outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let process_count = outcome.results.len();
        let makespan = outcome.timeline.makespan();
        let busy_time = outcome.timeline.busy_time();

        // Per-process times fit in i64; their sum across processes may not.
        let mean = |metric: fn(&ProcessResult) -> i64| {
            if process_count == 0 {
                return 0.0;
            }
            let total: i128 = outcome.results.iter().map(|r| i128::from(metric(r))).sum();
            total as f64 / process_count as f64
        };

        let max_waiting = outcome.results.iter().map(|r| r.waiting).max().unwrap_or(0);

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                process_count as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            process_count,
            avg_waiting: mean(|r| r.waiting),
            avg_turnaround: mean(|r| r.turnaround),
            avg_response: mean(|r| r.response),
            max_waiting,
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            context_switches: outcome.timeline.len().saturating_sub(1),
        }
    }
}
