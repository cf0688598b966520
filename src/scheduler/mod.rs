//! CPU scheduling algorithms and KPI evaluation.
//!
//! # Algorithms
//!
//! | Function | Ready-set rule | Preemption |
//! |----------|----------------|------------|
//! | [`fcfs`] | earliest arrival | none |
//! | [`sjf`] | shortest burst, then arrival | none |
//! | [`sjf_preemptive`] | shortest remaining, then arrival | shorter arrival |
//! | [`priority`] | lowest priority value, then arrival | none |
//! | [`priority_preemptive`] | lowest priority value, then arrival | higher-priority arrival |
//! | [`round_robin`] | FIFO queue | fixed quantum |
//!
//! The first five share [`PolicyScheduler`]; Round-Robin has its own driver.
//! Final ties always fall back to input order, so every run is
//! deterministic.
//!
//! Idle CPU time is never stored as a segment; see
//! [`Timeline::idle_gaps`](crate::models::Timeline::idle_gaps).

mod algorithm;
mod kpi;
mod policy;
mod round_robin;

pub use algorithm::{compare, Algorithm, Comparison, SchedulerConfig};
pub use kpi::ScheduleKpi;
pub use policy::PolicyScheduler;
pub use round_robin::RoundRobinScheduler;

use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, ScheduleOutcome};

fn run_policy(
    algorithm: Algorithm,
    processes: &[ProcessDescriptor],
) -> Result<ScheduleOutcome, ScheduleError> {
    SchedulerConfig::new(algorithm).run(processes)
}

/// First-Come-First-Served.
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::fcfs;
///
/// let processes = vec![
///     ProcessDescriptor::new("A", 0, 5),
///     ProcessDescriptor::new("B", 1, 3),
///     ProcessDescriptor::new("C", 2, 8),
/// ];
/// let outcome = fcfs(&processes).unwrap();
/// assert_eq!(outcome.completions(), vec![("A", 5), ("B", 8), ("C", 16)]);
/// ```
pub fn fcfs(processes: &[ProcessDescriptor]) -> Result<ScheduleOutcome, ScheduleError> {
    run_policy(Algorithm::Fcfs, processes)
}

/// Shortest-Job-First, non-preemptive.
pub fn sjf(processes: &[ProcessDescriptor]) -> Result<ScheduleOutcome, ScheduleError> {
    run_policy(Algorithm::Sjf, processes)
}

/// Shortest-Remaining-Time-First.
pub fn sjf_preemptive(processes: &[ProcessDescriptor]) -> Result<ScheduleOutcome, ScheduleError> {
    run_policy(Algorithm::SjfPreemptive, processes)
}

/// Priority scheduling, non-preemptive (lower value runs first).
pub fn priority(processes: &[ProcessDescriptor]) -> Result<ScheduleOutcome, ScheduleError> {
    run_policy(Algorithm::Priority, processes)
}

/// Priority scheduling with preemption on arrival of a more urgent process.
pub fn priority_preemptive(
    processes: &[ProcessDescriptor],
) -> Result<ScheduleOutcome, ScheduleError> {
    run_policy(Algorithm::PriorityPreemptive, processes)
}

/// Round-Robin with the given time quantum.
pub fn round_robin(
    processes: &[ProcessDescriptor],
    quantum: i64,
) -> Result<ScheduleOutcome, ScheduleError> {
    RoundRobinScheduler::new(quantum).schedule(processes)
}
