//! Scheduling run output.
//!
//! A run yields one [`ProcessResult`] per input process and the
//! [`Timeline`] of CPU slices that produced them. Both are built fresh for
//! every run and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::{ProcessDescriptor, Timeline};

/// Final timing statistics for one process.
///
/// # Invariants
/// For any well-formed run: `turnaround >= burst` and `waiting >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier (copied from the descriptor).
    pub id: String,
    /// Arrival time (echoed).
    pub arrival: i64,
    /// Burst time (echoed).
    pub burst: i64,
    /// Priority (echoed).
    pub priority: i32,
    /// Time of first dispatch.
    pub start: i64,
    /// Time at which the burst finished.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`.
    pub waiting: i64,
    /// `start - arrival`.
    pub response: i64,
}

impl ProcessResult {
    /// Derives the result for `process` from its first dispatch and completion.
    pub fn from_run(process: &ProcessDescriptor, start: i64, completion: i64) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            start,
            completion,
            turnaround,
            waiting: turnaround - process.burst,
            response: start - process.arrival,
        }
    }
}

/// Results and timeline of a single scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Per-process results ordered by completion time, ties by id.
    pub results: Vec<ProcessResult>,
    /// CPU timeline ordered by start time.
    pub timeline: Timeline,
}

impl ScheduleOutcome {
    /// Creates an outcome, ordering results by completion then id.
    pub fn new(mut results: Vec<ProcessResult>, timeline: Timeline) -> Self {
        results.sort_by(|a, b| a.completion.cmp(&b.completion).then_with(|| a.id.cmp(&b.id)));
        Self { results, timeline }
    }

    /// Whether the run had no processes.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Finds the result for a process.
    pub fn result_for(&self, id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Completion times keyed in result order.
    pub fn completions(&self) -> Vec<(&str, i64)> {
        self.results
            .iter()
            .map(|r| (r.id.as_str(), r.completion))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_run_derives_metrics() {
        let p = ProcessDescriptor::new("B", 1, 3).with_priority(4);
        let r = ProcessResult::from_run(&p, 5, 8);
        assert_eq!(r.turnaround, 7);
        assert_eq!(r.waiting, 4);
        assert_eq!(r.response, 4);
        assert_eq!(r.priority, 4);
    }

    #[test]
    fn test_outcome_orders_by_completion_then_id() {
        let a = ProcessResult::from_run(&ProcessDescriptor::new("b", 0, 2), 0, 4);
        let b = ProcessResult::from_run(&ProcessDescriptor::new("a", 0, 2), 2, 4);
        let c = ProcessResult::from_run(&ProcessDescriptor::new("c", 0, 1), 0, 1);
        let outcome = ScheduleOutcome::new(vec![a, b, c], Timeline::new());

        let ids: Vec<_> = outcome.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_result_for() {
        let r = ProcessResult::from_run(&ProcessDescriptor::new("A", 0, 2), 0, 2);
        let outcome = ScheduleOutcome::new(vec![r], Timeline::new());
        assert_eq!(outcome.result_for("A").map(|r| r.completion), Some(2));
        assert!(outcome.result_for("Z").is_none());
        assert_eq!(outcome.completions(), vec![("A", 2)]);
    }

    #[test]
    fn test_outcome_json_shape() {
        let r = ProcessResult::from_run(&ProcessDescriptor::new("A", 0, 2), 0, 2);
        let mut timeline = Timeline::new();
        timeline.push("A", 0, 2);
        let outcome = ScheduleOutcome::new(vec![r], timeline);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["results"][0]["waiting"], 0);
        assert_eq!(json["timeline"]["segments"][0]["end"], 2);
    }
}
