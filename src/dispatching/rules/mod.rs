//! Built-in dispatching rules.
//!
//! # Categories
//!
//! - **Time-based**: SJF (shortest burst), SRT (shortest remaining)
//! - **Queue**: FIFO (earliest arrival)
//! - **Priority**: PRIORITY
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, ReadyProcess, RuleScore, SchedulingContext};

// ======================== Time-based rules ========================

/// Shortest Job First.
///
/// Prioritizes processes with the smallest total burst. Optimal for mean
/// waiting time among non-preemptive policies when all jobs are ready.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, candidate: &ReadyProcess<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate.process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time.
///
/// Prioritizes processes with the least CPU time still needed. Equal to
/// [`ShortestBurst`] for processes that have not run yet.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn evaluate(&self, candidate: &ReadyProcess<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

// ======================== Queue rules ========================

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Arrival;

impl DispatchingRule for Arrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, candidate: &ReadyProcess<'_>, _context: &SchedulingContext) -> RuleScore {
        candidate.process.arrival
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

// ======================== Priority-based rule ========================

/// Simple priority rule.
///
/// Prioritizes processes with lower `priority` values.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, candidate: &ReadyProcess<'_>, _context: &SchedulingContext) -> RuleScore {
        RuleScore::from(candidate.process.priority)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessDescriptor;

    fn make_process(id: &str, arrival: i64, burst: i64, priority: i32) -> ProcessDescriptor {
        ProcessDescriptor::new(id, arrival, burst).with_priority(priority)
    }

    #[test]
    fn test_shortest_burst() {
        let ctx = SchedulingContext::at_time(0);
        let short = make_process("short", 0, 2, 0);
        let long = make_process("long", 0, 8, 0);
        assert!(
            ShortestBurst.evaluate(&ReadyProcess::fresh(0, &short), &ctx)
                < ShortestBurst.evaluate(&ReadyProcess::fresh(1, &long), &ctx)
        );
    }

    #[test]
    fn test_shortest_burst_ignores_progress() {
        let ctx = SchedulingContext::at_time(0);
        let p = make_process("p", 0, 8, 0);
        assert_eq!(ShortestBurst.evaluate(&ReadyProcess::new(0, &p, 1), &ctx), 8);
    }

    #[test]
    fn test_shortest_remaining() {
        let ctx = SchedulingContext::at_time(4);
        let almost_done = make_process("almost_done", 0, 10, 0);
        let fresh = make_process("fresh", 4, 3, 0);
        assert!(
            ShortestRemaining.evaluate(&ReadyProcess::new(0, &almost_done, 1), &ctx)
                < ShortestRemaining.evaluate(&ReadyProcess::fresh(1, &fresh), &ctx)
        );
    }

    #[test]
    fn test_arrival() {
        let ctx = SchedulingContext::at_time(5);
        let first = make_process("first", 1, 9, 0);
        let second = make_process("second", 3, 1, 0);
        assert!(
            Arrival.evaluate(&ReadyProcess::fresh(1, &first), &ctx)
                < Arrival.evaluate(&ReadyProcess::fresh(0, &second), &ctx)
        );
    }

    #[test]
    fn test_priority_lower_value_first() {
        let ctx = SchedulingContext::at_time(0);
        let urgent = make_process("urgent", 0, 5, 1);
        let background = make_process("background", 0, 5, 10);
        assert!(
            Priority.evaluate(&ReadyProcess::fresh(0, &urgent), &ctx)
                < Priority.evaluate(&ReadyProcess::fresh(1, &background), &ctx)
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(ShortestBurst.name(), "SJF");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Time");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
