//! Round-Robin time slicing.
//!
//! # Algorithm
//!
//! 1. Processes join a FIFO ready queue when they arrive (ties by input order).
//! 2. The head of the queue runs for `min(quantum, remaining)`.
//! 3. Processes that arrived during (or at the end of) that slice are
//!    enqueued first; an unfinished process then rejoins at the tail.
//! 4. An empty queue with pending arrivals jumps the clock forward.
//!
//! With `quantum >= max(burst)` this degenerates to FCFS.

use std::collections::VecDeque;

use tracing::{debug, instrument, trace};

use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, ProcessResult, ScheduleOutcome, Timeline};
use crate::validation::validate_round_robin;

/// Fixed-quantum Round-Robin scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::RoundRobinScheduler;
///
/// let processes = vec![
///     ProcessDescriptor::new("A", 0, 5),
///     ProcessDescriptor::new("B", 1, 3),
/// ];
/// let outcome = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
/// assert_eq!(outcome.timeline.dispatch_order(), vec!["A", "B", "A", "B", "A"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobinScheduler {
    quantum: i64,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given time quantum.
    ///
    /// The quantum is checked when scheduling, alongside the processes.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Time slice granted per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }

    /// Validates `processes` and the quantum, then simulates.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] for malformed descriptors or a
    /// quantum below 1.
    #[instrument(
        level = "debug",
        skip_all,
        fields(quantum = self.quantum, processes = processes.len())
    )]
    pub fn schedule(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<ScheduleOutcome, ScheduleError> {
        validate_round_robin(processes, self.quantum)?;
        let outcome = self.simulate(processes);
        debug!(
            makespan = outcome.timeline.makespan(),
            segments = outcome.timeline.len(),
            "scheduling run finished"
        );
        Ok(outcome)
    }

    /// Runs the simulation on input that has already been validated.
    pub(super) fn simulate(&self, processes: &[ProcessDescriptor]) -> ScheduleOutcome {
        let n = processes.len();

        let mut arrivals: Vec<usize> = (0..n).collect();
        arrivals.sort_by_key(|&slot| (processes[slot].arrival, slot));

        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut first_dispatch: Vec<Option<i64>> = vec![None; n];
        let mut results = Vec::with_capacity(n);
        let mut timeline = Timeline::new();

        let mut queue: VecDeque<usize> = VecDeque::with_capacity(n);
        let mut cursor = 0;
        let mut clock = 0;

        let admit = |clock: i64, cursor: &mut usize, queue: &mut VecDeque<usize>| {
            while *cursor < n && processes[arrivals[*cursor]].has_arrived(clock) {
                queue.push_back(arrivals[*cursor]);
                *cursor += 1;
            }
        };

        while results.len() < n {
            admit(clock, &mut cursor, &mut queue);

            let Some(current) = queue.pop_front() else {
                match arrivals.get(cursor) {
                    Some(&next) => {
                        trace!(clock, until = processes[next].arrival, "cpu idle");
                        clock = processes[next].arrival;
                        continue;
                    }
                    None => break,
                }
            };

            let process = &processes[current];
            let start = *first_dispatch[current].get_or_insert(clock);
            let slice = remaining[current].min(self.quantum);
            trace!(clock, id = %process.id, slice, "dispatch");

            timeline.push(&process.id, clock, clock + slice);
            remaining[current] -= slice;
            clock += slice;

            // Newcomers queue ahead of the process that just used its slice.
            admit(clock, &mut cursor, &mut queue);

            if remaining[current] == 0 {
                trace!(clock, id = %process.id, "completed");
                results.push(ProcessResult::from_run(process, start, clock));
            } else {
                queue.push_back(current);
            }
        }

        ScheduleOutcome::new(results, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimelineSegment;
    use crate::validation::ValidationErrorKind;

    fn seg(id: &str, start: i64, end: i64) -> TimelineSegment {
        TimelineSegment::new(id, start, end)
    }

    #[test]
    fn test_quantum_two() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 5),
            ProcessDescriptor::new("B", 1, 3),
        ];
        let outcome = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
        assert_eq!(
            outcome.timeline.segments,
            vec![
                seg("A", 0, 2),
                seg("B", 2, 4),
                seg("A", 4, 6),
                seg("B", 6, 7),
                seg("A", 7, 8),
            ]
        );
        let a = outcome.result_for("A").unwrap();
        let b = outcome.result_for("B").unwrap();
        assert_eq!((a.start, a.completion, a.waiting), (0, 8, 3));
        assert_eq!((b.start, b.completion, b.waiting), (2, 7, 3));
    }

    #[test]
    fn test_arrival_during_slice_goes_before_requeue() {
        // B arrives at t=1 while A runs; at t=3 B must run before A resumes.
        // C arrives exactly at t=3 and also queues ahead of A.
        let processes = vec![
            ProcessDescriptor::new("A", 0, 6),
            ProcessDescriptor::new("B", 1, 2),
            ProcessDescriptor::new("C", 3, 1),
        ];
        let outcome = RoundRobinScheduler::new(3).schedule(&processes).unwrap();
        assert_eq!(outcome.timeline.dispatch_order(), vec!["A", "B", "C", "A"]);
        assert_eq!(outcome.timeline.segments[3], seg("A", 6, 9));
    }

    #[test]
    fn test_large_quantum_matches_fcfs_order() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 5),
            ProcessDescriptor::new("B", 1, 3),
            ProcessDescriptor::new("C", 2, 8),
        ];
        let outcome = RoundRobinScheduler::new(100).schedule(&processes).unwrap();
        assert_eq!(
            outcome.timeline.segments,
            vec![seg("A", 0, 5), seg("B", 5, 8), seg("C", 8, 16)]
        );
    }

    #[test]
    fn test_lone_process_slices_merge() {
        let processes = vec![ProcessDescriptor::new("A", 0, 5)];
        let outcome = RoundRobinScheduler::new(2).schedule(&processes).unwrap();
        assert_eq!(outcome.timeline.segments, vec![seg("A", 0, 5)]);
    }

    #[test]
    fn test_idle_gap() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("B", 4, 2),
        ];
        let outcome = RoundRobinScheduler::new(1).schedule(&processes).unwrap();
        assert_eq!(outcome.timeline.segments, vec![seg("A", 0, 1), seg("B", 4, 6)]);
        assert_eq!(outcome.timeline.idle_gaps().len(), 1);
    }

    #[test]
    fn test_invalid_quantum() {
        let processes = vec![ProcessDescriptor::new("A", 0, 1)];
        let err = RoundRobinScheduler::new(0).schedule(&processes).unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_invalid_quantum_rejected_even_for_empty_input() {
        assert!(RoundRobinScheduler::new(0).schedule(&[]).is_err());
        assert!(RoundRobinScheduler::new(1).schedule(&[]).unwrap().is_empty());
    }
}
