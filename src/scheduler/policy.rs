//! Policy-driven single-CPU simulation.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival <= clock` into the ready set.
//! 2. If nothing is ready, jump the clock to the next arrival (idle gap).
//! 3. Pick the ready process ranked first by the [`RuleEngine`].
//! 4. Non-preemptive: run it to completion.
//!    Preemptive: run it until it completes or the next arrival instant,
//!    whichever comes first, then let newcomers challenge it.
//!
//! FCFS, SJF, SRTF and both priority variants are all this driver with a
//! different rule chain.
//!
//! # Complexity
//! O(e * n) where e = dispatch events (at most 2n when preemptive) and
//! n = processes.

use tracing::{debug, instrument, trace};

use crate::dispatching::{ReadyProcess, RuleEngine, SchedulingContext};
use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, ProcessResult, ScheduleOutcome, Timeline};
use crate::validation::validate_processes;

/// Single-CPU scheduler whose ready-set policy is a [`RuleEngine`].
///
/// # Example
///
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
/// use u_cpusched::models::ProcessDescriptor;
/// use u_cpusched::scheduler::PolicyScheduler;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_tie_breaker(rules::Arrival);
/// let scheduler = PolicyScheduler::new(engine);
///
/// let processes = vec![
///     ProcessDescriptor::new("A", 0, 6),
///     ProcessDescriptor::new("B", 1, 2),
/// ];
/// let outcome = scheduler.schedule(&processes).unwrap();
/// assert_eq!(outcome.timeline.dispatch_order(), vec!["A", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyScheduler {
    engine: RuleEngine,
    preemptive: bool,
}

impl PolicyScheduler {
    /// Creates a non-preemptive scheduler.
    pub fn new(engine: RuleEngine) -> Self {
        Self {
            engine,
            preemptive: false,
        }
    }

    /// Enables or disables preemption on arrival events.
    pub fn with_preemption(mut self, preemptive: bool) -> Self {
        self.preemptive = preemptive;
        self
    }

    /// Whether newly arrived processes may displace the running one.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive
    }

    /// The ready-set ordering in use.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Validates `processes` and simulates them.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidInput`] if any descriptor is malformed. No
    /// simulation happens in that case.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            rules = ?self.engine.rule_names(),
            preemptive = self.preemptive,
            processes = processes.len()
        )
    )]
    pub fn schedule(
        &self,
        processes: &[ProcessDescriptor],
    ) -> Result<ScheduleOutcome, ScheduleError> {
        validate_processes(processes)?;
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

        // Arrival queue: stable by input position for equal arrivals.
        let mut arrivals: Vec<usize> = (0..n).collect();
        arrivals.sort_by_key(|&slot| (processes[slot].arrival, slot));

        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut first_dispatch: Vec<Option<i64>> = vec![None; n];
        let mut results = Vec::with_capacity(n);
        let mut timeline = Timeline::new();

        let mut ready: Vec<usize> = Vec::new();
        let mut running: Option<usize> = None;
        let mut cursor = 0;
        let mut clock = 0;

        while results.len() < n {
            while cursor < n && processes[arrivals[cursor]].has_arrived(clock) {
                ready.push(arrivals[cursor]);
                cursor += 1;
            }

            let context = SchedulingContext::at_time(clock);
            let best = self.best_ready(processes, &ready, &remaining, &context);

            let current = match (running, best) {
                (Some(slot), Some(pos)) => {
                    let other = ready[pos];
                    let challenger = ReadyProcess::new(other, &processes[other], remaining[other]);
                    let incumbent = ReadyProcess::new(slot, &processes[slot], remaining[slot]);
                    if self.engine.preempts(&challenger, &incumbent, &context) {
                        trace!(
                            clock,
                            preempted = incumbent.id(),
                            by = challenger.id(),
                            remaining = incumbent.remaining,
                            "preemption"
                        );
                        let next = ready.remove(pos);
                        ready.push(slot);
                        next
                    } else {
                        slot
                    }
                }
                (Some(slot), None) => slot,
                (None, Some(pos)) => ready.remove(pos),
                (None, None) => match arrivals.get(cursor) {
                    Some(&next) => {
                        trace!(clock, until = processes[next].arrival, "cpu idle");
                        clock = processes[next].arrival;
                        continue;
                    }
                    None => break,
                },
            };

            let process = &processes[current];
            let start = *first_dispatch[current].get_or_insert(clock);
            if running != Some(current) {
                trace!(clock, id = %process.id, remaining = remaining[current], "dispatch");
            }

            let finish = clock + remaining[current];
            let until = if self.preemptive {
                match arrivals.get(cursor).map(|&next| processes[next].arrival) {
                    Some(arrival) if arrival < finish => arrival,
                    _ => finish,
                }
            } else {
                finish
            };

            timeline.push(&process.id, clock, until);
            remaining[current] -= until - clock;
            clock = until;

            if remaining[current] == 0 {
                trace!(clock, id = %process.id, "completed");
                results.push(ProcessResult::from_run(process, start, clock));
                running = None;
            } else {
                running = Some(current);
            }
        }

        ScheduleOutcome::new(results, timeline)
    }

    /// Position in `ready` of the process the engine ranks first.
    fn best_ready(
        &self,
        processes: &[ProcessDescriptor],
        ready: &[usize],
        remaining: &[i64],
        context: &SchedulingContext,
    ) -> Option<usize> {
        let candidates: Vec<ReadyProcess<'_>> = ready
            .iter()
            .map(|&slot| ReadyProcess::new(slot, &processes[slot], remaining[slot]))
            .collect();
        self.engine.select_best(&candidates, context)
    }
}
