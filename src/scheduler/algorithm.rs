//! Algorithm catalogue and run configuration.
//!
//! Maps each named CPU scheduling algorithm to its driver and rule chain,
//! and provides the one-call entry points used by presentation layers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{PolicyScheduler, RoundRobinScheduler, ScheduleKpi};
use crate::dispatching::{rules, RuleEngine};
use crate::error::ScheduleError;
use crate::models::{ProcessDescriptor, ScheduleOutcome};
use crate::validation::validate_round_robin;

/// A CPU scheduling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First.
    SjfPreemptive,
    /// Lowest priority value first, non-preemptive.
    Priority,
    /// Lowest priority value first, preempting on arrival.
    PriorityPreemptive,
    /// Fixed-quantum time slicing.
    RoundRobin,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::SjfPreemptive,
        Algorithm::Priority,
        Algorithm::PriorityPreemptive,
        Algorithm::RoundRobin,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::SjfPreemptive => "SJF (Preemptive)",
            Algorithm::Priority => "Priority Scheduling",
            Algorithm::PriorityPreemptive => "Priority Scheduling (Preemptive)",
            Algorithm::RoundRobin => "Round Robin",
        }
    }

    /// Short machine-friendly code (matches the serde form).
    pub fn code(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::SjfPreemptive => "sjf-preemptive",
            Algorithm::Priority => "priority",
            Algorithm::PriorityPreemptive => "priority-preemptive",
            Algorithm::RoundRobin => "round-robin",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(self) -> bool {
        matches!(
            self,
            Algorithm::SjfPreemptive | Algorithm::PriorityPreemptive | Algorithm::RoundRobin
        )
    }

    /// Whether process priorities affect the schedule.
    pub fn uses_priority(self) -> bool {
        matches!(self, Algorithm::Priority | Algorithm::PriorityPreemptive)
    }

    /// Whether a time quantum must be supplied.
    pub fn requires_quantum(self) -> bool {
        self == Algorithm::RoundRobin
    }

    /// Ready-set ordering for policy-driven algorithms.
    ///
    /// `None` for Round-Robin, which uses its own FIFO queue.
    pub fn rule_engine(self) -> Option<RuleEngine> {
        let engine = match self {
            Algorithm::Fcfs => RuleEngine::new().with_rule(rules::Arrival),
            Algorithm::Sjf => RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::Arrival),
            Algorithm::SjfPreemptive => RuleEngine::new()
                .with_rule(rules::ShortestRemaining)
                .with_tie_breaker(rules::Arrival),
            Algorithm::Priority | Algorithm::PriorityPreemptive => RuleEngine::new()
                .with_rule(rules::Priority)
                .with_tie_breaker(rules::Arrival),
            Algorithm::RoundRobin => return None,
        };
        Some(engine)
    }

    /// Policy-driven scheduler for this algorithm, if it has one.
    pub fn policy_scheduler(self) -> Option<PolicyScheduler> {
        self.rule_engine()
            .map(|engine| PolicyScheduler::new(engine).with_preemption(self.is_preemptive()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    /// Accepts display names, codes and common abbreviations, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Some(alg) = Algorithm::ALL
            .into_iter()
            .find(|a| a.name().to_ascii_lowercase() == key || a.code() == key)
        {
            return Ok(alg);
        }
        match key.as_str() {
            "fifo" => Ok(Algorithm::Fcfs),
            "srtf" | "srt" => Ok(Algorithm::SjfPreemptive),
            "rr" => Ok(Algorithm::RoundRobin),
            _ => Err(ScheduleError::configuration(format!(
                "unknown scheduling algorithm '{s}'"
            ))),
        }
    }
}

/// Algorithm selection plus algorithm-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Time quantum (required for Round-Robin, ignored otherwise).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SchedulerConfig {
    /// Creates a configuration without a quantum.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            quantum: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Runs the configured algorithm.
    ///
    /// # Errors
    /// - [`ScheduleError::Configuration`] when Round-Robin has no quantum.
    /// - [`ScheduleError::InvalidInput`] for malformed processes or quantum.
    pub fn run(&self, processes: &[ProcessDescriptor]) -> Result<ScheduleOutcome, ScheduleError> {
        debug!(algorithm = %self.algorithm, quantum = ?self.quantum, "running scheduler");
        match self.algorithm.policy_scheduler() {
            Some(scheduler) => scheduler.schedule(processes),
            None => {
                let quantum = self.quantum.ok_or_else(|| {
                    ScheduleError::configuration(format!(
                        "{} requires a time quantum",
                        self.algorithm
                    ))
                })?;
                RoundRobinScheduler::new(quantum).schedule(processes)
            }
        }
    }
}

/// One algorithm's result in a side-by-side comparison.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Algorithm that produced the outcome.
    pub algorithm: Algorithm,
    /// Results and timeline.
    pub outcome: ScheduleOutcome,
    /// Aggregate metrics of the outcome.
    pub kpi: ScheduleKpi,
}

/// Runs every algorithm on the same processes.
///
/// Input is validated once up front, so either every algorithm produces an
/// outcome or none does; the drivers then simulate without re-checking.
///
/// # Errors
/// [`ScheduleError::InvalidInput`] for malformed processes or quantum.
#[instrument(level = "debug", skip_all, fields(quantum = quantum, processes = processes.len()))]
pub fn compare(
    processes: &[ProcessDescriptor],
    quantum: i64,
) -> Result<Vec<Comparison>, ScheduleError> {
    validate_round_robin(processes, quantum)?;

    Ok(Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let outcome = match algorithm.policy_scheduler() {
                Some(scheduler) => scheduler.simulate(processes),
                None => RoundRobinScheduler::new(quantum).simulate(processes),
            };
            let kpi = ScheduleKpi::calculate(&outcome);
            debug!(%algorithm, avg_waiting = kpi.avg_waiting, "compared");
            Comparison {
                algorithm,
                outcome,
                kpi,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_names() {
        for alg in Algorithm::ALL {
            assert_eq!(alg.name().parse::<Algorithm>().unwrap(), alg);
            assert_eq!(alg.code().parse::<Algorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("SRTF".parse::<Algorithm>().unwrap(), Algorithm::SjfPreemptive);
        assert_eq!(" rr ".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("round robin".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert!(matches!(
            "lottery".parse::<Algorithm>(),
            Err(ScheduleError::Configuration(_))
        ));
    }

    #[test]
    fn test_flags() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(Algorithm::SjfPreemptive.is_preemptive());
        assert!(Algorithm::PriorityPreemptive.uses_priority());
        assert!(!Algorithm::Sjf.uses_priority());
        assert!(Algorithm::RoundRobin.requires_quantum());
        assert!(Algorithm::RoundRobin.rule_engine().is_none());
        assert!(Algorithm::Priority.policy_scheduler().is_some());
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Algorithm::PriorityPreemptive).unwrap();
        assert_eq!(json, "\"priority-preemptive\"");

        let config: SchedulerConfig =
            serde_json::from_str(r#"{"algorithm":"round-robin","quantum":3}"#).unwrap();
        assert_eq!(config, SchedulerConfig::new(Algorithm::RoundRobin).with_quantum(3));

        let config: SchedulerConfig = serde_json::from_str(r#"{"algorithm":"sjf"}"#).unwrap();
        assert_eq!(config.quantum, None);
    }

    #[test]
    fn test_round_robin_without_quantum() {
        let processes = vec![ProcessDescriptor::new("A", 0, 3)];
        let err = SchedulerConfig::new(Algorithm::RoundRobin)
            .run(&processes)
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration(_)));
        assert!(err.to_string().contains("Round Robin"));
    }

    #[test]
    fn test_quantum_ignored_for_policy_algorithms() {
        let processes = vec![ProcessDescriptor::new("A", 0, 3)];
        let outcome = SchedulerConfig::new(Algorithm::Fcfs)
            .with_quantum(0)
            .run(&processes)
            .unwrap();
        assert_eq!(outcome.results[0].completion, 3);
    }

    #[test]
    fn test_compare_runs_every_algorithm() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 6).with_priority(2),
            ProcessDescriptor::new("B", 1, 2).with_priority(1),
            ProcessDescriptor::new("C", 2, 8).with_priority(3),
        ];
        let comparisons = compare(&processes, 2).unwrap();
        assert_eq!(comparisons.len(), Algorithm::ALL.len());
        for c in &comparisons {
            assert_eq!(c.outcome.results.len(), 3);
            assert_eq!(c.kpi.makespan, 16);
        }
    }

    #[test]
    fn test_compare_matches_individual_runs() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 5).with_priority(2),
            ProcessDescriptor::new("B", 1, 3).with_priority(1),
            ProcessDescriptor::new("C", 4, 1).with_priority(1),
            ProcessDescriptor::new("D", 12, 2).with_priority(0),
        ];
        for c in compare(&processes, 2).unwrap() {
            let single = SchedulerConfig::new(c.algorithm)
                .with_quantum(2)
                .run(&processes)
                .unwrap();
            assert_eq!(c.outcome, single, "{}", c.algorithm);
            assert_eq!(c.kpi, ScheduleKpi::calculate(&single));
        }
    }

    #[test]
    fn test_compare_rejects_bad_quantum() {
        let processes = vec![ProcessDescriptor::new("A", 0, 1)];
        assert!(matches!(
            compare(&processes, 0),
            Err(ScheduleError::InvalidInput(_))
        ));
    }
}
