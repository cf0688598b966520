//! Dispatching rules and rule engine for CPU scheduling.
//!
//! A dispatching rule scores a ready process; the [`RuleEngine`] chains
//! rules into a total, deterministic ordering over the ready set. Every
//! ready-set policy (FCFS, SJF, SRTF, priority) is just a different chain.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{RuleEngine, SchedulingContext, ReadyProcess};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::ProcessDescriptor;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::Arrival);
//!
//! let a = ProcessDescriptor::new("A", 0, 6);
//! let b = ProcessDescriptor::new("B", 1, 2);
//! let ready = vec![ReadyProcess::fresh(0, &a), ReadyProcess::fresh(1, &b)];
//!
//! let best = engine.select_best(&ready, &SchedulingContext::at_time(6));
//! assert_eq!(best, Some(1));
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::{ReadyProcess, SchedulingContext};
pub use engine::RuleEngine;

use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first. Scores are integral because every
/// input (arrival, burst, priority) is an integer time unit or rank.
pub type RuleScore = i64;

/// A dispatching rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules should return smaller values
/// for processes that should get the CPU sooner.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FIFO").
    fn name(&self) -> &'static str;

    /// Scores a ready process given the current simulation state.
    fn evaluate(&self, candidate: &ReadyProcess<'_>, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
