//! Rule engine for multi-criteria dispatching.
//!
//! Chains dispatching rules into a deterministic total order over the
//! ready set: primary rules first, then tie-breaking rules, then the
//! process's position in the caller's input, which can never tie.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, ReadyProcess, SchedulingContext};

#[derive(Clone)]
struct RankedRule {
    rule: Arc<dyn DispatchingRule>,
    /// Primary rules decide preemption; tie-breakers only order.
    primary: bool,
}

/// A composable rule engine for ready-set ordering.
///
/// Evaluation is sequential: the next rule is consulted only when the
/// previous one ties.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::RuleEngine;
/// use u_cpusched::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_tie_breaker(rules::Arrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<RankedRule>,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every comparison falls through to input order.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(RankedRule {
            rule: Arc::new(rule),
            primary: true,
        });
        self
    }

    /// Adds a tie-breaking rule (orders, but never triggers preemption).
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(RankedRule {
            rule: Arc::new(rule),
            primary: false,
        });
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.rule.name()).collect()
    }

    /// Total order between two ready processes (`Less` = dispatch `a` first).
    pub fn compare(
        &self,
        a: &ReadyProcess<'_>,
        b: &ReadyProcess<'_>,
        context: &SchedulingContext,
    ) -> Ordering {
        for rr in &self.rules {
            let ord = rr
                .rule
                .evaluate(a, context)
                .cmp(&rr.rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }

        a.slot.cmp(&b.slot)
    }

    /// Returns the index of the candidate to dispatch next.
    pub fn select_best(
        &self,
        candidates: &[ReadyProcess<'_>],
        context: &SchedulingContext,
    ) -> Option<usize> {
        (0..candidates.len()).min_by(|&a, &b| self.compare(&candidates[a], &candidates[b], context))
    }

    /// Whether `challenger` should displace the running `incumbent`.
    ///
    /// Only primary rules are consulted and the challenger must be strictly
    /// better; on a full tie the incumbent keeps the CPU.
    pub fn preempts(
        &self,
        challenger: &ReadyProcess<'_>,
        incumbent: &ReadyProcess<'_>,
        context: &SchedulingContext,
    ) -> bool {
        for rr in self.rules.iter().filter(|r| r.primary) {
            match rr
                .rule
                .evaluate(challenger, context)
                .cmp(&rr.rule.evaluate(incumbent, context))
            {
                Ordering::Less => return true,
                Ordering::Greater => return false,
                Ordering::Equal => {}
            }
        }
        false
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| {
                        if r.primary {
                            r.rule.name().to_string()
                        } else {
                            format!("{}(tie)", r.rule.name())
                        }
                    })
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
