//! Scheduling context for dispatching rule evaluation.

use crate::models::ProcessDescriptor;

/// Runtime simulation state passed to dispatching rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation clock.
    pub clock: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(clock: i64) -> Self {
        Self { clock }
    }
}

/// A process in the ready set, as seen by dispatching rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadyProcess<'a> {
    /// Position of the process in the caller's input slice.
    pub slot: usize,
    /// The immutable input descriptor.
    pub process: &'a ProcessDescriptor,
    /// CPU time still needed.
    pub remaining: i64,
}

impl<'a> ReadyProcess<'a> {
    /// A ready process with an explicit remaining burst.
    pub fn new(slot: usize, process: &'a ProcessDescriptor, remaining: i64) -> Self {
        Self {
            slot,
            process,
            remaining,
        }
    }

    /// A ready process that has not run yet.
    pub fn fresh(slot: usize, process: &'a ProcessDescriptor) -> Self {
        Self::new(slot, process, process.burst)
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> &'a str {
        &self.process.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_candidate() {
        let p = ProcessDescriptor::new("A", 2, 5);
        let c = ReadyProcess::fresh(3, &p);
        assert_eq!(c.slot, 3);
        assert_eq!(c.remaining, 5);
        assert_eq!(c.id(), "A");
    }

    #[test]
    fn test_partially_run_candidate() {
        let p = ProcessDescriptor::new("A", 2, 5);
        assert_eq!(ReadyProcess::new(0, &p, 1).remaining, 1);
    }
}
