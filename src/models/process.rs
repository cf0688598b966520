//! Process descriptor model.
//!
//! A process descriptor is the input unit of a scheduling run: an identifier,
//! the instant it becomes eligible to run, the CPU time it needs, and an
//! optional priority.

use serde::{Deserialize, Serialize};

/// A process submitted to a scheduling run.
///
/// Descriptors are immutable inputs. Schedulers take them by shared
/// reference and never write back into them; all derived timing lives in
/// [`ProcessResult`](super::ProcessResult).
///
/// # Time Representation
/// All times are integer time units relative to the start of the run (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier.
    pub id: String,
    /// Time unit at which the process becomes ready.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessDescriptor {
    /// Creates a descriptor with priority 0.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival <= clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let p = ProcessDescriptor::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, 2);
    }

    #[test]
    fn test_default_priority() {
        assert_eq!(ProcessDescriptor::new("P1", 0, 1).priority, 0);
    }

    #[test]
    fn test_has_arrived_is_inclusive() {
        let p = ProcessDescriptor::new("P1", 5, 1);
        assert!(!p.has_arrived(4));
        assert!(p.has_arrived(5));
        assert!(p.has_arrived(6));
    }

    #[test]
    fn test_priority_defaults_when_missing_in_json() {
        let p: ProcessDescriptor =
            serde_json::from_str(r#"{"id":"A","arrival":0,"burst":4}"#).unwrap();
        assert_eq!(p, ProcessDescriptor::new("A", 0, 4));
    }
}
