//! Synthetic process workloads.
//!
//! Generates random but reproducible process sets for demos, comparisons
//! and property checks. Given the same seed, [`WorkloadGenerator::generate_seeded`]
//! always returns the same processes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::ProcessDescriptor;

/// Parameters for random process sets.
///
/// Processes are named `P1..Pn` in input order.
///
/// # Example
/// ```
/// use u_cpusched::workload::WorkloadGenerator;
///
/// let processes = WorkloadGenerator::new(5)
///     .with_max_arrival(10)
///     .with_burst_range(2, 6)
///     .generate_seeded(42)
///     .unwrap();
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (2..=6).contains(&p.burst)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival (inclusive).
    pub max_arrival: i64,
    /// Smallest burst (inclusive, at least 1).
    pub burst_min: i64,
    /// Largest burst (inclusive).
    pub burst_max: i64,
    /// Largest priority value (inclusive); 0 gives every process priority 0.
    pub max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            burst_min: 1,
            burst_max: 10,
            max_priority: 5,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_min = min;
        self.burst_max = max;
        self
    }

    /// Sets the largest priority value.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Generates processes from the given RNG.
    ///
    /// # Errors
    /// [`ScheduleError::Configuration`] if a range is empty or would
    /// produce invalid descriptors.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<ProcessDescriptor>, ScheduleError> {
        self.check()?;
        Ok((1..=self.count)
            .map(|i| {
                ProcessDescriptor::new(
                    format!("P{i}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(self.burst_min..=self.burst_max),
                )
                .with_priority(rng.random_range(0..=self.max_priority))
            })
            .collect())
    }

    /// Generates processes deterministically from a seed.
    pub fn generate_seeded(&self, seed: u64) -> Result<Vec<ProcessDescriptor>, ScheduleError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    fn check(&self) -> Result<(), ScheduleError> {
        if self.max_arrival < 0 {
            return Err(ScheduleError::configuration(format!(
                "max_arrival must be non-negative, got {}",
                self.max_arrival
            )));
        }
        if self.burst_min < 1 || self.burst_min > self.burst_max {
            return Err(ScheduleError::configuration(format!(
                "burst range {}..={} must be non-empty and start at 1 or more",
                self.burst_min, self.burst_max
            )));
        }
        if self.max_priority < 0 {
            return Err(ScheduleError::configuration(format!(
                "max_priority must be non-negative, got {}",
                self.max_priority
            )));
        }
        Ok(())
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;

    #[test]
    fn test_generated_processes_are_valid() {
        let processes = WorkloadGenerator::new(50).generate_seeded(1).unwrap();
        assert_eq!(processes.len(), 50);
        assert!(validate_processes(&processes).is_ok());
        assert_eq!(processes[0].id, "P1");
        assert_eq!(processes[49].id, "P50");
    }

    #[test]
    fn test_ranges_respected() {
        let gen = WorkloadGenerator::new(100)
            .with_max_arrival(4)
            .with_burst_range(3, 5)
            .with_max_priority(2);
        for p in gen.generate_seeded(9).unwrap() {
            assert!((0..=4).contains(&p.arrival));
            assert!((3..=5).contains(&p.burst));
            assert!((0..=2).contains(&p.priority));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let gen = WorkloadGenerator::default();
        assert_eq!(gen.generate_seeded(5).unwrap(), gen.generate_seeded(5).unwrap());
    }

    #[test]
    fn test_generate_with_external_rng() {
        let mut rng = SmallRng::seed_from_u64(11);
        let processes = WorkloadGenerator::new(3).generate(&mut rng).unwrap();
        assert_eq!(processes.len(), 3);
    }

    #[test]
    fn test_zero_count() {
        assert!(WorkloadGenerator::new(0).generate_seeded(0).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_ranges() {
        let bad_burst = WorkloadGenerator::new(3).with_burst_range(0, 4);
        assert!(matches!(
            bad_burst.generate_seeded(0),
            Err(ScheduleError::Configuration(_))
        ));
        assert!(WorkloadGenerator::new(3)
            .with_burst_range(5, 2)
            .generate_seeded(0)
            .is_err());
        assert!(WorkloadGenerator::new(3)
            .with_max_arrival(-1)
            .generate_seeded(0)
            .is_err());
        assert!(WorkloadGenerator::new(3)
            .with_max_priority(-1)
            .generate_seeded(0)
            .is_err());
    }
}
