//! Deterministic CPU scheduling simulator.
//!
//! Runs classic single-CPU scheduling algorithms over a fixed batch of
//! processes and reports per-process timing plus a Gantt-ready timeline.
//! Everything is pure computation on integer time units: no I/O, no global
//! state, and identical input always yields identical output.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProcessDescriptor`, `ProcessResult`,
//!   `Timeline`, `TimelineSegment`, `ScheduleOutcome`
//! - **`dispatching`**: Ready-set ordering — `DispatchingRule`, `RuleEngine`
//! - **`scheduler`**: Algorithms (FCFS, SJF, SRTF, Priority, Round-Robin),
//!   `SchedulerConfig`, and `ScheduleKpi`
//! - **`validation`**: Input integrity checks (duplicate IDs, bursts, quanta)
//! - **`workload`**: Seeded synthetic process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessDescriptor;
//! use u_cpusched::scheduler::{round_robin, ScheduleKpi};
//!
//! let processes = vec![
//!     ProcessDescriptor::new("A", 0, 5),
//!     ProcessDescriptor::new("B", 1, 3),
//! ];
//! let outcome = round_robin(&processes, 2).unwrap();
//! let kpi = ScheduleKpi::calculate(&outcome);
//! assert_eq!(kpi.makespan, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
