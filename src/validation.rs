//! Input validation for scheduling runs.
//!
//! Checks process descriptors and run parameters before any simulation
//! state is created. Detects:
//! - Duplicate or empty IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive Round-Robin quanta
//! - Workloads whose latest possible completion does not fit in `i64`
//!
//! All problems are collected, so callers can report every issue at once.

use crate::models::ProcessDescriptor;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process has an empty ID.
    EmptyId,
    /// A process has burst < 1.
    InvalidBurst,
    /// A process has arrival < 0.
    InvalidArrival,
    /// Round-Robin quantum < 1.
    InvalidQuantum,
    /// `max(arrival) + sum(burst)` exceeds the time range.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process descriptors of a run.
///
/// Checks:
/// 1. Every ID is non-empty
/// 2. No duplicate IDs
/// 3. `burst >= 1`
/// 4. `arrival >= 0`
/// 5. `max(arrival) + sum(burst)` fits in `i64`
///
/// No completion can exceed the bound in (5), so a run over validated input
/// never overflows its clock. An empty slice is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut latest_arrival = 0i64;
    let mut total_burst = Some(0i64);

    for (position, p) in processes.iter().enumerate() {
        if p.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {position} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process '{}' has burst {}, expected at least 1", p.id, p.burst),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }

        latest_arrival = latest_arrival.max(p.arrival);
        total_burst = total_burst.and_then(|total| total.checked_add(p.burst.max(0)));
    }

    if total_burst
        .and_then(|total| total.checked_add(latest_arrival))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum < 1 {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be at least 1, got {quantum}"),
        )])
    } else {
        Ok(())
    }
}

/// Validates processes and quantum together, merging their errors.
pub fn validate_round_robin(processes: &[ProcessDescriptor], quantum: i64) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();
    if let Err(quantum_errors) = validate_quantum(quantum) {
        errors.extend(quantum_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
