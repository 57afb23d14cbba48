//! Input validation for simulation requests.
//!
//! The policies assume well-formed input and never re-check it. This
//! module is the gate in front of them. Detects:
//! - Empty workloads
//! - Negative arrival times
//! - Non-positive burst times
//! - Non-positive Round-Robin quanta
//! - Workloads too large to number with `u32` ids
//! - Workloads whose time horizon does not fit `i64`
//!
//! All problems are collected, not just the first one.

use crate::models::ProcessSpec;
use crate::policies::Policy;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyWorkload,
    /// A process arrives before time 0.
    NegativeArrival,
    /// A process has a zero or negative burst.
    NonPositiveBurst,
    /// Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// More processes than ids available.
    TooManyProcesses,
    /// Latest arrival plus total work (times the process count, for the
    /// summed statistics) overflows `i64`.
    HorizonOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload and the selected policy.
///
/// Checks:
/// 1. At least one process
/// 2. Process count fits `u32` ids
/// 3. Every `arrival >= 0`
/// 4. Every `burst > 0`
/// 5. `max(arrival) + sum(burst)`, scaled by the process count, fits `i64`
/// 6. Round-Robin `quantum > 0`
///
/// Process numbers in messages are 1-based, matching assigned ids.
pub fn validate_request(processes: &[ProcessSpec], policy: &Policy) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();

    if let Some(quantum) = policy.quantum() {
        if quantum <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Round-Robin quantum must be positive, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a workload on its own (no policy checks).
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Number of processes must be positive",
        ));
    }

    if u32::try_from(processes.len()).is_err() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyProcesses,
            format!("Too many processes: {}", processes.len()),
        ));
    }

    for (idx, spec) in processes.iter().enumerate() {
        let number = idx + 1;
        if spec.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{number}: arrival time must be non-negative, got {}", spec.arrival),
            ));
        }
        if spec.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{number}: burst time must be positive, got {}", spec.burst),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Arrival and burst times are too large: the schedule would overflow i64",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every completion time, or `None` on overflow.
///
/// No policy idles once the last process has arrived, so every clock
/// value stays within `max(arrival) + sum(burst)`. The bound is also
/// checked against `count` copies of itself, since waiting and
/// turnaround totals add one such value per process.
fn horizon(processes: &[ProcessSpec]) -> Option<i64> {
    let work = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst.max(0)))?;
    let last_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    let horizon = last_arrival.checked_add(work)?;
    let count = i64::try_from(processes.len()).ok()?;
    horizon.checked_mul(count.max(1))?;
    Some(horizon)
}
