//! Input validation and error types.
//!
//! Checks a process set before any simulated time advances. Detects:
//! - Empty process sets
//! - Empty or overlong names
//! - Negative arrival times
//! - Non-positive burst times
//! - Time horizons that would overflow `i64`
//!
//! Every problem found is reported, not just the first. Duplicate names are
//! accepted: a name is a display label, not a key.

use std::fmt;

use crate::models::ProcessInput;

/// Longest accepted process name, in characters.
pub const MAX_NAME_LEN: usize = 9;

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
    /// No processes were supplied.
    EmptyProcessSet,
    /// A process has an empty name.
    EmptyName,
    /// A process name exceeds [`MAX_NAME_LEN`].
    NameTooLong,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or less).
    NonPositiveBurst,
    /// The simulated horizon does not fit in `i64`.
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

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Failure of a simulation entry point.
///
/// Raised before the run starts; no partial result exists when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set failed validation.
    InvalidInput(Vec<ValidationError>),
    /// Round-Robin quantum is zero or negative.
    InvalidQuantum(i64),
    /// The algorithm selector names none of the supported algorithms.
    UnsupportedAlgorithm(String),
}

impl SimulationError {
    /// Validation errors, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
            Self::InvalidQuantum(q) => write!(f, "quantum must be a positive integer, got {q}"),
            Self::UnsupportedAlgorithm(s) => write!(f, "unsupported scheduling algorithm '{s}'"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. Every name is non-empty and at most [`MAX_NAME_LEN`] characters
/// 3. Every arrival time is ≥ 0
/// 4. Every burst time is > 0
/// 5. `max(arrival) + sum(burst)` fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessInput]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "At least one process is required",
        )]);
    }

    let mut errors = Vec::new();

    for (i, p) in processes.iter().enumerate() {
        if p.name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process #{} has an empty name", i + 1),
            ));
        } else if p.name.chars().count() > MAX_NAME_LEN {
            errors.push(ValidationError::new(
                ValidationErrorKind::NameTooLong,
                format!(
                    "Process name '{}' is longer than {MAX_NAME_LEN} characters",
                    p.name
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.name, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.name, p.burst_time
                ),
            ));
        }
    }

    if errors.is_empty() && horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time overflows the clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round-Robin quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), SimulationError> {
    if quantum <= 0 {
        return Err(SimulationError::InvalidQuantum(quantum));
    }
    Ok(())
}

/// Upper bound on the last completion time, `None` on overflow.
fn horizon(processes: &[ProcessInput]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}
