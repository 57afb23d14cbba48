//! Crate error type.

use crate::validation::ValidationError;

/// Errors surfaced by the simulator and its input parsing.
///
/// The policies themselves never fail; every error here is detected
/// before a run starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid simulation request: {}", join_errors(.0))]
    InvalidRequest(Vec<ValidationError>),

    #[error("unknown scheduling policy: {0:?} (expected fcfs, sjf, srt or rr:<quantum>)")]
    UnknownPolicy(String),

    #[error("invalid process spec {0:?} (expected ARRIVAL:BURST)")]
    InvalidProcessSpec(String),
}

impl SimulationError {
    /// Validation errors carried by an `InvalidRequest`, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidRequest(errors) => errors,
            _ => &[],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_request_message() {
        let err = SimulationError::InvalidRequest(vec![
            ValidationError::new(ValidationErrorKind::EmptyWorkload, "no processes"),
            ValidationError::new(ValidationErrorKind::NonPositiveQuantum, "quantum is 0"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid simulation request: no processes; quantum is 0"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_unknown_policy_message() {
        let err = SimulationError::UnknownPolicy("lottery".into());
        assert!(err.to_string().contains("\"lottery\""));
        assert!(err.validation_errors().is_empty());
    }
}
