use thiserror::Error;

/// Failure kinds surfaced by the settlement computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputReason),

    /// Net balances did not sum to zero before settlement. This signals a
    /// defect in the balance calculation, not a user input problem.
    #[error("net balances sum to {residual} instead of zero")]
    InconsistentBalance { residual: f64 },
}

/// Why a settlement request was rejected before any computation ran
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputReason {
    #[error("at least one entry is required")]
    NoEntries,

    #[error("entry {index} has an empty name")]
    EmptyName { index: usize },

    #[error("amount for '{name}' is negative ({amount})")]
    NegativeAmount { name: String, amount: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomainError::from(InvalidInputReason::NoEntries);
        assert_eq!(err.to_string(), "invalid input: at least one entry is required");

        let err = DomainError::from(InvalidInputReason::NegativeAmount {
            name: "Ana".to_string(),
            amount: -10.0,
        });
        assert_eq!(err.to_string(), "invalid input: amount for 'Ana' is negative (-10)");

        let err = DomainError::InconsistentBalance { residual: 0.5 };
        assert_eq!(err.to_string(), "net balances sum to 0.5 instead of zero");
    }
}
