use fairshare_domain::{InvalidInputError, UnbalancedInputError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    #[error(transparent)]
    Unbalanced(#[from] UnbalancedInputError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Planning(#[from] PlanningError),
}

/// Malformed `NAME=AMOUNT` or `ITEM=AMOUNT:NAME,...` argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Expected NAME=AMOUNT (found '{0}')")]
    MissingAmount(String),
    #[error("Expected ITEM=AMOUNT:NAME,... (found '{0}')")]
    MissingItemParticipants(String),
    #[error("Amount of item '{item}' is not numeric (found '{raw}')")]
    InvalidItemAmount { item: String, raw: String },
}
