use crate::model::Money;
use thiserror::Error;

/// Rejection of a whole calculation run caused by caller-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("At least one participant is required")]
    NoParticipants,
    #[error("Total amount must be positive (found {0})")]
    NonPositiveTotal(Money),
    #[error("Total amount is not numeric (found '{raw}')")]
    NonNumericTotal { raw: String },
    #[error("Amount paid by '{name}' must not be negative (found {amount})")]
    NegativeAmount { name: String, amount: Money },
    #[error("Amount paid by '{name}' exceeds {max} (found {amount})")]
    AmountTooLarge {
        name: String,
        amount: Money,
        max: Money,
    },
    #[error("Amount paid by '{name}' has more than {scale} decimal places (found {amount})")]
    FractionalAmount {
        name: String,
        amount: Money,
        scale: u32,
    },
    #[error("Total amount exceeds {max} (found {amount})")]
    TotalTooLarge { amount: Money, max: Money },
    #[error("Total amount has more than {scale} decimal places (found {amount})")]
    FractionalTotal { amount: Money, scale: u32 },
    #[error("Amount paid by '{name}' is not numeric (found '{raw}')")]
    NonNumericAmount { name: String, raw: String },
    #[error("Participant #{position} has no name")]
    MissingName { position: usize },
    #[error("Participant '{name}' is listed more than once")]
    DuplicateName { name: String },
    #[error("Item '{item}' refers to unknown participant '{name}'")]
    UnknownItemParticipant { item: String, name: String },
    #[error("Item '{item}' has no participants")]
    EmptyItem { item: String },
    #[error("Item '{item}' must have a positive amount (found {amount})")]
    NonPositiveItemAmount { item: String, amount: Money },
    #[error("Item '{item}' exceeds {max} (found {amount})")]
    ItemAmountTooLarge {
        item: String,
        amount: Money,
        max: Money,
    },
    #[error("Item '{item}' has more than {scale} decimal places (found {amount})")]
    FractionalItemAmount {
        item: String,
        amount: Money,
        scale: u32,
    },
}

/// Debts and credits failed to net out within rounding tolerance.
///
/// Valid input never produces this; it signals a defect upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Debts ({debts}) and credits ({credits}) differ by more than {tolerance}")]
pub struct UnbalancedInputError {
    pub debts: Money,
    pub credits: Money,
    pub tolerance: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MinimalPlanError {
    #[error(transparent)]
    Unbalanced(#[from] UnbalancedInputError),
    #[error("Too many unsettled balances for an exact plan (found {count}, max {max})")]
    TooManyBalances { count: usize, max: usize },
    #[error("Balance {0} is not a whole number of currency units")]
    NonIntegral(Money),
    #[error("Balance {0} is too large for an exact plan")]
    OutOfRange(Money),
}
