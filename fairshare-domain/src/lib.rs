#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{InvalidInputError, MinimalPlanError, UnbalancedInputError};
pub use model::{
    BalanceStatus, Balances, EqualSplit, Item, ItemizedSplit, Money, MoneyParseError, Participant,
    Transfer, apply_transfers,
};
pub use services::{
    BalanceCalculator, CurrencyContext, MinimalTransferPlanner, RoundingMode, SettlementPlanner,
    UnsupportedScale,
};
