pub mod balance_calculator;
pub mod currency;
pub mod minimal_planner;
pub mod settlement_planner;

pub use balance_calculator::BalanceCalculator;
pub use currency::{CurrencyContext, RoundingMode, UnsupportedScale};
pub use minimal_planner::MinimalTransferPlanner;
pub use settlement_planner::SettlementPlanner;
