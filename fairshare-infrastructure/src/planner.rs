use fairshare_application::{PlanningError, TransferPlanner};
use fairshare_domain::{
    Balances, CurrencyContext, MinimalPlanError, MinimalTransferPlanner, SettlementPlanner,
    Transfer,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyTransferPlanner {
    planner: SettlementPlanner,
}

impl GreedyTransferPlanner {
    pub fn new(context: CurrencyContext) -> Self {
        Self {
            planner: SettlementPlanner::new(context),
        }
    }
}

impl TransferPlanner for GreedyTransferPlanner {
    fn plan<'a>(&self, balances: &Balances<'a>) -> Result<Vec<Transfer<'a>>, PlanningError> {
        Ok(self.planner.plan(balances)?)
    }
}

/// Exact minimum-transfer planner.
///
/// Tables the exact search rejects for any reason other than imbalance are
/// planned greedily instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactTransferPlanner {
    exact: MinimalTransferPlanner,
    fallback: SettlementPlanner,
}

impl ExactTransferPlanner {
    pub fn new(context: CurrencyContext) -> Self {
        Self {
            exact: MinimalTransferPlanner::new(context),
            fallback: SettlementPlanner::new(context),
        }
    }
}

impl TransferPlanner for ExactTransferPlanner {
    fn plan<'a>(&self, balances: &Balances<'a>) -> Result<Vec<Transfer<'a>>, PlanningError> {
        match self.exact.plan(balances) {
            Ok(transfers) => Ok(transfers),
            Err(MinimalPlanError::Unbalanced(err)) => Err(err.into()),
            Err(err) => {
                tracing::warn!(
                    reason = %err,
                    "Exact plan unavailable; falling back to greedy"
                );
                Ok(self.fallback.plan(balances)?)
            }
        }
    }
}
