use crate::error::PlanningError;
use fairshare_domain::{Balances, Transfer};

/// Turns signed balances into an ordered list of transfers.
pub trait TransferPlanner: Send + Sync {
    fn plan<'a>(&self, balances: &Balances<'a>) -> Result<Vec<Transfer<'a>>, PlanningError>;
}
