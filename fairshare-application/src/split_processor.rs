use crate::{
    error::SplitError,
    model::{PersonSummary, SettlementReport, SplitMode, SplitRequest},
    ports::TransferPlanner,
};
use fairshare_domain::{BalanceCalculator, BalanceStatus, Balances, Money, Participant};
use std::collections::HashMap;

/// Runs one calculation: balances first, then the transfer plan.
#[derive(Clone, Copy)]
pub struct SplitProcessor<'a> {
    calculator: BalanceCalculator,
    planner: &'a dyn TransferPlanner,
}

impl<'a> SplitProcessor<'a> {
    pub fn new(calculator: BalanceCalculator, planner: &'a dyn TransferPlanner) -> Self {
        Self {
            calculator,
            planner,
        }
    }

    pub fn process<'r>(&self, request: &'r SplitRequest) -> Result<SettlementReport<'r>, SplitError> {
        let participants = &request.participants;
        let (total, equal_share, owed, balances) = match &request.mode {
            SplitMode::Equal { total } => {
                let split = self.calculator.compute(*total, participants)?;
                let owed: HashMap<&str, Money> = participants
                    .iter()
                    .map(|p| (p.name.as_str(), split.equal_share))
                    .collect();
                (*total, Some(split.equal_share), owed, split.balances)
            }
            SplitMode::Itemized { items } => {
                let split = self.calculator.compute_itemized(items, participants)?;
                let owed: HashMap<&str, Money> = split.owed.into_iter().collect();
                (split.total, None, owed, split.balances)
            }
        };

        let transfers = self.planner.plan(&balances)?;

        tracing::info!(
            participant_count = participants.len(),
            total = %total,
            transfer_count = transfers.len(),
            "Settlement computed"
        );

        Ok(SettlementReport {
            total,
            equal_share,
            people: summarize(participants, &owed, &balances),
            transfers,
        })
    }
}

fn summarize<'r>(
    participants: &'r [Participant],
    owed: &HashMap<&str, Money>,
    balances: &Balances<'r>,
) -> Vec<PersonSummary<'r>> {
    participants
        .iter()
        .map(|p| {
            let balance = balances
                .get(p.name.as_str())
                .copied()
                .unwrap_or(Money::ZERO);
            PersonSummary {
                name: p.name.as_str(),
                paid: p.paid,
                owed: owed.get(p.name.as_str()).copied().unwrap_or(Money::ZERO),
                balance,
                status: BalanceStatus::of(balance),
            }
        })
        .collect()
}
