use crate::{
    error::UnbalancedInputError,
    model::{Balances, Money, Transfer},
    services::CurrencyContext,
};
use std::{cmp::Reverse, collections::BinaryHeap};

/// Greedy transfer planner.
///
/// Repeatedly matches the largest outstanding debt with the largest outstanding
/// credit. Ties go to whoever appears first in the input. This yields at most
/// `count - 1` transfers but is not guaranteed to be the global minimum; see
/// [`MinimalTransferPlanner`](crate::services::MinimalTransferPlanner) for an
/// exact alternative.
#[derive(Clone, Copy, Debug, Default)]
pub struct SettlementPlanner {
    context: CurrencyContext,
}

/// Heap entry: larger amounts first, then earlier input position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Outstanding {
    pub(crate) amount: Money,
    pub(crate) position: Reverse<usize>,
}

impl Outstanding {
    pub(crate) fn new(amount: Money, position: usize) -> Self {
        Self {
            amount,
            position: Reverse(position),
        }
    }
}

impl SettlementPlanner {
    pub fn new(context: CurrencyContext) -> Self {
        Self { context }
    }

    pub fn plan<'a>(
        &self,
        balances: &Balances<'a>,
    ) -> Result<Vec<Transfer<'a>>, UnbalancedInputError> {
        check_balanced(balances, self.context)?;

        let names: Vec<&'a str> = balances.keys().copied().collect();
        let mut debtors = BinaryHeap::new();
        let mut creditors = BinaryHeap::new();
        for (position, balance) in balances.values().copied().enumerate() {
            if balance.is_negative() {
                debtors.push(Outstanding::new(balance.abs(), position));
            } else if balance.is_positive() {
                creditors.push(Outstanding::new(balance, position));
            }
        }

        let transfers = settle_greedy(&names, debtors, creditors);

        tracing::debug!(
            member_count = balances.len(),
            transfer_count = transfers.len(),
            "Greedy settlement planned"
        );
        debug_assert!(transfers.len() <= balances.len().saturating_sub(1));

        Ok(transfers)
    }
}

/// Rejects balances whose debts and credits differ by more than the rounding tolerance.
pub(crate) fn check_balanced(
    balances: &Balances<'_>,
    context: CurrencyContext,
) -> Result<(), UnbalancedInputError> {
    let debts = checked_total(
        balances
            .values()
            .filter(|balance| balance.is_negative())
            .map(|balance| balance.abs()),
    );
    let credits = checked_total(
        balances
            .values()
            .filter(|balance| balance.is_positive())
            .copied(),
    );
    let tolerance = context.tolerance(balances.len());

    let balanced = match (debts, credits) {
        (Some(debts), Some(credits)) => (debts - credits).abs() <= tolerance,
        _ => false,
    };
    if !balanced {
        let debts = debts.unwrap_or(Money::MAX);
        let credits = credits.unwrap_or(Money::MAX);
        tracing::error!(
            reject_reason = "input_imbalance",
            member_count = balances.len(),
            debts = %debts,
            credits = %credits,
            tolerance = %tolerance,
            "Settlement rejected: debts and credits do not net out"
        );
        return Err(UnbalancedInputError {
            debts,
            credits,
            tolerance,
        });
    }
    Ok(())
}

/// `None` if the sum overflows.
fn checked_total(mut amounts: impl Iterator<Item = Money>) -> Option<Money> {
    amounts.try_fold(Money::ZERO, Money::checked_add)
}

/// Runs the largest-first matching loop until one side is exhausted.
///
/// Whatever is left on the other side is rounding dust already bounded by
/// [`check_balanced`].
pub(crate) fn settle_greedy<'a>(
    names: &[&'a str],
    mut debtors: BinaryHeap<Outstanding>,
    mut creditors: BinaryHeap<Outstanding>,
) -> Vec<Transfer<'a>> {
    let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());

    loop {
        let (Some(debtor), Some(creditor)) = (debtors.peek().copied(), creditors.peek().copied())
        else {
            break;
        };
        debtors.pop();
        creditors.pop();

        let amount = debtor.amount.min(creditor.amount);
        transfers.push(Transfer {
            from: names[debtor.position.0],
            to: names[creditor.position.0],
            amount,
        });

        if debtor.amount > amount {
            debtors.push(Outstanding {
                amount: debtor.amount - amount,
                ..debtor
            });
        }
        if creditor.amount > amount {
            creditors.push(Outstanding {
                amount: creditor.amount - amount,
                ..creditor
            });
        }
    }

    let residual: Money = debtors
        .iter()
        .chain(creditors.iter())
        .map(|entry| entry.amount)
        .sum();
    if !residual.is_zero() {
        tracing::debug!(
            residual = %residual,
            "Rounding residual left after settlement"
        );
    }

    transfers
}
