//! Exact minimum-transfer planning.
//!
//! A group of `k` non-zero balances that sums to zero can always be settled with
//! `k - 1` transfers, so the fewest transfers for the whole table is
//! `n - g`, where `g` is the largest number of disjoint zero-sum groups the
//! balances can be split into. The groups are found with a dynamic program over
//! subsets, and each group is then settled with the greedy matcher.

use crate::{
    error::MinimalPlanError,
    model::{Balances, Transfer},
    services::{
        CurrencyContext,
        settlement_planner::{Outstanding, check_balanced, settle_greedy},
    },
};
use std::collections::BinaryHeap;

const MAX_EXACT_BALANCES: usize = 18;

#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalTransferPlanner {
    context: CurrencyContext,
}

impl MinimalTransferPlanner {
    pub fn new(context: CurrencyContext) -> Self {
        Self { context }
    }

    pub fn max_balances() -> usize {
        MAX_EXACT_BALANCES
    }

    pub fn plan<'a>(&self, balances: &Balances<'a>) -> Result<Vec<Transfer<'a>>, MinimalPlanError> {
        check_balanced(balances, self.context)?;

        let names: Vec<&'a str> = balances.keys().copied().collect();
        let mut members = Vec::new();
        let mut units = Vec::new();
        for (position, balance) in balances.values().copied().enumerate() {
            if balance.is_zero() {
                continue;
            }
            if !self.context.is_whole_units(balance) {
                return Err(MinimalPlanError::NonIntegral(balance));
            }
            let value = self
                .context
                .to_units(balance)
                .ok_or(MinimalPlanError::OutOfRange(balance))?;
            members.push((position, balance));
            units.push(i128::from(value));
        }

        if members.len() > MAX_EXACT_BALANCES {
            return Err(MinimalPlanError::TooManyBalances {
                count: members.len(),
                max: MAX_EXACT_BALANCES,
            });
        }

        let mut groups = partition_zero_sum(&units);
        for group in &mut groups {
            group.sort_unstable();
        }
        groups.sort_unstable_by_key(|group| group.first().copied());

        let mut transfers = Vec::with_capacity(members.len().saturating_sub(1));
        for group in &groups {
            let mut debtors = BinaryHeap::new();
            let mut creditors = BinaryHeap::new();
            for &idx in group {
                let (position, balance) = members[idx];
                if balance.is_negative() {
                    debtors.push(Outstanding::new(balance.abs(), position));
                } else {
                    creditors.push(Outstanding::new(balance, position));
                }
            }
            transfers.extend(settle_greedy(&names, debtors, creditors));
        }

        tracing::debug!(
            member_count = balances.len(),
            group_count = groups.len(),
            transfer_count = transfers.len(),
            "Minimal settlement planned"
        );

        Ok(transfers)
    }
}

/// Splits `values` into the largest number of zero-sum groups.
///
/// If the values do not sum to exactly zero, the last group carries the remainder.
fn partition_zero_sum(values: &[i128]) -> Vec<Vec<usize>> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let full = (1_usize << n) - 1;
    let mut sums = vec![0_i128; full + 1];
    let mut best = vec![0_u8; full + 1];
    for mask in 1..=full {
        let low = mask.trailing_zeros() as usize;
        sums[mask] = sums[mask & (mask - 1)] + values[low];

        let mut most = 0;
        let mut rest = mask;
        while rest != 0 {
            let bit = rest & rest.wrapping_neg();
            most = most.max(best[mask ^ bit]);
            rest ^= bit;
        }
        best[mask] = most + u8::from(sums[mask] == 0);
    }

    // Walk back from the full set, peeling one element at a time along an optimal path.
    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    while mask != 0 {
        let gain = u8::from(sums[mask] == 0);
        let mut chosen = mask & mask.wrapping_neg();
        let mut rest = mask;
        while rest != 0 {
            let bit = rest & rest.wrapping_neg();
            if best[mask ^ bit] + gain == best[mask] {
                chosen = bit;
                break;
            }
            rest ^= bit;
        }
        order.push(chosen.trailing_zeros() as usize);
        mask ^= chosen;
    }
    order.reverse();

    let mut groups = Vec::new();
    let mut current = Vec::new();
    let mut prefix = 0_i128;
    for idx in order {
        current.push(idx);
        prefix += values[idx];
        if prefix == 0 {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}
