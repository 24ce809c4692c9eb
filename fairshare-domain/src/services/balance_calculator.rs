use crate::{
    error::InvalidInputError,
    model::{Balances, EqualSplit, Item, ItemizedSplit, Money, Participant},
    services::CurrencyContext,
};
use fxhash::FxHashSet;
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Computes shares and signed balances for a group expense.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalanceCalculator {
    context: CurrencyContext,
}

impl BalanceCalculator {
    pub fn new(context: CurrencyContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> CurrencyContext {
        self.context
    }

    /// Splits `total` equally between `participants`.
    ///
    /// The equal share and every balance are rounded to the currency unit.
    /// Balances keep the participants' input order.
    pub fn compute<'a>(
        &self,
        total: Money,
        participants: &'a [Participant],
    ) -> Result<EqualSplit<'a>, InvalidInputError> {
        self.validate_participants(participants)?;
        if !total.is_positive() {
            return Err(InvalidInputError::NonPositiveTotal(total));
        }
        match self.check_amount(total) {
            Some(AmountIssue::TooLarge) => {
                return Err(InvalidInputError::TotalTooLarge {
                    amount: total,
                    max: self.context.max_amount(),
                });
            }
            Some(AmountIssue::Fractional) => {
                return Err(InvalidInputError::FractionalTotal {
                    amount: total,
                    scale: self.context.scale(),
                });
            }
            None => {}
        }

        let count = Decimal::from(participants.len());
        let equal_share = self
            .context
            .round(Money::from_decimal(total.as_decimal() / count));

        let balances: Balances<'a> = participants
            .iter()
            .map(|p| (p.name.as_str(), self.context.round(p.paid - equal_share)))
            .collect();

        tracing::debug!(
            participant_count = participants.len(),
            total = %total,
            equal_share = %equal_share,
            "Equal split computed"
        );
        self.warn_on_drift(&balances);

        Ok(EqualSplit {
            equal_share,
            balances,
        })
    }

    /// Splits each item equally between the participants named on it.
    ///
    /// The total is the sum of item amounts; owed amounts are rounded once per person.
    pub fn compute_itemized<'a>(
        &self,
        items: &[Item],
        participants: &'a [Participant],
    ) -> Result<ItemizedSplit<'a>, InvalidInputError> {
        self.validate_participants(participants)?;

        let mut owed: IndexMap<&'a str, Money> = participants
            .iter()
            .map(|p| (p.name.as_str(), Money::ZERO))
            .collect();
        let mut total = Money::ZERO;

        for item in items {
            if !item.amount.is_positive() {
                return Err(InvalidInputError::NonPositiveItemAmount {
                    item: item.name.clone(),
                    amount: item.amount,
                });
            }
            match self.check_amount(item.amount) {
                Some(AmountIssue::TooLarge) => {
                    return Err(InvalidInputError::ItemAmountTooLarge {
                        item: item.name.clone(),
                        amount: item.amount,
                        max: self.context.max_amount(),
                    });
                }
                Some(AmountIssue::Fractional) => {
                    return Err(InvalidInputError::FractionalItemAmount {
                        item: item.name.clone(),
                        amount: item.amount,
                        scale: self.context.scale(),
                    });
                }
                None => {}
            }
            if item.participants.is_empty() {
                return Err(InvalidInputError::EmptyItem {
                    item: item.name.clone(),
                });
            }

            let mut seen = FxHashSet::default();
            let share = Money::from_decimal(
                item.amount.as_decimal() / Decimal::from(item.participants.len()),
            );
            for name in &item.participants {
                if !seen.insert(name.as_str()) {
                    return Err(InvalidInputError::DuplicateName { name: name.clone() });
                }
                let Some(entry) = owed.get_mut(name.as_str()) else {
                    return Err(InvalidInputError::UnknownItemParticipant {
                        item: item.name.clone(),
                        name: name.clone(),
                    });
                };
                *entry += share;
            }
            total += item.amount;
        }

        if !total.is_positive() {
            return Err(InvalidInputError::NonPositiveTotal(total));
        }

        for amount in owed.values_mut() {
            *amount = self.context.round(*amount);
        }
        let balances: Balances<'a> = participants
            .iter()
            .map(|p| {
                let owed_amount = owed.get(p.name.as_str()).copied().unwrap_or(Money::ZERO);
                (p.name.as_str(), self.context.round(p.paid - owed_amount))
            })
            .collect();

        tracing::debug!(
            participant_count = participants.len(),
            item_count = items.len(),
            total = %total,
            "Itemized split computed"
        );
        self.warn_on_drift(&balances);

        Ok(ItemizedSplit {
            total,
            owed,
            balances,
        })
    }

    fn warn_on_drift(&self, balances: &Balances<'_>) {
        let drift = balances
            .values()
            .fold(Money::ZERO, |acc, &balance| acc.saturating_add(balance));
        let tolerance = self.context.tolerance(balances.len());
        if drift.abs() > tolerance {
            tracing::warn!(
                drift = %drift,
                tolerance = %tolerance,
                member_count = balances.len(),
                "Balances do not net to zero; amounts paid probably differ from the total"
            );
        }
    }

    fn check_amount(&self, amount: Money) -> Option<AmountIssue> {
        if amount.abs() > self.context.max_amount() {
            Some(AmountIssue::TooLarge)
        } else if !self.context.is_whole_units(amount) {
            Some(AmountIssue::Fractional)
        } else {
            None
        }
    }

    fn validate_participants(&self, participants: &[Participant]) -> Result<(), InvalidInputError> {
        if participants.is_empty() {
            return Err(InvalidInputError::NoParticipants);
        }

        let mut names = FxHashSet::default();
        for (idx, participant) in participants.iter().enumerate() {
            if participant.name.trim().is_empty() {
                return Err(InvalidInputError::MissingName { position: idx + 1 });
            }
            if participant.paid.is_negative() {
                return Err(InvalidInputError::NegativeAmount {
                    name: participant.name.clone(),
                    amount: participant.paid,
                });
            }
            match self.check_amount(participant.paid) {
                Some(AmountIssue::TooLarge) => {
                    return Err(InvalidInputError::AmountTooLarge {
                        name: participant.name.clone(),
                        amount: participant.paid,
                        max: self.context.max_amount(),
                    });
                }
                Some(AmountIssue::Fractional) => {
                    return Err(InvalidInputError::FractionalAmount {
                        name: participant.name.clone(),
                        amount: participant.paid,
                        scale: self.context.scale(),
                    });
                }
                None => {}
            }
            if !names.insert(participant.name.as_str()) {
                return Err(InvalidInputError::DuplicateName {
                    name: participant.name.clone(),
                });
            }
        }
        Ok(())
    }
}

enum AmountIssue {
    TooLarge,
    Fractional,
}
