use fairshare_domain::{BalanceStatus, Item, Money, Participant, Transfer};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitMode {
    /// Everyone owes the same share of `total`.
    Equal { total: Money },
    /// Each item is shared by the participants listed on it.
    Itemized { items: Vec<Item> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    pub participants: Vec<Participant>,
    pub mode: SplitMode,
}

impl SplitRequest {
    /// Equal split; without an explicit total, the amounts paid are summed.
    ///
    /// The sum saturates so that oversized amounts reach validation.
    pub fn equal(participants: Vec<Participant>, total: Option<Money>) -> Self {
        let total = total.unwrap_or_else(|| {
            participants
                .iter()
                .fold(Money::ZERO, |acc, p| acc.saturating_add(p.paid))
        });
        Self {
            participants,
            mode: SplitMode::Equal { total },
        }
    }

    pub fn itemized(participants: Vec<Participant>, items: Vec<Item>) -> Self {
        Self {
            participants,
            mode: SplitMode::Itemized { items },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonSummary<'a> {
    pub name: &'a str,
    pub paid: Money,
    pub owed: Money,
    pub balance: Money,
    pub status: BalanceStatus,
}

/// Everything the presentation layer needs for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementReport<'a> {
    pub total: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equal_share: Option<Money>,
    pub people: Vec<PersonSummary<'a>>,
    pub transfers: Vec<Transfer<'a>>,
}

impl SettlementReport<'_> {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_request_defaults_total_to_amounts_paid() {
        let request = SplitRequest::equal(
            vec![
                Participant::new("A", Money::new(1050, 2)),
                Participant::new("B", Money::from_i64(4)),
            ],
            None,
        );

        assert_eq!(
            request.mode,
            SplitMode::Equal {
                total: Money::new(1450, 2)
            }
        );
    }

    #[test]
    fn default_total_saturates() {
        let request = SplitRequest::equal(
            vec![
                Participant::new("A", Money::MAX),
                Participant::new("B", Money::from_i64(1)),
            ],
            None,
        );

        assert_eq!(request.mode, SplitMode::Equal { total: Money::MAX });
    }

    #[test]
    fn explicit_total_wins() {
        let request = SplitRequest::equal(
            vec![Participant::new("A", Money::ZERO)],
            Some(Money::from_i64(90)),
        );

        assert_eq!(
            request.mode,
            SplitMode::Equal {
                total: Money::from_i64(90)
            }
        );
    }
}
