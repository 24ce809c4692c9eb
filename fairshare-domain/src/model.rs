use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

/// Fixed-point currency amount.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{raw}' is not a valid amount")]
pub struct MoneyParseError {
    pub raw: String,
}

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const MAX: Self = Self(Decimal::MAX);

    /// `Money::new(12345, 2)` is 123.45.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Clamps at the largest representable amount instead of overflowing.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self)
            .map_err(|_| MoneyParseError { raw: s.to_owned() })
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub paid: Money,
}

impl Participant {
    pub fn new(name: impl Into<String>, paid: Money) -> Self {
        Self {
            name: name.into(),
            paid,
        }
    }
}

/// Signed balance per participant, in input order.
/// Positive: is owed money. Negative: owes money.
pub type Balances<'a> = IndexMap<&'a str, Money>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: Money,
}

/// Applies transfers to a copy of `balances`: the payer's balance rises, the payee's falls.
///
/// A plan that settles everyone leaves every entry at zero.
pub fn apply_transfers<'a>(balances: &Balances<'a>, transfers: &[Transfer<'a>]) -> Balances<'a> {
    let mut remaining = balances.clone();
    for transfer in transfers {
        *remaining.entry(transfer.from).or_insert(Money::ZERO) += transfer.amount;
        *remaining.entry(transfer.to).or_insert(Money::ZERO) -= transfer.amount;
    }
    remaining
}

#[derive(Debug, Clone, PartialEq)]
pub struct EqualSplit<'a> {
    pub equal_share: Money,
    pub balances: Balances<'a>,
}

/// A single expense line shared by a subset of participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub amount: Money,
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemizedSplit<'a> {
    pub total: Money,
    pub owed: IndexMap<&'a str, Money>,
    pub balances: Balances<'a>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    Receives(Money),
    Pays(Money),
    Settled,
}

impl BalanceStatus {
    pub fn of(balance: Money) -> Self {
        if balance.is_positive() {
            Self::Receives(balance)
        } else if balance.is_negative() {
            Self::Pays(balance.abs())
        } else {
            Self::Settled
        }
    }

    pub fn amount(self) -> Money {
        match self {
            Self::Receives(amount) | Self::Pays(amount) => amount,
            Self::Settled => Money::ZERO,
        }
    }
}
