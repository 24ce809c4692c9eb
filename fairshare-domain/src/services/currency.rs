//! Currency precision and rounding policy.

use crate::model::Money;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

const MAX_SCALE: u32 = 8;
const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

/// Rounding mode applied when quantizing to the currency's minimum unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half away from zero (e.g., 0.005 -> 0.01, -0.005 -> -0.01).
    #[default]
    HalfUp,
    /// Round half to nearest even number (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Currency scale {scale} is not supported (max {max_supported})")]
pub struct UnsupportedScale {
    pub scale: u32,
    pub max_supported: u32,
}

/// Precision context shared by the calculator and the planners.
///
/// The default is two decimal places with half-up rounding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyContext {
    scale: u32,
    rounding_mode: RoundingMode,
}

impl Default for CurrencyContext {
    fn default() -> Self {
        Self {
            scale: 2,
            rounding_mode: RoundingMode::HalfUp,
        }
    }
}

impl CurrencyContext {
    pub fn new(scale: u32, rounding_mode: RoundingMode) -> Result<Self, UnsupportedScale> {
        if scale > MAX_SCALE {
            return Err(UnsupportedScale {
                scale,
                max_supported: MAX_SCALE,
            });
        }
        Ok(Self {
            scale,
            rounding_mode,
        })
    }

    pub fn scale(self) -> u32 {
        self.scale
    }

    pub fn rounding_mode(self) -> RoundingMode {
        self.rounding_mode
    }

    /// Smallest representable amount, e.g. 0.01 at scale 2.
    pub fn unit(self) -> Money {
        Money::new(1, self.scale)
    }

    /// Largest payment, total or item amount accepted, in whole currency units.
    pub fn max_amount(self) -> Money {
        Money::from_i64(MAX_AMOUNT)
    }

    /// True if `amount` has no digits below the currency unit.
    pub fn is_whole_units(self, amount: Money) -> bool {
        amount.as_decimal().normalize().scale() <= self.scale
    }

    /// Rounds to the currency unit and pads to exactly `scale` places.
    pub fn round(self, amount: Money) -> Money {
        let mut rounded = amount
            .as_decimal()
            .round_dp_with_strategy(self.scale, self.rounding_mode.strategy());
        rounded.rescale(self.scale);
        Money::from_decimal(rounded)
    }

    /// Largest zero-sum drift that `count` independently rounded balances may show.
    pub fn tolerance(self, count: usize) -> Money {
        let steps = i64::try_from(count.saturating_sub(1)).unwrap_or(i64::MAX);
        Money::from_decimal(self.unit().as_decimal().saturating_mul(Decimal::from(steps)))
    }

    /// Converts to integer minimum units.
    ///
    /// `None` if `amount` has sub-unit digits or does not fit in `i64` units.
    pub fn to_units(self, amount: Money) -> Option<i64> {
        let factor = Decimal::from_i128_with_scale(10_i128.checked_pow(self.scale)?, 0);
        let units = amount.as_decimal().checked_mul(factor)?;
        if units.fract() != Decimal::ZERO {
            return None;
        }
        units.to_i64()
    }
}
