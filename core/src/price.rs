//! Non-negative money amounts.

use crate::error::BuilderError;
use crate::error::Result;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

const SUB_CENT_TOLERANCE: f64 = 1e-6;

/// A price in whole cents. Negative prices are unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Price::from_units(449)` is 449.00
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Convert a decimal amount with at most two fractional digits.
    ///
    /// Binary floating-point noise (`0.1 + 0.2`) is absorbed; an amount
    /// finer than a cent (`19.999`) is rejected rather than rounded.
    pub fn from_decimal(amount: f64) -> Result<Self> {
        if !amount.is_finite() {
            return Err(BuilderError::InvalidPrice(format!(
                "{amount} is not a finite number"
            )));
        }
        if amount < 0.0 {
            return Err(BuilderError::InvalidPrice(format!(
                "{amount} is negative"
            )));
        }
        let scaled = amount * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > SUB_CENT_TOLERANCE.max(scaled * f64::EPSILON * 4.0) {
            return Err(BuilderError::InvalidPrice(format!(
                "{amount} has more than two decimal places"
            )));
        }
        if cents > u64::MAX as f64 {
            return Err(BuilderError::InvalidPrice(format!("{amount} is too large")));
        }
        Ok(Self(cents as u64))
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Self::from_decimal(amount).map_err(serde::de::Error::custom)
    }
}
