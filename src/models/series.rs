//! Twelve-month value series
//!
//! A [`MonthlyValues`] always holds exactly one amount per month. On the wire
//! it is a plain JSON array; drafts written by older clients may carry short
//! arrays or `null` cells, which read back as zero.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::ops::{Index, IndexMut};

use super::money::Money;
use super::month::{Month, MONTHS_PER_YEAR};

/// One amount per month, index-aligned to [`Month::ALL`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthlyValues([Money; MONTHS_PER_YEAR]);

impl MonthlyValues {
    /// A series of twelve zeros
    pub const fn zero() -> Self {
        Self([Money::zero(); MONTHS_PER_YEAR])
    }

    pub const fn new(values: [Money; MONTHS_PER_YEAR]) -> Self {
        Self(values)
    }

    /// Build a series from cent amounts
    pub fn from_cents(cents: [i64; MONTHS_PER_YEAR]) -> Self {
        Self(cents.map(Money::from_cents))
    }

    /// Build a series from whole currency units
    pub fn from_units(units: [i64; MONTHS_PER_YEAR]) -> Self {
        Self(units.map(Money::from_units))
    }

    pub fn get(&self, month: Month) -> Money {
        self.0[month.index()]
    }

    pub fn set(&mut self, month: Month, value: Money) {
        self.0[month.index()] = value;
    }

    /// Copy of this series with one month replaced
    pub fn with(mut self, month: Month, value: Money) -> Self {
        self.set(month, value);
        self
    }

    pub fn as_array(&self) -> &[Money; MONTHS_PER_YEAR] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Money> + '_ {
        self.0.iter().copied()
    }

    /// Iterate `(month, amount)` pairs in calendar order
    pub fn by_month(&self) -> impl Iterator<Item = (Month, Money)> + '_ {
        Month::ALL.iter().copied().zip(self.iter())
    }

    /// Sum of all twelve months
    pub fn annual_total(&self) -> Money {
        self.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.iter().all(|m| m.is_zero())
    }

    /// Month-wise sum of two series
    pub fn plus(&self, other: &Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + other.0[i]))
    }

    /// Month-wise difference of two series
    pub fn minus(&self, other: &Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] - other.0[i]))
    }
}

impl Index<Month> for MonthlyValues {
    type Output = Money;

    fn index(&self, month: Month) -> &Money {
        &self.0[month.index()]
    }
}

impl IndexMut<Month> for MonthlyValues {
    fn index_mut(&mut self, month: Month) -> &mut Money {
        &mut self.0[month.index()]
    }
}

impl From<[Money; MONTHS_PER_YEAR]> for MonthlyValues {
    fn from(values: [Money; MONTHS_PER_YEAR]) -> Self {
        Self(values)
    }
}

impl Serialize for MonthlyValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MonthlyValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: Vec<Option<Money>> = Vec::deserialize(deserializer)?;
        if raw.len() > MONTHS_PER_YEAR {
            return Err(de::Error::invalid_length(
                raw.len(),
                &"at most 12 monthly values",
            ));
        }

        let mut values = Self::zero();
        for (slot, value) in values.0.iter_mut().zip(raw) {
            *slot = value.unwrap_or_default();
        }
        Ok(values)
    }
}
