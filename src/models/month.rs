//! The twelve months of a plan year
//!
//! Every value series in the planner is index-aligned to this order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of months in a plan year
pub const MONTHS_PER_YEAR: usize = 12;

/// A calendar month within a fixed plan year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Month; MONTHS_PER_YEAR] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based position in the year
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Month for a zero-based index, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Calendar month number (1-12), as chrono expects it
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Column label shown in the plan grid
    pub const fn label(self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEV",
            Month::Mar => "MAR",
            Month::Apr => "ABR",
            Month::May => "MAI",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AGO",
            Month::Sep => "SET",
            Month::Oct => "OUT",
            Month::Nov => "NOV",
            Month::Dec => "DEZ",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<Month> for usize {
    fn from(month: Month) -> Self {
        month.index()
    }
}

impl TryFrom<usize> for Month {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Month::from_index(index).ok_or_else(|| format!("month index out of range: {}", index))
    }
}

impl FromStr for Month {
    type Err = String;

    /// Accepts a grid label ("FEV"), an English abbreviation ("feb") or a
    /// 1-based month number ("2")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Month::from_index)
                .ok_or_else(|| format!("Invalid month number: {}", s));
        }

        let upper = s.to_uppercase();
        Month::ALL
            .iter()
            .copied()
            .find(|m| {
                m.label() == upper || format!("{:?}", m).to_uppercase() == upper
            })
            .ok_or_else(|| format!("Unknown month: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_index() {
        assert_eq!(Month::ALL.len(), MONTHS_PER_YEAR);
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
        }
        assert_eq!(Month::Dec.number(), 12);
        assert!(Month::from_index(12).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!("FEV".parse::<Month>().unwrap(), Month::Feb);
        assert_eq!("feb".parse::<Month>().unwrap(), Month::Feb);
        assert_eq!("12".parse::<Month>().unwrap(), Month::Dec);
        assert!("0".parse::<Month>().is_err());
        assert!("13".parse::<Month>().is_err());
        assert!("xyz".parse::<Month>().is_err());
    }

    #[test]
    fn test_serializes_as_index() {
        assert_eq!(serde_json::to_string(&Month::Mar).unwrap(), "2");
        let month: Month = serde_json::from_str("11").unwrap();
        assert_eq!(month, Month::Dec);
        assert!(serde_json::from_str::<Month>("12").is_err());
    }
}
