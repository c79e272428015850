//! Balance series of the computed section
//!
//! `balance[m]` adds every row signed `Plus` and subtracts every row signed
//! `Minus`. With positional signs this is `rows[0][m] - sum(rows[1..][m])`.

use crate::models::{MonthlyValues, Sign};

use super::resolver::ResolvedRow;

pub fn balance_series(rows: &[ResolvedRow]) -> MonthlyValues {
    rows.iter()
        .fold(MonthlyValues::zero(), |acc, row| match row.sign {
            Sign::Plus => acc.plus(&row.values),
            Sign::Minus => acc.minus(&row.values),
        })
}
