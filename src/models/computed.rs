//! The read-only computed section of a plan
//!
//! Each [`ComputedRow`] points at an editable section by title and shows that
//! section's monthly totals. The footer of the computed section is the
//! balance: the first row counts positively and every later row is
//! subtracted, unless a row carries an explicit [`Sign`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ComputedRowId;

/// How a computed row folds the referenced section's rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    #[default]
    Sum,
}

/// Direction a computed row contributes to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Sign implied by the row's position: row 0 is income, the rest are outflows
    pub fn positional(index: usize) -> Self {
        if index == 0 {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A derived row referencing another section's totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedRow {
    pub id: ComputedRowId,

    pub label: String,

    /// Title of the editable section whose totals this row shows
    pub ref_section_title: String,

    #[serde(default)]
    pub aggregation: Aggregation,

    /// Explicit balance direction; positional when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
}

impl ComputedRow {
    /// Create a sum row whose label matches the referenced title
    pub fn referencing(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: ComputedRowId::for_title(&title),
            label: title.clone(),
            ref_section_title: title,
            aggregation: Aggregation::Sum,
            sign: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_sign(mut self, sign: Sign) -> Self {
        self.sign = Some(sign);
        self
    }
}

/// Footer line of the computed section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedFooter {
    pub label: String,
    /// Human-readable description of the balance, e.g. "RECEITAS - GASTOS"
    pub formula: String,
}

/// The derived section; never edited directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedSection {
    pub title: String,
    pub rows: Vec<ComputedRow>,
    pub footer: ComputedFooter,
}

impl ComputedSection {
    /// Build a section whose footer formula is derived from its rows
    pub fn new(
        title: impl Into<String>,
        footer_label: impl Into<String>,
        rows: Vec<ComputedRow>,
    ) -> Self {
        let mut section = Self {
            title: title.into(),
            rows,
            footer: ComputedFooter {
                label: footer_label.into(),
                formula: String::new(),
            },
        };
        section.footer.formula = section.describe_formula();
        section
    }

    /// Sign the row at `index` contributes to the balance
    pub fn effective_sign(&self, index: usize) -> Sign {
        self.rows
            .get(index)
            .and_then(|row| row.sign)
            .unwrap_or_else(|| Sign::positional(index))
    }

    /// Render the balance as "A - B - C"
    pub fn describe_formula(&self) -> String {
        let mut formula = String::new();
        for (i, row) in self.rows.iter().enumerate() {
            let sign = self.effective_sign(i);
            if i == 0 {
                if sign == Sign::Minus {
                    formula.push('-');
                }
            } else {
                formula.push(' ');
                formula.push(sign.symbol());
                formula.push(' ');
            }
            formula.push_str(&row.ref_section_title);
        }
        formula
    }
}

impl fmt::Display for ComputedSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.footer.formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance_section() -> ComputedSection {
        ComputedSection::new(
            "SALDO",
            "SALDO DO MÊS",
            vec![
                ComputedRow::referencing("RECEITAS"),
                ComputedRow::referencing("GASTOS ESSENCIAIS"),
                ComputedRow::referencing("DÍVIDAS"),
            ],
        )
    }

    #[test]
    fn test_positional_signs() {
        let section = balance_section();
        assert_eq!(section.effective_sign(0), Sign::Plus);
        assert_eq!(section.effective_sign(1), Sign::Minus);
        assert_eq!(section.effective_sign(2), Sign::Minus);
    }

    #[test]
    fn test_explicit_sign_overrides_position() {
        let mut section = balance_section();
        section.rows[2].sign = Some(Sign::Plus);
        assert_eq!(section.effective_sign(2), Sign::Plus);
    }

    #[test]
    fn test_formula() {
        let section = balance_section();
        assert_eq!(
            section.footer.formula,
            "RECEITAS - GASTOS ESSENCIAIS - DÍVIDAS"
        );
    }

    #[test]
    fn test_sign_omitted_when_positional() {
        let row = ComputedRow::referencing("RECEITAS");
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("sign").is_none());
        assert_eq!(json["refSectionTitle"], "RECEITAS");
        assert_eq!(json["aggregation"], "sum");
    }
}
