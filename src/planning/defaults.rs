//! Default plan layout and plan construction from backend budget groups

use std::sync::Arc;

use crate::models::{
    BudgetGroup, Category, ComputedRow, ComputedSection, EditableSection, Row,
};

/// Title of the income section; it is always the positive term of the balance
pub const INCOME_TITLE: &str = "RECEITAS";

/// Title of the computed section
pub const BALANCE_TITLE: &str = "SALDO";

/// Footer label of the computed section
pub const BALANCE_FOOTER: &str = "SALDO DO MÊS";

/// Sections of a fresh plan: (title, color)
const DEFAULT_SECTIONS: &[(&str, &str)] = &[
    (INCOME_TITLE, "#22c55e"),
    ("GASTOS ESSENCIAIS", "#f97316"),
    ("GASTOS NÃO ESSENCIAIS", "#eab308"),
    ("DÍVIDAS", "#ef4444"),
];

/// Sections of a fresh plan, each without rows
pub fn default_sections() -> Vec<Arc<EditableSection>> {
    DEFAULT_SECTIONS
        .iter()
        .map(|(title, color)| Arc::new(EditableSection::new(*title).with_color(*color)))
        .collect()
}

/// Build the balance section for a set of sections
///
/// The income section comes first (positive), every other section follows
/// in order and is subtracted. Without an income section the first section
/// takes its place.
pub fn computed_for(sections: &[Arc<EditableSection>]) -> ComputedSection {
    let income_pos = sections
        .iter()
        .position(|s| s.title.eq_ignore_ascii_case(INCOME_TITLE))
        .unwrap_or(0);

    let ordered = sections
        .get(income_pos)
        .into_iter()
        .chain(
            sections
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != income_pos)
                .map(|(_, s)| s),
        );

    let rows = ordered
        .map(|section| ComputedRow::referencing(section.title.clone()))
        .collect();

    ComputedSection::new(BALANCE_TITLE, BALANCE_FOOTER, rows)
}

/// Build one section per budget group, one row per assigned category
///
/// Groups are ordered by position. Unassigned categories and categories of
/// unknown groups are left out of the plan.
pub fn sections_from_groups(
    groups: &[BudgetGroup],
    categories: &[Category],
) -> Vec<Arc<EditableSection>> {
    let mut ordered: Vec<&BudgetGroup> = groups.iter().collect();
    ordered.sort_by_key(|g| g.position);

    ordered
        .into_iter()
        .map(|group| {
            let rows = categories
                .iter()
                .filter(|c| c.group_id == Some(group.id))
                .map(|c| Row::for_category(c.id, c.name.clone()));

            let mut section = EditableSection::new(group.name.to_uppercase()).with_rows(rows);
            if !group.color.is_empty() {
                section.color = group.color.clone();
            }
            Arc::new(section)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetGroupId, CategoryId, Sign};

    fn group(name: &str, position: i32) -> BudgetGroup {
        BudgetGroup {
            id: BudgetGroupId::new(),
            name: name.into(),
            color: String::new(),
            position,
        }
    }

    fn category(name: &str, group_id: Option<BudgetGroupId>) -> Category {
        Category {
            id: CategoryId::new(),
            name: name.into(),
            description: String::new(),
            color: String::new(),
            icon: String::new(),
            group_id,
        }
    }

    #[test]
    fn test_default_layout() {
        let sections = default_sections();
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].title, INCOME_TITLE);

        let computed = computed_for(&sections);
        assert_eq!(computed.rows.len(), 4);
        assert_eq!(computed.effective_sign(0), Sign::Plus);
        assert_eq!(
            computed.footer.formula,
            "RECEITAS - GASTOS ESSENCIAIS - GASTOS NÃO ESSENCIAIS - DÍVIDAS"
        );
    }

    #[test]
    fn test_income_moved_first() {
        let sections = vec![
            Arc::new(EditableSection::new("GASTOS")),
            Arc::new(EditableSection::new("Receitas")),
        ];
        let computed = computed_for(&sections);
        assert_eq!(computed.rows[0].ref_section_title, "Receitas");
        assert_eq!(computed.rows[1].ref_section_title, "GASTOS");
    }

    #[test]
    fn test_sections_from_groups() {
        let gastos = group("Gastos essenciais", 2);
        let receitas = group("Receitas", 1);
        let categories = vec![
            category("Salário", Some(receitas.id)),
            category("Aluguel", Some(gastos.id)),
            category("Mercado", Some(gastos.id)),
            category("Sem grupo", None),
        ];

        let sections = sections_from_groups(&[gastos.clone(), receitas.clone()], &categories);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "RECEITAS");
        assert_eq!(sections[1].title, "GASTOS ESSENCIAIS");
        assert_eq!(sections[1].rows.len(), 2);
        assert_eq!(sections[1].rows[0].category_id, Some(categories[1].id));
        assert!(sections[1].rows[0].values.is_zero());
    }

    #[test]
    fn test_empty_sections_give_empty_balance() {
        let computed = computed_for(&[]);
        assert!(computed.rows.is_empty());
        assert!(computed.footer.formula.is_empty());
    }
}
