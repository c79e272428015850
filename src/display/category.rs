//! Category and budget group display formatting
//!
//! Formats backend categories and groups for terminal output in tree and
//! table views.

use crate::models::{BudgetGroup, Category};

/// Format budget groups as a tree with their assigned categories
pub fn format_group_tree(groups: &[BudgetGroup], categories: &[Category]) -> String {
    if groups.is_empty() {
        return "No budget groups found.".to_string();
    }

    let mut ordered: Vec<&BudgetGroup> = groups.iter().collect();
    ordered.sort_by_key(|g| g.position);

    let mut output = String::new();

    for (i, group) in ordered.iter().enumerate() {
        output.push_str(&format!("{} ({})\n", group.name, group.id));

        let members: Vec<&Category> = categories
            .iter()
            .filter(|c| c.group_id == Some(group.id))
            .collect();

        if members.is_empty() {
            output.push_str("  (no categories)\n");
        } else {
            for (j, category) in members.iter().enumerate() {
                let prefix = if j == members.len() - 1 {
                    "└── "
                } else {
                    "├── "
                };
                output.push_str(&format!("  {}{}\n", prefix, category.name));
            }
        }

        if i < ordered.len() - 1 {
            output.push('\n');
        }
    }

    let unassigned: Vec<&str> = categories
        .iter()
        .filter(|c| !c.is_assigned())
        .map(|c| c.name.as_str())
        .collect();
    if !unassigned.is_empty() {
        output.push_str(&format!("\nUnassigned: {}\n", unassigned.join(", ")));
    }

    output
}

/// Format a simple list of categories
pub fn format_category_list(categories: &[Category], groups: &[BudgetGroup]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(8);

    let group_name = |category: &Category| -> String {
        category
            .group_id
            .and_then(|id| groups.iter().find(|g| g.id == id))
            .map(|g| g.name.clone())
            .unwrap_or_else(|| "-".to_string())
    };

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:<20}  {}\n",
        "Category",
        "Group",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:-<20}  {:-<12}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:<width$}  {:<20}  {}\n",
            category.name,
            group_name(category),
            category.id,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetGroupId, CategoryId};

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
    fn test_format_empty() {
        assert!(format_group_tree(&[], &[]).contains("No budget groups"));
        assert!(format_category_list(&[], &[]).contains("No categories"));
    }

    #[test]
    fn test_group_tree_ordered_by_position() {
        let gastos = group("Gastos", 2);
        let receitas = group("Receitas", 1);
        let categories = vec![
            category("Aluguel", Some(gastos.id)),
            category("Mercado", Some(gastos.id)),
            category("Salário", Some(receitas.id)),
            category("Outros", None),
        ];

        let output = format_group_tree(&[gastos, receitas], &categories);

        assert!(output.find("Receitas").unwrap() < output.find("Gastos").unwrap());
        assert!(output.contains("├── Aluguel"));
        assert!(output.contains("└── Mercado"));
        assert!(output.contains("Unassigned: Outros"));
    }

    #[test]
    fn test_category_list_shows_group() {
        let receitas = group("Receitas", 1);
        let categories = vec![category("Salário", Some(receitas.id)), category("Outros", None)];

        let output = format_category_list(&categories, &[receitas]);
        let salary = output.lines().find(|l| l.starts_with("Salário")).unwrap();
        assert!(salary.contains("Receitas"));
        let other = output.lines().find(|l| l.starts_with("Outros")).unwrap();
        assert!(other.contains(" - "));
    }
}
