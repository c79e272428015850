//! Plan display formatting
//!
//! Renders the plan grid, the monthly balance and the pending entries as
//! fixed-width text tables.

use crate::models::{Month, MonthlyValues, PendingEntry};
use crate::planning::PlanStore;

const VALUE_WIDTH: usize = 10;
const TOTAL_WIDTH: usize = 12;

/// Width of the label column for a set of labels
fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0).max(8)
}

fn month_header(label: &str, width: usize) -> String {
    let mut line = format!("{:<width$}", label, width = width);
    for month in Month::ALL {
        line.push_str(&format!("  {:>w$}", month.label(), w = VALUE_WIDTH));
    }
    line.push_str(&format!("  {:>w$}\n", "TOTAL", w = TOTAL_WIDTH));
    line
}

fn separator_line(width: usize) -> String {
    let mut line = "-".repeat(width);
    for _ in Month::ALL {
        line.push_str("  ");
        line.push_str(&"-".repeat(VALUE_WIDTH));
    }
    line.push_str("  ");
    line.push_str(&"-".repeat(TOTAL_WIDTH));
    line.push('\n');
    line
}

fn values_line(label: &str, values: &MonthlyValues, width: usize) -> String {
    let mut line = format!("{:<width$}", label, width = width);
    for value in values.iter() {
        line.push_str(&format!("  {:>w$}", value, w = VALUE_WIDTH));
    }
    line.push_str(&format!("  {:>w$}\n", values.annual_total(), w = TOTAL_WIDTH));
    line
}

/// Format the whole plan: every section with its rows and footer, then the
/// computed balance section
pub fn format_plan_grid(store: &PlanStore, year: i32) -> String {
    let summary = store.summary();
    let computed = store.computed();

    let labels = store
        .sections()
        .iter()
        .flat_map(|s| {
            std::iter::once(s.title.as_str())
                .chain(std::iter::once(s.footer_label.as_str()))
                .chain(s.rows.iter().map(|r| r.label.as_str()))
        })
        .chain(computed.rows.iter().map(|r| r.label.as_str()))
        .chain(std::iter::once(computed.footer.label.as_str()));
    // Room for the "+ "/"- " prefix of computed rows
    let width = label_width(labels) + 2;

    let mut output = format!("Plan {}\n\n", year);

    for section in store.sections() {
        output.push_str(&month_header(&section.title, width));
        output.push_str(&separator_line(width));

        if section.rows.is_empty() {
            output.push_str("  (no rows)\n");
        }
        for row in &section.rows {
            output.push_str(&values_line(&row.label, &row.values, width));
        }

        let total = summary.totals.get_or_zero(&section.title);
        output.push_str(&separator_line(width));
        output.push_str(&values_line(&section.footer_label, &total, width));
        output.push('\n');
    }

    output.push_str(&month_header(&computed.title, width));
    output.push_str(&separator_line(width));
    for row in &summary.computed_rows {
        let label = format!("{} {}", row.sign.symbol(), row.label);
        output.push_str(&values_line(&label, &row.values, width));
    }
    output.push_str(&separator_line(width));
    output.push_str(&values_line(&computed.footer.label, &summary.balance, width));
    output.push_str(&format!("  = {}\n", computed.footer.formula));

    let unresolved: Vec<&str> = summary
        .unresolved_rows()
        .map(|r| r.ref_section_title.as_str())
        .collect();
    if !unresolved.is_empty() {
        output.push_str(&format!(
            "\nWarning: no section titled {}; counted as zero\n",
            unresolved.join(", ")
        ));
    }

    output
}

/// Format the balance month by month, one line per month
pub fn format_balance(store: &PlanStore, currency_symbol: &str) -> String {
    let summary = store.summary();

    let columns: Vec<usize> = summary
        .computed_rows
        .iter()
        .map(|r| r.label.chars().count().max(TOTAL_WIDTH))
        .collect();

    let mut output = format!("{:<5}", "MÊS");
    for (row, w) in summary.computed_rows.iter().zip(&columns) {
        output.push_str(&format!("  {:>w$}", row.label, w = *w));
    }
    output.push_str(&format!("  {:>w$}\n", store.computed().title, w = TOTAL_WIDTH));

    output.push_str(&"-".repeat(5));
    for w in &columns {
        output.push_str("  ");
        output.push_str(&"-".repeat(*w));
    }
    output.push_str("  ");
    output.push_str(&"-".repeat(TOTAL_WIDTH));
    output.push('\n');

    for month in Month::ALL {
        output.push_str(&format!("{:<5}", month.label()));
        for (row, w) in summary.computed_rows.iter().zip(&columns) {
            output.push_str(&format!("  {:>w$}", row.values[month], w = *w));
        }
        output.push_str(&format!(
            "  {:>w$}\n",
            summary.balance[month],
            w = TOTAL_WIDTH
        ));
    }

    output.push('\n');
    output.push_str(&format!(
        "Annual balance: {}\n",
        summary.annual_balance().format_with_symbol(currency_symbol)
    ));

    output
}

/// Format the entries added since the last commit
pub fn format_pending_list(store: &PlanStore) -> String {
    let pending = store.pending();
    if pending.is_empty() {
        return "No pending entries.".to_string();
    }

    let describe = |entry: &PendingEntry| -> (String, String) {
        match store.row(entry.section_id, entry.row_id) {
            Some((section, row)) => (section.title.clone(), row.label.clone()),
            None => ("?".to_string(), "?".to_string()),
        }
    };

    let rows: Vec<(&PendingEntry, String, String)> = pending
        .iter()
        .map(|e| {
            let (section, row) = describe(e);
            (e, section, row)
        })
        .collect();

    let section_width = label_width(rows.iter().map(|(_, s, _)| s.as_str()));
    let row_width = label_width(rows.iter().map(|(_, _, r)| r.as_str()));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<3}  {:<sw$}  {:<rw$}  {:>12}  {}\n",
        "ID",
        "MÊS",
        "Section",
        "Row",
        "Amount",
        "Description",
        sw = section_width,
        rw = row_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<3}  {:-<sw$}  {:-<rw$}  {:->12}  {:-<11}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        sw = section_width,
        rw = row_width,
    ));

    for (entry, section, row) in &rows {
        output.push_str(&format!(
            "{:<12}  {:<3}  {:<sw$}  {:<rw$}  {:>12}  {}\n",
            entry.id,
            entry.month.label(),
            section,
            row,
            entry.amount,
            entry.description,
            sw = section_width,
            rw = row_width,
        ));
    }

    let total: crate::models::Money = pending.iter().map(|e| e.amount).sum();
    output.push_str(&format!("\n{} pending, {} total\n", pending.len(), total));

    output
}
