//! CSV export of the plan grid
//!
//! One record per row: section, row label, twelve monthly values and the
//! annual total. Section footers, computed rows and the balance follow in
//! the same shape so the file opens as a spreadsheet mirroring the grid.

use std::io::Write;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Month, MonthlyValues};
use crate::planning::PlanStore;

fn export_error(e: impl std::fmt::Display) -> PlannerError {
    PlannerError::Export(e.to_string())
}

fn record(kind: &str, section: &str, label: &str, values: &MonthlyValues) -> Vec<String> {
    let mut fields = vec![kind.to_string(), section.to_string(), label.to_string()];
    fields.extend(values.iter().map(|v| v.to_string()));
    fields.push(values.annual_total().to_string());
    fields
}

/// Write the plan as CSV
pub fn export_plan_csv<W: Write>(store: &PlanStore, writer: W) -> PlannerResult<()> {
    let summary = store.summary();
    let computed = store.computed();
    let mut out = ::csv::Writer::from_writer(writer);

    let mut header = vec!["Kind".to_string(), "Section".to_string(), "Label".to_string()];
    header.extend(Month::ALL.iter().map(|m| m.label().to_string()));
    header.push("TOTAL".to_string());
    out.write_record(&header).map_err(export_error)?;

    for section in store.sections() {
        for row in &section.rows {
            out.write_record(record("row", &section.title, &row.label, &row.values))
                .map_err(export_error)?;
        }
        let total = summary.totals.get_or_zero(&section.title);
        out.write_record(record("total", &section.title, &section.footer_label, &total))
            .map_err(export_error)?;
    }

    for row in &summary.computed_rows {
        let label = format!("{} {}", row.sign.symbol(), row.label);
        out.write_record(record("computed", &computed.title, &label, &row.values))
            .map_err(export_error)?;
    }
    out.write_record(record(
        "balance",
        &computed.title,
        &computed.footer.label,
        &summary.balance,
    ))
    .map_err(export_error)?;

    out.flush().map_err(export_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EditableSection, Money, Row};
    use std::sync::Arc;

    #[test]
    fn test_export_plan_csv() {
        let mut store = PlanStore::with_defaults();
        let mut sections = store.sections().to_vec();
        sections[0] = Arc::new(EditableSection::clone(&sections[0]).with_rows([Row::new("Salário, fixo")]));
        store.replace_sections(sections).unwrap();
        let (sid, rid) = store.find_cell("RECEITAS", "Salário, fixo").unwrap();
        store.add(sid, rid, Month::Jan, Money::from_units(300)).unwrap();

        let mut buffer = Vec::new();
        export_plan_csv(&store, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Kind,Section,Label,JAN,FEV"));
        assert!(lines[0].ends_with("DEZ,TOTAL"));
        // Labels containing commas are quoted
        assert!(lines[1].starts_with("row,RECEITAS,\"Salário, fixo\",300.00,0.00"));
        assert!(lines.iter().any(|l| l.starts_with("total,RECEITAS,TOTAL RECEITAS,300.00")));
        assert!(lines.iter().any(|l| l.starts_with("computed,SALDO,+ ")));
        assert!(lines
            .last()
            .unwrap()
            .starts_with("balance,SALDO,SALDO DO MÊS,300.00"));
    }
}
