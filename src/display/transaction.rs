//! Transaction display formatting

use crate::models::{Category, Money, Transaction, TransactionInput};

/// Format transactions as a register-style table
pub fn format_transaction_list(transactions: &[Transaction], categories: &[Category]) -> String {
    if transactions.is_empty() {
        return "No transactions found.".to_string();
    }

    let category_name = |txn: &Transaction| -> String {
        txn.category_id
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
            .unwrap_or_default()
    };

    let desc_width = transactions
        .iter()
        .map(|t| t.description.chars().count())
        .max()
        .unwrap_or(11)
        .clamp(11, 40);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<desc_width$}  {:<16}  {:>12}  {}\n",
        "Date",
        "Description",
        "Category",
        "Amount",
        "ID",
        desc_width = desc_width,
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<desc_width$}  {:-<16}  {:->12}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
    ));

    for txn in transactions {
        let description: String = txn.description.chars().take(desc_width).collect();
        output.push_str(&format!(
            "{:<10}  {:<desc_width$}  {:<16}  {:>12}  {}\n",
            txn.date.format("%Y-%m-%d").to_string(),
            description,
            category_name(txn),
            txn.signed_amount(),
            txn.id,
            desc_width = desc_width,
        ));
    }

    let net: Money = transactions.iter().map(|t| t.signed_amount()).sum();
    output.push_str(&format!("\n{} transactions, net {}\n", transactions.len(), net));

    output
}

/// Format records parsed from an uploaded statement
pub fn format_import_preview(records: &[TransactionInput]) -> String {
    if records.is_empty() {
        return "No records found in file.".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&format!(
            "{}  {:<7}  {:>12}  {}\n",
            record.date.format("%Y-%m-%d"),
            record.kind.to_string(),
            record.amount,
            record.description
        ));
    }
    output.push_str(&format!("\n{} records parsed\n", records.len()));
    output
}
