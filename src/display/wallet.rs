//! Wallet display formatting

use crate::models::{Money, Wallet};

/// Format wallets with balances as a table
pub fn format_wallet_list(wallets: &[Wallet], currency_symbol: &str) -> String {
    if wallets.is_empty() {
        return "No wallets found.".to_string();
    }

    let name_width = wallets
        .iter()
        .map(|w| w.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<12}  {:>14}  {}\n",
        "Name",
        "Type",
        "Balance",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<12}  {:->14}  {:-<12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for wallet in wallets {
        output.push_str(&format!(
            "{:<name_width$}  {:<12}  {:>14}  {}\n",
            wallet.name,
            wallet.wallet_type.to_string(),
            wallet.balance.format_with_symbol(currency_symbol),
            wallet.id,
            name_width = name_width,
        ));
    }

    let total: Money = wallets.iter().map(|w| w.balance).sum();
    output.push_str(&format!(
        "{:-<name_width$}  {:-<12}  {:->14}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:<12}  {:>14}\n",
        "Total",
        "",
        total.format_with_symbol(currency_symbol),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WalletId, WalletType};

    #[test]
    fn test_format_wallet_list() {
        let wallets = vec![
            Wallet {
                id: WalletId::new(),
                name: "Nubank".into(),
                balance: Money::from_cents(150075),
                wallet_type: WalletType::Checking,
                bank_id: None,
            },
            Wallet {
                id: WalletId::new(),
                name: "Carteira".into(),
                balance: Money::from_units(-20),
                wallet_type: WalletType::Cash,
                bank_id: None,
            },
        ];

        let output = format_wallet_list(&wallets, "R$");
        assert!(output.contains("R$1500.75"));
        assert!(output.contains("-R$20.00"));
        assert!(output.contains("R$1480.75"));
        assert!(output.contains("Cash"));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_wallet_list(&[], "R$"), "No wallets found.");
    }
}
