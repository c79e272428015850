//! Wallet records as served by the backend

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WalletId;
use super::money::{as_decimal, Money};

/// Kind of wallet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    #[default]
    Checking,
    Savings,
    Credit,
    Cash,
    Investment,
    Other,
}

impl WalletType {
    /// Parse wallet type from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" | "corrente" => Some(Self::Checking),
            "savings" | "poupanca" | "poupança" => Some(Self::Savings),
            "credit" | "credit_card" | "cartao" | "cartão" => Some(Self::Credit),
            "cash" | "dinheiro" => Some(Self::Cash),
            "investment" | "investimento" => Some(Self::Investment),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Cash => write!(f, "Cash"),
            Self::Investment => write!(f, "Investment"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A wallet (bank account, card, cash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: WalletId,
    pub name: String,
    #[serde(with = "as_decimal")]
    pub balance: Money,
    #[serde(rename = "type", default)]
    pub wallet_type: WalletType,
    /// Backend bank identifier, if linked to a bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.wallet_type)
    }
}

/// Request body for creating or updating a wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletInput {
    pub name: String,
    #[serde(with = "as_decimal")]
    pub balance: Money,
    #[serde(rename = "type")]
    pub wallet_type: WalletType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_from_json() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Nubank",
            "balance": 1520.75,
            "type": "checking",
            "bankId": "260"
        }"#;
        let wallet: Wallet = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.balance, Money::from_cents(152075));
        assert_eq!(wallet.wallet_type, WalletType::Checking);
        assert_eq!(wallet.bank_id.as_deref(), Some("260"));
    }

    #[test]
    fn test_wallet_type_parse() {
        assert_eq!(WalletType::parse("Poupança"), Some(WalletType::Savings));
        assert_eq!(WalletType::parse("credit_card"), Some(WalletType::Credit));
        assert_eq!(WalletType::parse("bitcoin"), None);
    }

    #[test]
    fn test_input_serializes_type_field() {
        let input = WalletInput {
            name: "Carteira".into(),
            balance: Money::from_units(50),
            wallet_type: WalletType::Cash,
            bank_id: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["type"], "cash");
        assert_eq!(json["balance"], 50.0);
        assert!(json.get("bankId").is_none());
    }
}
