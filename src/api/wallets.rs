//! Wallet endpoints

use reqwest::Method;

use crate::error::PlannerResult;
use crate::models::{Wallet, WalletId, WalletInput};

use super::client::ApiClient;

impl ApiClient {
    pub async fn list_wallets(&self) -> PlannerResult<Vec<Wallet>> {
        self.get_json("wallets").await
    }

    pub async fn create_wallet(&self, input: &WalletInput) -> PlannerResult<Wallet> {
        self.send_json(Method::POST, "wallets", input).await
    }

    pub async fn update_wallet(&self, id: WalletId, input: &WalletInput) -> PlannerResult<Wallet> {
        self.send_json(Method::PUT, &format!("wallets/{:#}", id), input)
            .await
    }

    pub async fn delete_wallet(&self, id: WalletId) -> PlannerResult<()> {
        self.delete(&format!("wallets/{:#}", id)).await
    }
}
