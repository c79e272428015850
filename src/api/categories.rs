//! Category endpoints

use reqwest::Method;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Category, CategoryId, CategoryInput};

use super::client::ApiClient;

impl ApiClient {
    pub async fn list_categories(&self) -> PlannerResult<Vec<Category>> {
        self.get_json("categories").await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> PlannerResult<Category> {
        input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;
        self.send_json(Method::POST, "categories", input).await
    }

    pub async fn update_category(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> PlannerResult<Category> {
        input
            .validate()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;
        self.send_json(Method::PUT, &format!("categories/{:#}", id), input)
            .await
    }

    pub async fn delete_category(&self, id: CategoryId) -> PlannerResult<()> {
        self.delete(&format!("categories/{:#}", id)).await
    }
}
