//! Transaction endpoints and the single-file import upload

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Transaction, TransactionFilter, TransactionId, TransactionInput};

use super::client::{read_json, ApiClient};

#[derive(Serialize)]
struct BatchBody<'a> {
    transactions: &'a [TransactionInput],
}

fn validate(input: &TransactionInput) -> PlannerResult<()> {
    input.validate().map_err(PlannerError::Validation)
}

impl ApiClient {
    pub async fn create_transaction(&self, input: &TransactionInput) -> PlannerResult<Transaction> {
        validate(input)?;
        self.send_json(Method::POST, "transactions", input).await
    }

    /// Create many transactions in one request
    pub async fn create_transactions(
        &self,
        inputs: &[TransactionInput],
    ) -> PlannerResult<Vec<Transaction>> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        inputs.iter().try_for_each(validate)?;

        self.send_json(
            Method::POST,
            "transactions/batch",
            &BatchBody {
                transactions: inputs,
            },
        )
        .await
    }

    pub async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> PlannerResult<Vec<Transaction>> {
        self.get_json_query("transactions", filter).await
    }

    pub async fn get_transaction(&self, id: TransactionId) -> PlannerResult<Transaction> {
        self.get_json(&format!("transactions/{:#}", id)).await
    }

    pub async fn update_transaction(
        &self,
        id: TransactionId,
        input: &TransactionInput,
    ) -> PlannerResult<Transaction> {
        validate(input)?;
        self.send_json(Method::PUT, &format!("transactions/{:#}", id), input)
            .await
    }

    pub async fn delete_transaction(&self, id: TransactionId) -> PlannerResult<()> {
        self.delete(&format!("transactions/{:#}", id)).await
    }

    /// Upload one statement file; the backend parses it and returns the
    /// transactions it found (not yet saved)
    pub async fn import_file(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> PlannerResult<Vec<TransactionInput>> {
        let part = Part::bytes(contents).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .request(Method::POST, "transactions/import")?
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    /// Read a file from disk and upload it with [`ApiClient::import_file`]
    pub async fn import_path(&self, path: &Path) -> PlannerResult<Vec<TransactionInput>> {
        let contents = std::fs::read(path).map_err(|e| {
            PlannerError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("import");

        self.import_file(file_name, contents).await
    }
}
