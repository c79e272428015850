//! Budget group endpoints, including reordering and bulk category assignment

use reqwest::Method;
use serde::Serialize;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetGroup, BudgetGroupId, BudgetGroupInput, CategoryAssignment};

use super::client::ApiClient;

#[derive(Serialize)]
struct ReorderBody<'a> {
    ids: &'a [BudgetGroupId],
}

#[derive(Serialize)]
struct RenameBody<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct AssignmentsBody<'a> {
    assignments: &'a [CategoryAssignment],
}

impl ApiClient {
    pub async fn list_budget_groups(&self) -> PlannerResult<Vec<BudgetGroup>> {
        self.get_json("budget-groups").await
    }

    pub async fn create_budget_group(&self, input: &BudgetGroupInput) -> PlannerResult<BudgetGroup> {
        self.send_json(Method::POST, "budget-groups", input).await
    }

    pub async fn update_budget_group(
        &self,
        id: BudgetGroupId,
        input: &BudgetGroupInput,
    ) -> PlannerResult<BudgetGroup> {
        self.send_json(Method::PUT, &format!("budget-groups/{:#}", id), input)
            .await
    }

    pub async fn delete_budget_group(&self, id: BudgetGroupId) -> PlannerResult<()> {
        self.delete(&format!("budget-groups/{:#}", id)).await
    }

    /// Persist a new display order; `ids` lists every group once
    pub async fn reorder_budget_groups(&self, ids: &[BudgetGroupId]) -> PlannerResult<()> {
        self.send_json_empty(Method::PUT, "budget-groups/reorder", &ReorderBody { ids })
            .await
    }

    pub async fn rename_budget_group(
        &self,
        id: BudgetGroupId,
        name: &str,
    ) -> PlannerResult<BudgetGroup> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::Validation(
                "Budget group name cannot be empty".into(),
            ));
        }

        self.send_json(
            Method::PATCH,
            &format!("budget-groups/{:#}/name", id),
            &RenameBody { name },
        )
        .await
    }

    /// Assign or unassign many categories in one call
    pub async fn update_category_assignments(
        &self,
        assignments: &[CategoryAssignment],
    ) -> PlannerResult<()> {
        if assignments.is_empty() {
            return Ok(());
        }

        self.send_json_empty(
            Method::PUT,
            "budget-groups/category-assignments",
            &AssignmentsBody { assignments },
        )
        .await
    }
}
