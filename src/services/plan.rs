//! Plan service
//!
//! Ties a [`PlanStore`] to its local draft and to the backend: opening a
//! plan year, rebuilding the layout from budget groups, and committing
//! pending entries as transactions.

use std::collections::HashMap;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{
    EditableSection, PendingEntry, Row, RowId, Transaction, TransactionInput, TransactionKind,
    Wallet, WalletId,
};
use crate::planning::defaults::INCOME_TITLE;
use crate::planning::{sections_from_groups, PlanStore};
use crate::storage::DraftStore;

/// Service for plan lifecycle operations
pub struct PlanService<'a> {
    drafts: &'a DraftStore,
}

impl<'a> PlanService<'a> {
    pub fn new(drafts: &'a DraftStore) -> Self {
        Self { drafts }
    }

    /// Open a plan year from its draft, or from the default layout
    pub fn open_local(&self, year: i32) -> PlanStore {
        match self.drafts.load(year) {
            Some(draft) => PlanStore::from_draft(draft),
            None => {
                tracing::info!(year, "no draft found, starting from default layout");
                PlanStore::with_defaults()
            }
        }
    }

    /// Persist the store as the draft for `year`
    pub fn save_draft(&self, store: &PlanStore, year: i32) -> PlannerResult<()> {
        self.drafts.save(&store.to_draft(year))
    }

    /// Rebuild the layout from the backend's budget groups
    ///
    /// Rows keep their values when the category still exists; sections keep
    /// their id when a section with the same title existed. Returns `false`
    /// and leaves the store alone when the backend has no groups.
    pub async fn sync_layout(&self, api: &ApiClient, store: &mut PlanStore) -> PlannerResult<bool> {
        let (groups, categories) =
            tokio::try_join!(api.list_budget_groups(), api.list_categories())?;

        if groups.is_empty() {
            tracing::info!("backend has no budget groups, keeping local layout");
            return Ok(false);
        }

        let fresh = sections_from_groups(&groups, &categories);
        let merged = merge_layout(store.sections(), fresh);
        store.replace_sections(merged)?;

        tracing::debug!(
            groups = groups.len(),
            categories = categories.len(),
            "synced plan layout"
        );
        Ok(true)
    }

    /// Send every pending entry to the backend as one batch of transactions
    ///
    /// On success the pending list is drained and the draft rewritten. A
    /// draft that cannot be rewritten at that point is only logged: the
    /// backend already holds the transactions. On failure nothing changes
    /// locally.
    pub async fn commit_pending(
        &self,
        api: &ApiClient,
        store: &mut PlanStore,
        year: i32,
        wallet: Option<WalletId>,
    ) -> PlannerResult<Vec<Transaction>> {
        if store.pending().is_empty() {
            return Ok(Vec::new());
        }

        let inputs = store
            .pending()
            .iter()
            .map(|entry| transaction_for(store, entry, year, wallet))
            .collect::<PlannerResult<Vec<_>>>()?;

        let created = api.create_transactions(&inputs).await?;

        let committed = store.take_pending();
        if let Err(err) = self.save_draft(store, year) {
            tracing::warn!(
                error = %err,
                year,
                "transactions committed but the draft was not rewritten"
            );
        }

        tracing::info!(committed = committed.len(), year, "committed pending entries");
        Ok(created)
    }
}

/// Find a wallet by name (case-insensitive) or id
pub fn find_wallet<'w>(wallets: &'w [Wallet], identifier: &str) -> Option<&'w Wallet> {
    let lower = identifier.to_lowercase();
    wallets
        .iter()
        .find(|w| w.name.to_lowercase() == lower)
        .or_else(|| wallets.iter().find(|w| w.id.matches(identifier)))
}

/// Build the create request for one pending entry
fn transaction_for(
    store: &PlanStore,
    entry: &PendingEntry,
    year: i32,
    wallet: Option<WalletId>,
) -> PlannerResult<TransactionInput> {
    let (section, row) = store
        .row(entry.section_id, entry.row_id)
        .ok_or_else(|| PlannerError::row_not_found(entry.row_id.to_string()))?;

    let date = entry.booking_date(year).ok_or_else(|| {
        PlannerError::Validation(format!("Invalid booking date for {} {}", entry.month, year))
    })?;

    let kind = if section.title.eq_ignore_ascii_case(INCOME_TITLE) {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };

    let description = if entry.description.is_empty() {
        row.label.clone()
    } else {
        entry.description.clone()
    };

    Ok(TransactionInput {
        description,
        amount: entry.amount,
        date,
        kind,
        category_id: row.category_id,
        wallet_id: wallet,
    })
}

/// Carry ids and values of the current layout over to a freshly built one
fn merge_layout(
    current: &[Arc<EditableSection>],
    fresh: Vec<Arc<EditableSection>>,
) -> Vec<Arc<EditableSection>> {
    let rows: HashMap<RowId, &Arc<Row>> = current
        .iter()
        .flat_map(|s| s.rows.iter())
        .map(|r| (r.id, r))
        .collect();

    fresh
        .into_iter()
        .map(|section| {
            let previous = current
                .iter()
                .find(|s| s.title.eq_ignore_ascii_case(&section.title));

            let mut section = EditableSection::clone(&section);
            if let Some(previous) = previous {
                section.id = previous.id;
            }
            section.rows = section
                .rows
                .iter()
                .map(|row| match rows.get(&row.id) {
                    Some(old) => Arc::new(Row {
                        values: old.values,
                        ..Row::clone(row)
                    }),
                    None => Arc::clone(row),
                })
                .collect();
            Arc::new(section)
        })
        .collect()
}
