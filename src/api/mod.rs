//! REST backend client
//!
//! Thin request/response wrappers over the backend's category, wallet,
//! budget group and transaction resources. Every call either returns the
//! decoded record(s) or a [`PlannerError`](crate::error::PlannerError);
//! nothing is retried.

mod budget_groups;
mod categories;
mod client;
mod transactions;
mod wallets;

#[cfg(test)]
mod tests;

pub use client::ApiClient;
