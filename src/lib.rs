//! Planner - annual budget planning
//!
//! This library provides the core of the planner: a year of monthly values
//! grouped into editable sections, a computed balance section derived from
//! them, a local draft store, and a client for the REST backend that owns
//! categories, wallets, budget groups and transactions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Plan and backend data models
//! - `planning`: Totals, computed rows, balance and the plan store
//! - `storage`: Local draft persistence
//! - `api`: REST backend client
//! - `services`: Plan lifecycle and remote state
//! - `display`, `export`, `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use planner::models::{Money, Month};
//! use planner::planning::PlanStore;
//!
//! let mut store = PlanStore::with_defaults();
//! let (section, row) = store.find_cell("RECEITAS", "Salário")?;
//! store.add(section, row, Month::Jan, Money::from_units(300))?;
//! println!("{}", store.summary().balance[Month::Jan]);
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod planning;
pub mod services;
pub mod storage;

pub use error::{PlannerError, PlannerResult};
