//! Configuration module for the budget planner
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (backend URL, draft namespace, display)

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;
