//! Port contracts for the kanban task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};
