//! Kanban task board state management.
//!
//! This module implements the board core of the dashboard client: deriving
//! status columns from the authoritative task list, applying the active
//! filter criteria, and coordinating create, edit and delete flows against
//! the remote task store. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
