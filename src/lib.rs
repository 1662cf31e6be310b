//! Taskdeck: kanban task board core for a project-tracking dashboard.
//!
//! This crate provides the stateful core behind a kanban-style task board:
//! partitioning tasks into status columns, filtering by search text and
//! priority/project/assignee selectors, and reconciling create, update and
//! delete operations against a remote REST task store.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote task store
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Task board state, column derivation and mutation flows
//! - [`session`]: Authenticated session context injected into the board

pub mod board;
pub mod session;
