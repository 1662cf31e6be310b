//! Store adapters for the kanban task board.
//!
//! This module provides concrete implementations of the [`TaskStore`]
//! port, following hexagonal architecture principles. Adapters handle all
//! infrastructure concerns while the domain remains pure.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskStore`]: Thread-safe in-memory store for unit
//!   testing, with one-shot failure injection
//! - [`http::HttpTaskStore`]: REST client for the remote task store
//!
//! [`TaskStore`]: crate::board::ports::store::TaskStore

pub mod http;
pub mod memory;
