//! HTTP adapter for the remote task store.

mod client;
pub mod models;

pub use client::HttpTaskStore;
