//! Unit and service tests for the kanban task board.

mod support;
