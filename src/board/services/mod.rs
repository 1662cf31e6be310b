//! Application services for the kanban task board.

mod board;

pub use board::{BoardCapabilities, BoardError, BoardResult, BoardService, LoadState};
