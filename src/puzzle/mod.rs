//! Sudoku puzzle model

pub use self::board::Board;
pub use self::layout::Layout;
pub use self::peers::PeerMap;
pub use self::token::{alphabet, token_for, Token, OPEN_TOKEN};

pub mod error;

mod board;
mod layout;
mod parse;
mod peers;
mod token;

/// Row-major index of a cell in the grid
pub type CellId = usize;
