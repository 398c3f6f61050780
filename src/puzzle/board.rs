use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;

use crate::collections::Square;
use crate::puzzle::error::{BoardFromFileError, ParsePuzzleError};
use crate::puzzle::parse::parse_board;
use crate::puzzle::{alphabet, CellId, Layout, PeerMap, Token, OPEN_TOKEN};

/// A puzzle instance: a layout plus a token per cell.
///
/// Open cells hold [`OPEN_TOKEN`]. A board is "solved" when every cell is
/// assigned and no two peers share a token.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    layout: Layout,
    cells: Square<Token>,
}

impl Board {
    /// Creates a board with every cell open
    pub fn new_open(layout: Layout) -> Self {
        Self {
            layout,
            cells: Square::with_width_and_value(layout.size(), OPEN_TOKEN),
        }
    }

    pub(crate) fn from_cells(layout: Layout, cells: Square<Token>) -> Self {
        debug_assert_eq!(cells.len(), layout.cell_count());
        Self { layout, cells }
    }

    /// Reads and parses a board from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoardFromFileError> {
        let mut buf = String::new();
        File::open(path)?.read_to_string(&mut buf)?;
        let board = Self::parse(&buf)?;
        Ok(board)
    }

    /// Parses a board from the `N p q` header plus grid format
    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        parse_board(s)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The tokens valid for this board, in numbering order
    pub fn alphabet(&self) -> Vec<Token> {
        alphabet(self.layout.size())
    }

    pub fn token(&self, id: CellId) -> Token {
        self.cells[id]
    }

    pub fn set_token(&mut self, id: CellId, token: Token) {
        self.cells[id] = token;
    }

    pub fn is_open(&self, id: CellId) -> bool {
        self.cells[id] == OPEN_TOKEN
    }

    /// The number of pre-filled cells
    pub fn given_count(&self) -> usize {
        self.cells.iter().filter(|&&t| t != OPEN_TOKEN).count()
    }

    pub fn is_full(&self) -> bool {
        self.given_count() == self.layout.cell_count()
    }

    /// Returns true if no two assigned peer cells share a token
    pub fn is_consistent(&self, peers: &PeerMap) -> bool {
        self.layout.cell_ids().all(|id| {
            self.is_open(id)
                || peers
                    .peers(id)
                    .iter()
                    .all(|&peer| self.is_open(peer) || self.token(peer) != self.token(id))
        })
    }

    /// Renders the grid with block separators for display on a console
    pub fn to_pretty_string(&self) -> String {
        let size = self.layout.size();
        let block_rows = self.layout.block_rows();
        let block_cols = self.layout.block_cols();
        let segment = "-".repeat(2 * block_cols + 1);
        let hor_line = (0..size / block_cols).map(|_| &segment).join("+");
        let mut out = String::new();
        for (i, row) in self.cells.rows().enumerate() {
            out.push(' ');
            for (j, &token) in row.iter().enumerate() {
                out.push(token);
                if j + 1 == size {
                    break;
                }
                if (j + 1) % block_cols == 0 {
                    out.push_str(" |");
                }
                out.push(' ');
            }
            out.push('\n');
            if (i + 1) % block_rows == 0 && i + 1 != size {
                out.push_str(&hor_line);
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            self.layout.size(),
            self.layout.block_rows(),
            self.layout.block_cols()
        )?;
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
