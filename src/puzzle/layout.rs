use crate::collections::square::Coord;
use crate::puzzle::error::ConfigError;
use crate::puzzle::{token, CellId};

/// The dimensions of a puzzle: an N×N grid tiled by p×q blocks, N = p·q.
///
/// Built once per run and threaded through every component; all other
/// puzzle state derives from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    size: usize,
    block_rows: usize,
    block_cols: usize,
}

impl Layout {
    pub fn new(size: usize, block_rows: usize, block_cols: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::SizeZero);
        }
        if size != block_rows * block_cols {
            return Err(ConfigError::SizeBlockMismatch {
                size,
                block_rows,
                block_cols,
            });
        }
        if size > token::MAX_ALPHABET {
            return Err(ConfigError::SizeTooBig(size));
        }
        Ok(Self {
            size,
            block_rows,
            block_cols,
        })
    }

    /// The width (and height) of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of rows in a block
    pub fn block_rows(&self) -> usize {
        self.block_rows
    }

    /// The number of columns in a block
    pub fn block_cols(&self) -> usize {
        self.block_cols
    }

    pub fn cell_count(&self) -> usize {
        self.size.pow(2)
    }

    /// All cell ids in visiting (row-major) order
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        0..self.cell_count()
    }

    pub fn coord_at(&self, id: CellId) -> Coord {
        Coord::from_index(id, self.size)
    }

    /// The index of the block containing a cell
    pub fn block_at(&self, coord: Coord) -> usize {
        (coord.row() / self.block_rows) * self.block_rows + coord.col() / self.block_cols
    }
}

#[cfg(test)]
mod tests {
    use super::Layout;
    use crate::collections::square::Coord;
    use crate::puzzle::error::ConfigError;

    #[test]
    fn valid_layouts() {
        assert!(Layout::new(4, 2, 2).is_ok());
        assert!(Layout::new(6, 2, 3).is_ok());
        assert!(Layout::new(9, 3, 3).is_ok());
        assert!(Layout::new(1, 1, 1).is_ok());
        assert!(Layout::new(35, 5, 7).is_ok());
    }

    #[test]
    fn rejects_block_mismatch() {
        assert_eq!(
            Layout::new(9, 2, 3).unwrap_err(),
            ConfigError::SizeBlockMismatch {
                size: 9,
                block_rows: 2,
                block_cols: 3,
            }
        );
    }

    #[test]
    fn rejects_oversized_grid() {
        assert_eq!(Layout::new(36, 6, 6).unwrap_err(), ConfigError::SizeTooBig(36));
    }

    #[test]
    fn block_indices() {
        let layout = Layout::new(6, 2, 3).unwrap();
        assert_eq!(layout.block_at(Coord::new(0, 0)), 0);
        assert_eq!(layout.block_at(Coord::new(0, 3)), 1);
        assert_eq!(layout.block_at(Coord::new(1, 2)), 0);
        assert_eq!(layout.block_at(Coord::new(2, 0)), 2);
        assert_eq!(layout.block_at(Coord::new(5, 5)), 5);
    }
}
