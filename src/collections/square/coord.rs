use std::fmt;

/// Coordinates of a cell in a [`Square`](super::Square), 0-indexed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Converts a row-major index in a square of the given width
    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn from_index_is_row_major() {
        assert_eq!(Coord::from_index(11, 4), Coord::new(2, 3));
        assert_eq!(Coord::from_index(3, 4), Coord::new(0, 3));
    }
}
