//! A square grid container

mod coord;

pub use self::coord::Coord;

use std::ops::{Index, IndexMut};
use std::slice::Chunks;

/// A container of elements arranged in a square grid, stored row-major
#[derive(Clone, Debug, PartialEq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Creates a square of a specified width filled with a specified value
    pub fn with_width_and_value(width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            elements: vec![value; width.pow(2)],
        }
    }

    /// Creates a square of a specified width from a row-major iterator.
    /// Panics if the iterator does not yield exactly `width²` elements.
    pub fn from_iter(width: usize, iter: impl IntoIterator<Item = T>) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        assert_eq!(elements.len(), width.pow(2));
        Self { width, elements }
    }

    /// Returns the number of elements in the grid
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    pub fn rows(&self) -> Chunks<'_, T> {
        self.elements.chunks(self.width)
    }
}

impl<T> Index<usize> for Square<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Square<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn from_iter_row_major() {
        let square = Square::from_iter(3, 0..9);
        assert_eq!(square[4], 4);
        assert_eq!(square.len(), 9);
    }

    #[test]
    fn rows() {
        let square = Square::from_iter(2, 1..=4);
        let rows: Vec<&[i32]> = square.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }
}
