//! Generate and solve generalized Sudoku puzzles
//!
//! A puzzle is an N×N grid partitioned into p×q rectangular blocks
//! (N = p·q). Every cell holds one of N tokens and no token may repeat
//! within a row, column, or block.

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod generate;
pub mod puzzle;
pub mod solve;
