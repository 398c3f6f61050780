//! Parse boards from text

use crate::collections::Square;
use crate::puzzle::error::ParsePuzzleError;
use crate::puzzle::{alphabet, Board, Layout, Token, OPEN_TOKEN};

/// Parses the `N p q` header line followed by N rows of N
/// space-separated tokens, `'0'` marking an open cell.
pub(crate) fn parse_board(s: &str) -> Result<Board, ParsePuzzleError> {
    let mut lines = s.lines().filter(|line| !line.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| ParsePuzzleError::InvalidHeader("empty input".into()))?;
    let layout = parse_header(header)?;
    let size = layout.size();
    let tokens = alphabet(size);

    let mut cells: Vec<Token> = Vec::with_capacity(layout.cell_count());
    let mut row_count = 0;
    for (row, line) in lines.enumerate() {
        row_count += 1;
        if row_count > size {
            break;
        }
        let mut width = 0;
        for (col, word) in line.split_whitespace().enumerate() {
            width += 1;
            if width > size {
                break;
            }
            let token = parse_token(word, &tokens).ok_or_else(|| {
                ParsePuzzleError::UnknownToken {
                    token: word.to_string(),
                    row,
                    col,
                }
            })?;
            cells.push(token);
        }
        if width != size {
            return Err(ParsePuzzleError::WrongRowWidth {
                row,
                expected: size,
                found: width,
            });
        }
    }
    if row_count != size {
        return Err(ParsePuzzleError::WrongRowCount {
            expected: size,
            found: row_count,
        });
    }
    Ok(Board::from_cells(layout, Square::from_iter(size, cells)))
}

fn parse_header(line: &str) -> Result<Layout, ParsePuzzleError> {
    let fields: Vec<usize> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| ParsePuzzleError::InvalidHeader(line.to_string()))?;
    match fields[..] {
        [size, block_rows, block_cols] => {
            let layout = Layout::new(size, block_rows, block_cols)?;
            Ok(layout)
        }
        _ => Err(ParsePuzzleError::InvalidHeader(line.to_string())),
    }
}

fn parse_token(word: &str, tokens: &[Token]) -> Option<Token> {
    let mut chars = word.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c == OPEN_TOKEN || tokens.contains(&c) {
        Some(c)
    } else {
        None
    }
}
