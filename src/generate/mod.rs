//! Randomized puzzle generation
//!
//! Produces a board with exactly `clue_count` pre-filled cells forming a
//! consistent partial assignment. The algorithm is greedy and one-pass:
//! cells are assigned in a random order, each checked only against peers
//! assigned before it. If a cell's candidates run out the whole attempt is
//! discarded and restarted with a fresh shuffle; there is no partial
//! backtracking.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::puzzle::error::{ConfigError, GenerateError};
use crate::puzzle::{alphabet, Board, CellId, Layout, PeerMap, Token};

/// Generates a puzzle with `clue_count` pre-filled cells.
///
/// Retries until an attempt succeeds or the optional wall-clock budget is
/// exhausted; the budget is checked once per attempt.
pub fn generate_puzzle(
    layout: &Layout,
    clue_count: usize,
    budget: Option<Duration>,
    rng: &mut impl Rng,
) -> Result<Board, GenerateError> {
    if clue_count == 0 || clue_count > layout.cell_count() {
        return Err(ConfigError::ClueCountOutOfRange {
            count: clue_count,
            cell_count: layout.cell_count(),
        }
        .into());
    }
    let peers = PeerMap::new(layout);
    let tokens = alphabet(layout.size());
    let mut cells: Vec<CellId> = layout.cell_ids().collect();

    let start = Instant::now();
    let mut attempts = 0;
    loop {
        if let Some(budget) = budget {
            if start.elapsed() >= budget {
                return Err(GenerateError::Timeout { attempts });
            }
        }
        attempts += 1;
        cells.shuffle(rng);
        if let Some(board) = attempt(layout, &peers, &tokens, &cells[..clue_count], rng) {
            debug!("generated a puzzle in {} attempts", attempts);
            return Ok(board);
        }
    }
}

/// One no-backtracking pass over the target cells in assignment order.
/// Returns `None` if any cell's candidates are exhausted.
fn attempt(
    layout: &Layout,
    peers: &PeerMap,
    tokens: &[Token],
    targets: &[CellId],
    rng: &mut impl Rng,
) -> Option<Board> {
    // position of each cell in the assignment order, for the earlier-peer
    // restriction below
    let mut order = vec![usize::max_value(); layout.cell_count()];
    for (i, &cell) in targets.iter().enumerate() {
        order[cell] = i;
    }

    let mut board = Board::new_open(*layout);
    for (i, &cell) in targets.iter().enumerate() {
        // only peers assigned earlier constrain this cell
        let earlier_peers: Vec<CellId> = peers
            .peers(cell)
            .iter()
            .copied()
            .filter(|&peer| order[peer] < i)
            .collect();
        let mut domain = tokens.to_vec();
        let mut assigned = false;
        while !domain.is_empty() {
            let index = rng.gen_range(0, domain.len());
            let value = domain[index];
            if earlier_peers.iter().any(|&peer| board.token(peer) == value) {
                domain.swap_remove(index);
            } else {
                board.set_token(cell, value);
                assigned = true;
                break;
            }
        }
        if !assigned {
            return None;
        }
    }
    Some(board)
}
