//! Depth-first assignment search over the cells in row-major order
//!
//! Both variants visit all cells in their natural order, trying candidate
//! values from the current domain and undoing every domain mutation on
//! backtrack. Timeouts are cooperative: the budget is polled once per
//! recursion entry, so overrun is bounded by the cost of one node.

use std::time::{Duration, Instant};

use crate::collections::Square;
use crate::puzzle::{Board, CellId, Layout, PeerMap, Token};
use crate::solve::Strategy;

pub(crate) enum SearchOutcome {
    Solved,
    Exhausted,
    TimedOut,
}

/// Signals that the budget elapsed; carries no data, the counter lives on
/// the search state
struct SearchTimeout;

pub(crate) struct Search {
    layout: Layout,
    strategy: Strategy,
    /// candidate tokens per cell; length 1 means assigned
    domains: Vec<Vec<Token>>,
    /// per-cell peer lists filtered for the active strategy
    effective_peers: Vec<Vec<CellId>>,
    assignments: u64,
    start: Instant,
    budget: Duration,
}

impl Search {
    /// Prepares domains and effective peer lists. Returns `None` if
    /// forward-checking preprocessing empties a domain, which proves the
    /// pre-filled grid inconsistent before any search.
    pub(crate) fn new(
        board: &Board,
        peers: &PeerMap,
        strategy: Strategy,
        budget: Duration,
    ) -> Option<Self> {
        let layout = *board.layout();
        let tokens = board.alphabet();
        let prefilled: Vec<bool> = layout.cell_ids().map(|id| !board.is_open(id)).collect();
        let mut domains: Vec<Vec<Token>> = layout
            .cell_ids()
            .map(|id| {
                if prefilled[id] {
                    vec![board.token(id)]
                } else {
                    tokens.clone()
                }
            })
            .collect();

        let effective_peers = match strategy {
            Strategy::Backtracking => {
                // a candidate only needs checking against cells that hold a
                // final value: pre-filled cells and cells visited earlier
                layout
                    .cell_ids()
                    .map(|cell| {
                        peers
                            .peers(cell)
                            .iter()
                            .copied()
                            .filter(|&peer| prefilled[peer] || peer < cell)
                            .collect()
                    })
                    .collect()
            }
            Strategy::ForwardChecking => {
                // propagate every pre-filled value into its peers' domains
                for cell in layout.cell_ids().filter(|&id| prefilled[id]) {
                    let value = board.token(cell);
                    for &peer in peers.peers(cell) {
                        if let Some(pos) = domains[peer].iter().position(|&t| t == value) {
                            domains[peer].remove(pos);
                            if domains[peer].is_empty() {
                                return None;
                            }
                        }
                    }
                }
                // assigned values are baked into pruned domains, so only
                // cells visited later need propagation
                layout
                    .cell_ids()
                    .map(|cell| {
                        peers
                            .peers(cell)
                            .iter()
                            .copied()
                            .filter(|&peer| peer > cell)
                            .collect()
                    })
                    .collect()
            }
        };

        Some(Self {
            layout,
            strategy,
            domains,
            effective_peers,
            assignments: 0,
            start: Instant::now(),
            budget,
        })
    }

    pub(crate) fn assignments(&self) -> u64 {
        self.assignments
    }

    pub(crate) fn run(&mut self) -> SearchOutcome {
        let result = match self.strategy {
            Strategy::Backtracking => self.search_plain(0),
            Strategy::ForwardChecking => self.search_fc(0),
        };
        match result {
            Ok(true) => SearchOutcome::Solved,
            Ok(false) => SearchOutcome::Exhausted,
            Err(SearchTimeout) => SearchOutcome::TimedOut,
        }
    }

    /// The solved board; call only after `run` returned `Solved`
    pub(crate) fn solution(&self) -> Board {
        debug_assert!(self.domains.iter().all(|domain| domain.len() == 1));
        let cells = Square::from_iter(
            self.layout.size(),
            self.domains.iter().map(|domain| domain[0]),
        );
        Board::from_cells(self.layout, cells)
    }

    fn check_budget(&self) -> Result<(), SearchTimeout> {
        if self.start.elapsed() >= self.budget {
            debug!("search timed out after {} assignments", self.assignments);
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    fn search_plain(&mut self, depth: usize) -> Result<bool, SearchTimeout> {
        self.check_budget()?;
        if depth == self.layout.cell_count() {
            return Ok(true);
        }
        // the visiting order is row-major, so the cell id is the depth
        let cell: CellId = depth;
        let saved = self.domains[cell].clone();
        for &value in &saved {
            // effective peers hold final singleton values here
            let conflict = self.effective_peers[cell]
                .iter()
                .any(|&peer| self.domains[peer][0] == value);
            if conflict {
                continue;
            }
            debug!("depth {}: trying {} at {}", depth, value, self.layout.coord_at(cell));
            self.domains[cell] = vec![value];
            self.assignments += 1;
            if self.search_plain(depth + 1)? {
                return Ok(true);
            }
            self.domains[cell] = saved.clone();
        }
        Ok(false)
    }

    fn search_fc(&mut self, depth: usize) -> Result<bool, SearchTimeout> {
        self.check_budget()?;
        if depth == self.layout.cell_count() {
            return Ok(true);
        }
        let cell: CellId = depth;
        let saved = self.domains[cell].clone();
        for &value in &saved {
            debug!("depth {}: trying {} at {}", depth, value, self.layout.coord_at(cell));
            self.domains[cell] = vec![value];
            // prune the candidate from later peers, recording every
            // affected peer for undo
            let mut affected: Vec<CellId> = Vec::new();
            let mut emptied = false;
            for i in 0..self.effective_peers[cell].len() {
                let peer = self.effective_peers[cell][i];
                if let Some(pos) = self.domains[peer].iter().position(|&t| t == value) {
                    self.domains[peer].remove(pos);
                    affected.push(peer);
                    if self.domains[peer].is_empty() {
                        emptied = true;
                        break;
                    }
                }
            }
            if !emptied {
                self.assignments += 1;
                if self.search_fc(depth + 1)? {
                    return Ok(true);
                }
            }
            self.domains[cell] = saved.clone();
            for &peer in &affected {
                self.domains[peer].push(value);
            }
        }
        self.domains[cell] = saved;
        Ok(false)
    }
}
