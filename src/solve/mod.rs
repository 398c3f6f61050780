//! Solve puzzles with backtracking search

use std::time::Duration;

use crate::puzzle::{Board, PeerMap};

use self::search::{Search, SearchOutcome};

mod search;

/// Wall-clock budget used when none is specified
pub const DEFAULT_BUDGET: Duration = Duration::from_secs(60);

/// The search variant to use
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Plain depth-first backtracking; candidates are checked against
    /// already-assigned peers only
    Backtracking,
    /// Backtracking with forward checking; each assignment is propagated
    /// into the domains of unassigned peers
    ForwardChecking,
}

/// The terminal outcome of a solver run
pub enum SolveResult {
    /// A full consistent assignment was found
    Solved(SolvedData),
    /// The search space was exhausted; the puzzle has no solution
    Unsolvable { assignments: u64 },
    /// The budget elapsed before the search could give a definite answer
    TimedOut { assignments: u64 },
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }

    /// The number of variable assignments made during the search
    pub fn assignments(&self) -> u64 {
        match *self {
            SolveResult::Solved(SolvedData { assignments, .. })
            | SolveResult::Unsolvable { assignments }
            | SolveResult::TimedOut { assignments } => assignments,
        }
    }
}

pub struct SolvedData {
    pub board: Board,
    pub assignments: u64,
}

pub struct PuzzleSolver<'a> {
    board: &'a Board,
    strategy: Strategy,
    budget: Duration,
}

impl<'a> PuzzleSolver<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            strategy: Strategy::Backtracking,
            budget: DEFAULT_BUDGET,
        }
    }

    pub fn strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    pub fn budget(&mut self, budget: Duration) -> &mut Self {
        self.budget = budget;
        self
    }

    pub fn solve(&self) -> SolveResult {
        let peers = PeerMap::new(self.board.layout());
        let mut search = match Search::new(self.board, &peers, self.strategy, self.budget) {
            Some(search) => search,
            // a pre-filled value wiped out a peer's domain
            None => {
                info!("puzzle is inconsistent before search");
                return SolveResult::Unsolvable { assignments: 0 };
            }
        };
        match search.run() {
            SearchOutcome::Solved => {
                let board = search.solution();
                debug_assert!(board.is_consistent(&peers));
                SolveResult::Solved(SolvedData {
                    board,
                    assignments: search.assignments(),
                })
            }
            SearchOutcome::Exhausted => SolveResult::Unsolvable {
                assignments: search.assignments(),
            },
            SearchOutcome::TimedOut => SolveResult::TimedOut {
                assignments: search.assignments(),
            },
        }
    }
}
