use std::fs;
use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use doku::generate::generate_puzzle;
use doku::puzzle::{Board, Layout, PeerMap, OPEN_TOKEN};
use doku::solve::{PuzzleSolver, SolveResult, Strategy};

const STRATEGIES: [Strategy; 2] = [Strategy::Backtracking, Strategy::ForwardChecking];

/// Opens `count` randomly chosen cells of a full grid. The result is
/// solvable by construction: the full grid is one completion.
fn blank_cells(solution: &Board, count: usize, rng: &mut impl Rng) -> Board {
    let mut cells: Vec<_> = solution.layout().cell_ids().collect();
    cells.shuffle(rng);
    let mut puzzle = solution.clone();
    for &id in &cells[..count] {
        puzzle.set_token(id, OPEN_TOKEN);
    }
    puzzle
}

fn assert_solves_preserving_givens(puzzle: &Board, peers: &PeerMap) {
    for &strategy in &STRATEGIES {
        let result = PuzzleSolver::new(puzzle).strategy(strategy).solve();
        let data = result.solved().expect("puzzle blanked from a full grid is solvable");
        assert!(data.board.is_full());
        assert!(data.board.is_consistent(peers));
        // every pre-filled cell keeps its value
        for id in puzzle.layout().cell_ids().filter(|&id| !puzzle.is_open(id)) {
            assert_eq!(data.board.token(id), puzzle.token(id));
        }
    }
}

#[test]
fn generate_solve_round_trip() -> Result<()> {
    // a generated full grid certifies that its blanked variants have a
    // completion; a partial generation alone does not
    let layout = Layout::new(6, 2, 3)?;
    let peers = PeerMap::new(&layout);
    let mut rng = StdRng::seed_from_u64(2020);
    for _ in 0..3 {
        let solution = generate_puzzle(&layout, layout.cell_count(), None, &mut rng)?;
        let puzzle = blank_cells(&solution, 20, &mut rng);
        assert_solves_preserving_givens(&puzzle, &peers);
    }
    Ok(())
}

#[test]
fn round_trip_from_searched_solution() -> Result<()> {
    // build a full 9x9 grid with the solver itself, then blank and re-solve
    let layout = Layout::new(9, 3, 3)?;
    let peers = PeerMap::new(&layout);
    let empty = Board::new_open(layout);
    let result = PuzzleSolver::new(&empty)
        .strategy(Strategy::ForwardChecking)
        .solve();
    let solution = result.solved().expect("empty grid is solvable").board.clone();
    let mut rng = StdRng::seed_from_u64(2021);
    let puzzle = blank_cells(&solution, 45, &mut rng);
    assert_solves_preserving_givens(&puzzle, &peers);
    Ok(())
}

#[test]
fn solves_single_blank() -> Result<()> {
    let puzzle = Board::parse("4 2 2\n0 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n")?;
    for &strategy in &STRATEGIES {
        let result = PuzzleSolver::new(&puzzle).strategy(strategy).solve();
        let data = result.solved().expect("puzzle has a solution");
        assert_eq!(data.board.token(0), '1');
        assert!(data.assignments >= 1);
    }
    Ok(())
}

#[test]
fn forward_checking_detects_contradiction_without_search() -> Result<()> {
    // two 1s in the first row
    let puzzle = Board::parse("4 2 2\n1 0 0 1\n0 0 0 0\n0 0 0 0\n0 0 0 0\n")?;
    let result = PuzzleSolver::new(&puzzle)
        .strategy(Strategy::ForwardChecking)
        .solve();
    match result {
        SolveResult::Unsolvable { assignments } => assert_eq!(assignments, 0),
        _ => panic!("expected an unsolvable outcome"),
    }
    Ok(())
}

#[test]
fn backtracking_exhausts_contradictory_grid() -> Result<()> {
    let puzzle = Board::parse("4 2 2\n1 0 0 1\n0 0 0 0\n0 0 0 0\n0 0 0 0\n")?;
    let result = PuzzleSolver::new(&puzzle)
        .strategy(Strategy::Backtracking)
        .solve();
    assert!(matches!(result, SolveResult::Unsolvable { .. }));
    Ok(())
}

#[test]
fn near_zero_budget_times_out() -> Result<()> {
    // contradictory, but only lazily detectable by plain backtracking
    let mut text = String::from("9 3 3\n1 0 0 0 0 0 0 0 1\n");
    for _ in 0..8 {
        text.push_str("0 0 0 0 0 0 0 0 0\n");
    }
    let puzzle = Board::parse(&text)?;
    let result = PuzzleSolver::new(&puzzle)
        .strategy(Strategy::Backtracking)
        .budget(Duration::new(0, 0))
        .solve();
    match result {
        SolveResult::TimedOut { assignments } => assert_eq!(assignments, 0),
        _ => panic!("expected a timed-out outcome"),
    }
    Ok(())
}

#[test]
fn file_round_trip() -> Result<()> {
    let layout = Layout::new(9, 3, 3)?;
    let mut rng = StdRng::seed_from_u64(5);
    let puzzle = generate_puzzle(&layout, 20, None, &mut rng)?;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("puzzle.txt");
    fs::write(&path, puzzle.to_string())?;
    let loaded = Board::from_file(&path)?;
    assert_eq!(loaded, puzzle);
    Ok(())
}
