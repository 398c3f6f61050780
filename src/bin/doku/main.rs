#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::fs;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use doku::generate::generate_puzzle;
use doku::puzzle::{Board, Layout};
use doku::solve::{PuzzleSolver, SolveResult, Strategy};

use crate::options::{Options, Source};

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    match options.source() {
        Source::Generate(generate) => run_generate(&options, generate),
        Source::File(solve) => run_solve(&options, solve),
    }
}

fn run_generate(options: &Options, generate: &options::Generate) -> Result<()> {
    let layout = Layout::new(generate.size, generate.block_rows, generate.block_cols)?;
    let budget = generate.timeout.map(Duration::from_secs);
    let board = match generate.seed {
        Some(seed) => {
            generate_puzzle(&layout, generate.clues, budget, &mut StdRng::seed_from_u64(seed))?
        }
        None => generate_puzzle(&layout, generate.clues, budget, &mut thread_rng())?,
    };
    match options.output() {
        Some(path) => {
            fs::write(path, board.to_string())?;
            println!("Saved puzzle to {}", path.display());
        }
        None => print!("{}", board),
    }
    if options.print() {
        print!("{}", board.to_pretty_string());
    }
    Ok(())
}

fn run_solve(options: &Options, solve: &options::Solve) -> Result<()> {
    let board = Board::from_file(&solve.input)?;
    let strategy = if solve.forward_checking {
        Strategy::ForwardChecking
    } else {
        Strategy::Backtracking
    };
    let start = Instant::now();
    let result = PuzzleSolver::new(&board)
        .strategy(strategy)
        .budget(Duration::from_secs(solve.timeout))
        .solve();
    let elapsed = start.elapsed();

    println!("Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    println!("Assignments: {}", result.assignments());
    println!(
        "Solution: {}",
        if result.is_solved() { "Yes" } else { "No" }
    );
    println!(
        "Timeout: {}",
        if matches!(result, SolveResult::TimedOut { .. }) {
            "Yes"
        } else {
            "No"
        }
    );

    if let Some(path) = options.output() {
        let contents = match &result {
            SolveResult::Solved(data) => data.board.to_string(),
            SolveResult::Unsolvable { .. } => "None".to_string(),
            SolveResult::TimedOut { .. } => "Timeout".to_string(),
        };
        fs::write(path, contents)?;
        println!("Saved result to {}", path.display());
    }
    if options.print() {
        if let Some(data) = result.solved() {
            print!("{}", data.board.to_pretty_string());
        }
    }
    Ok(())
}
