use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::ArgMatches;

const DEFAULT_SIZE: &str = "9";
const DEFAULT_BLOCK_ROWS: &str = "3";
const DEFAULT_BLOCK_COLS: &str = "3";
const DEFAULT_CLUES: &str = "28";
const DEFAULT_SOLVE_TIMEOUT: &str = "60";

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    output: Option<PathBuf>,
    print: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if let Some(path) = matches.value_of("input") {
            Source::File(Solve {
                input: path.into(),
                forward_checking: matches.is_present("forward_checking"),
                timeout: required_arg(matches, "timeout", DEFAULT_SOLVE_TIMEOUT)?,
            })
        } else {
            Source::Generate(Generate {
                size: required_arg(matches, "size", DEFAULT_SIZE)?,
                block_rows: required_arg(matches, "block_rows", DEFAULT_BLOCK_ROWS)?,
                block_cols: required_arg(matches, "block_cols", DEFAULT_BLOCK_COLS)?,
                clues: required_arg(matches, "clues", DEFAULT_CLUES)?,
                timeout: optional_arg(matches, "timeout")?,
                seed: optional_arg(matches, "seed")?,
            })
        };
        Ok(Self {
            source,
            output: matches.value_of("output").map(PathBuf::from),
            print: matches.is_present("print"),
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn print(&self) -> bool {
        self.print
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    File(Solve),
    Generate(Generate),
}

#[derive(Clone)]
pub(crate) struct Generate {
    pub size: usize,
    pub block_rows: usize,
    pub block_cols: usize,
    pub clues: usize,
    pub timeout: Option<u64>,
    pub seed: Option<u64>,
}

#[derive(Clone)]
pub(crate) struct Solve {
    pub input: PathBuf,
    pub forward_checking: bool,
    pub timeout: u64,
}

fn required_arg<T: FromStr>(matches: &ArgMatches<'_>, name: &str, default: &str) -> Result<T> {
    let value = matches.value_of(name).unwrap_or(default);
    value
        .parse()
        .map_err(|_| anyhow!("invalid value for --{}: \"{}\"", name, value))
}

fn optional_arg<T: FromStr>(matches: &ArgMatches<'_>, name: &str) -> Result<Option<T>> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("invalid value for --{}: \"{}\"", name, value)),
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, ArgGroup};

    App::new("doku")
        .about("Generate and solve generalized Sudoku puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .group(
            ArgGroup::with_name("source")
                .args(&["generate", "input"])
                .required(true),
        )
        .arg(
            Arg::with_name("generate")
                .short("g")
                .long("generate")
                .help("generate a puzzle")
                .display_order(1),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read and solve a puzzle from a file")
                .display_order(1),
        )
        .arg(
            Arg::with_name("size")
                .short("n")
                .long("size")
                .takes_value(true)
                .requires("generate")
                .help("the width and height of the generated grid"),
        )
        .arg(
            Arg::with_name("block_rows")
                .short("p")
                .long("block-rows")
                .takes_value(true)
                .requires("generate")
                .help("the number of rows in a block"),
        )
        .arg(
            Arg::with_name("block_cols")
                .short("q")
                .long("block-cols")
                .takes_value(true)
                .requires("generate")
                .help("the number of columns in a block"),
        )
        .arg(
            Arg::with_name("clues")
                .short("m")
                .long("clues")
                .takes_value(true)
                .requires("generate")
                .help("the number of pre-filled cells in the generated puzzle"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .requires("generate")
                .help("seed the random number generator for reproducible output"),
        )
        .arg(
            Arg::with_name("forward_checking")
                .short("f")
                .long("forward-checking")
                .requires("input")
                .help("solve with forward checking"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .value_name("SECS")
                .help("wall-clock budget in seconds (solving defaults to 60)"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .help("write the generated puzzle or the solve outcome to a file"),
        )
        .arg(
            Arg::with_name("print")
                .long("print")
                .help("pretty-print the resulting grid to stdout"),
        )
}
