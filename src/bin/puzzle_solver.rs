use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle_solver::puzzle::EightPuzzleState;
use eight_puzzle_solver::solver::{solve, StrategyKind};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Strategy code (dfs, bfs, bds, ucs, aso, asm, rbfs) or menu number (1-6).
    /// Asked for interactively when omitted.
    #[clap(short, long)]
    strategy: Option<String>,

    /// The nine tiles of the starting board, row by row, 0 for the hole.
    /// Asked for interactively when omitted.
    tiles: Vec<String>,
}

const MENU: &str = "Which Algorithm ?\n\
                    1 - dfs\n\
                    2 - bfs\n\
                    3 - bds\n\
                    4 - ucs\n\
                    5 - aso\n\
                    6 - rbfs\n";

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    println!("{}", message);
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let board_text = if args.tiles.is_empty() {
        prompt(
            &mut input,
            "What is Initial State (example : 0 1 2 3 4 5 6 7 8) : \n",
        )?
    } else {
        args.tiles.join(" ")
    };
    let start: EightPuzzleState = board_text
        .parse()
        .with_context(|| format!("Invalid board: '{}'", board_text.trim()))?;

    let strategy_text = match args.strategy {
        Some(strategy) => strategy,
        None => prompt(&mut input, MENU)?,
    };
    let kind: StrategyKind = strategy_text.parse()?;

    let outcome = solve(&start, kind)?;
    println!("{}", outcome);
    eprintln!("Expanded {} nodes.", outcome.expanded());
    Ok(())
}
