use anyhow::{ensure, Result};
use clap::Parser;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::puzzle::EightPuzzleState;
use eight_puzzle_solver::state::Cost;
use eight_puzzle_solver::strategies::{
    BestFirst, BreadthFirst, Outcome, RbfsNode, RecursiveBestFirst, Strategy,
};
use log::{debug, warn};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compares the informed strategies on seeded random boards", long_about = None)]
struct Args {
    /// Number of random boards to evaluate.
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board; board i uses seed + i.
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Random slides applied to the goal board to build each start board.
    #[clap(long, default_value_t = 10)]
    scramble: usize,
}

#[derive(Default)]
struct Totals {
    solved: usize,
    expanded: u64,
    moves: usize,
    cost: u64,
}

impl Totals {
    fn record(&mut self, outcome: &Outcome<EightPuzzleState>) {
        self.expanded += outcome.expanded();
        if let Some(solution) = outcome.solution() {
            self.solved += 1;
            self.moves += solution.moves();
            self.cost += u64::from(solution.cost);
        }
    }
}

fn describe(outcome: &Outcome<EightPuzzleState>) -> String {
    match outcome.solution() {
        Some(solution) => format!(
            "Expanded: {:<7} Moves: {:<4} Cost: {}",
            outcome.expanded(),
            solution.moves(),
            solution.cost
        ),
        None => format!("Expanded: {:<7} no solution", outcome.expanded()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.boards > 0, "--boards must be at least 1");

    let strategies: Vec<(String, Box<dyn Strategy<EightPuzzleState>>)> = vec![
        ("BFS".to_string(), Box::new(BreadthFirst)),
        (
            format!("BF/{}", Heuristic::OutOfPlace),
            Box::new(BestFirst::new(Heuristic::OutOfPlace)),
        ),
        (
            format!("BF/{}", Heuristic::Manhattan),
            Box::new(BestFirst::new(Heuristic::Manhattan)),
        ),
    ];
    let rbfs = RecursiveBestFirst::new();
    let rbfs_name = format!("RBFS/{}", rbfs.heuristic());

    let mut totals: Vec<Totals> = (0..=strategies.len()).map(|_| Totals::default()).collect();
    let mut revisions_total = 0usize;

    println!(
        "Starting heuristic evaluation for {} boards ({} slides from the goal)...",
        args.boards, args.scramble
    );

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let start = EightPuzzleState::scrambled(current_seed, args.scramble);

        println!(
            "\nBoard {} (Seed: {}): out-of-place = {}, manhattan = {}",
            board_idx,
            current_seed,
            start.out_of_place(),
            start.manhattan_distance()
        );
        debug!("start board:\n{}", start);

        for ((name, strategy), total) in strategies.iter().zip(totals.iter_mut()) {
            let outcome = strategy.search(&start);
            if !outcome.is_solved() {
                warn!("{} found no solution on board {}", name, board_idx);
            }
            println!("  {:<16} {}", name, describe(&outcome));
            total.record(&outcome);
        }

        let mut revisions = 0usize;
        let outcome = rbfs.search_observed(&start, &mut |_: &RbfsNode<EightPuzzleState>, _: Cost| {
            revisions += 1;
        });
        println!(
            "  {:<16} {} Revisions: {}",
            rbfs_name,
            describe(&outcome),
            revisions
        );
        if let Some(total) = totals.last_mut() {
            total.record(&outcome);
        }
        revisions_total += revisions;
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages ---");

    let names = strategies
        .iter()
        .map(|(name, _)| name.as_str())
        .chain(std::iter::once(rbfs_name.as_str()));
    for (name, total) in names.zip(&totals) {
        let boards = args.boards as f64;
        let solved = total.solved.max(1) as f64;
        println!(
            "{:<16}: solved {}/{}, expanded = {:.1}, moves = {:.2}, cost = {:.1}",
            name,
            total.solved,
            args.boards,
            total.expanded as f64 / boards,
            total.moves as f64 / solved,
            total.cost as f64 / solved
        );
    }
    println!(
        "{:<16}: revisions = {:.1}",
        rbfs_name,
        revisions_total as f64 / args.boards as f64
    );
    Ok(())
}
