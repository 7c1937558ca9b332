//! # `puzzle_solver`
//!
//! `puzzle_solver` is a configurable command-line 8-puzzle solver. It
//! searches for a shortest sequence of blank moves transforming a start
//! board into a goal board, using either breadth-first search or A* with
//! an admissible heuristic.
//!
//! ## Board input
//!
//! Boards are given as 9 integers in row-major order, whitespace- or
//! comma-separated, with 0 for the blank:
//!
//! ```sh
//! puzzle_solver "1 2 3 4 0 6 7 5 8"
//! ```
//!
//! ## Subcommands
//!
//! 1.  **`bfs`**: Uninformed breadth-first search. Prints the move count
//!     and the move sequence joined by arrows.
//!     ```sh
//!     puzzle_solver bfs --start "1 2 3 4 0 6 7 5 8"
//!     ```
//!
//! 2.  **`astar`**: A* search. Prints each step's board with its depth,
//!     then the total moves and nodes expanded.
//!     ```sh
//!     puzzle_solver astar --start "1 2 3 4 0 6 7 5 8" --heuristic manhattan
//!     ```
//!
//! 3.  **`compare`**: Runs A* under both heuristics and reports the
//!     expansion counts side by side.
//!     ```sh
//!     puzzle_solver compare --start "1 2 3 4 0 6 7 5 8"
//!     ```
//!
//! 4.  **`random`**: Scrambles the goal with a random walk and solves
//!     the result.
//!     ```sh
//!     puzzle_solver random --moves 25
//!     ```
//!
//! ### Common options
//!
//! -   `--goal <BOARD>`: Goal board (default: `1 2 3 4 5 6 7 8 0`).
//! -   `--heuristic <NAME>`: `manhattan` or `misplaced` (default: `manhattan`).
//! -   `-q, --quiet`: Suppress per-step board printouts.
//! -   `-s, --stats`: Print timing and memory statistics (default: `true`).
//!
//! A board that fails validation (wrong length, missing blank, duplicate
//! or out-of-range values) is rejected before any search starts. If a
//! board is given without a subcommand, it is solved with A* under the
//! Manhattan-distance heuristic.

use crate::search::astar::AStar;
use crate::search::bfs::Bfs;
use crate::search::board::Board;
use crate::search::heuristic::{Heuristic, ManhattanDistance, MisplacedTiles};
use crate::search::solver::{Search, SearchError, Solution};
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

pub mod search;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the puzzle solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "puzzle_solver", version, about = "A configurable 8-puzzle solver")]
struct Cli {
    /// An optional global board argument. If provided without a
    /// subcommand, it's solved with A* under the default heuristic.
    #[arg(global = true)]
    start: Option<String>,

    /// Specifies the subcommand to execute (e.g. `bfs`, `astar`, `compare`, `random`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands for the puzzle solver.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve with uninformed breadth-first search.
    Bfs {
        /// The start board: 9 integers in row-major order, 0 for the blank.
        #[arg(long)]
        start: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve with A* under an admissible heuristic.
    Astar {
        /// The start board: 9 integers in row-major order, 0 for the blank.
        #[arg(long)]
        start: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Run A* under both heuristics and compare expansion counts.
    Compare {
        /// The start board: 9 integers in row-major order, 0 for the blank.
        #[arg(long)]
        start: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Scramble the goal with a random walk, then solve the result.
    Random {
        /// Length of the scrambling random walk.
        #[arg(short, long, default_value_t = 25)]
        moves: usize,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
struct CommonOptions {
    /// The goal board. Defaults to the canonical goal: tiles 1..=8 in
    /// order with the blank last.
    #[arg(long)]
    goal: Option<String>,

    /// Specifies the heuristic guiding A*.
    /// Supported values are "manhattan" (Manhattan distance) and
    /// "misplaced" (misplaced-tile count).
    #[arg(long, default_value_t = String::from("manhattan"))]
    heuristic: String,

    /// Suppress the per-step board printouts of the A* report.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Enable printing of performance statistics after solving.
    #[arg(short, long, default_value_t = true)]
    stats: bool,
}

/// Main entry point of the puzzle solver application.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a board is provided globally without a
    // subcommand. This defaults to A* with the configured heuristic.
    if let Some(start) = cli.start.clone() {
        if cli.command.is_none() {
            let start = parse_board_or_exit(&start);
            run_astar(start, &cli.common);
            return;
        }
    }

    match cli.command {
        Some(Commands::Bfs { start, common }) => {
            let start = parse_board_or_exit(&start);
            run_bfs(start, &common);
        }
        Some(Commands::Astar { start, common }) => {
            let start = parse_board_or_exit(&start);
            run_astar(start, &common);
        }
        Some(Commands::Compare { start, common }) => {
            let start = parse_board_or_exit(&start);
            run_compare(start, &common);
        }
        Some(Commands::Random { moves, common }) => {
            let start = Board::scrambled(moves);
            println!("Scrambled board ({moves} random moves):\n{start}");
            run_astar(start, &common);
        }
        None => {
            // This case is reached if no subcommand was provided and
            // `cli.start` was also None.
            if cli.start.is_none() {
                eprintln!("No command provided. Use --help for more information.");
                std::process::exit(1);
            }
            // If `cli.start` was Some, it was handled by the first block.
        }
    }
}

/// Parses a board argument, printing the validation error and exiting
/// with a non-zero status if it's malformed.
fn parse_board_or_exit(input: &str) -> Board {
    input.parse::<Board>().unwrap_or_else(|e| {
        eprintln!("Invalid board '{input}': {e}");
        std::process::exit(1);
    })
}

/// Resolves the goal board from the common options, defaulting to the
/// canonical goal.
fn resolve_goal(common: &CommonOptions) -> Board {
    common
        .goal
        .as_deref()
        .map_or_else(Board::goal, parse_board_or_exit)
}

/// Runs breadth-first search and prints the report: total move count
/// and the arrow-joined move sequence.
fn run_bfs(start: Board, common: &CommonOptions) {
    let goal = resolve_goal(common);

    if !start.is_solvable_to(&goal) {
        eprintln!(
            "warning: this instance is unsolvable; breadth-first search will \
             sweep the entire reachable component before reporting failure"
        );
    }

    let time = std::time::Instant::now();
    let result = Bfs::new(start, goal).search();
    let elapsed = time.elapsed();

    match result {
        Ok(solution) => {
            println!("Solution found in {} moves:", solution.move_count());
            println!("{}", solution.moves().map(|mv| mv.to_string()).join(" -> "));

            if common.stats {
                print_stats(elapsed, solution.expanded);
            }
        }
        Err(e) => report_failure(&e, elapsed, common.stats),
    }
}

/// Runs A* under the configured heuristic and prints the step-by-step
/// report: each board with its depth, then totals.
fn run_astar(start: Board, common: &CommonOptions) {
    let goal = resolve_goal(common);

    match common.heuristic.as_str() {
        "manhattan" => solve_informed(start, goal, ManhattanDistance, common),
        "misplaced" => solve_informed(start, goal, MisplacedTiles, common),
        other => {
            eprintln!("Unknown heuristic '{other}'. Use 'manhattan' or 'misplaced'.");
            std::process::exit(1);
        }
    }
}

/// Solves with A* under `heuristic` and reports.
fn solve_informed<H: Heuristic>(start: Board, goal: Board, heuristic: H, common: &CommonOptions) {
    println!("A* ({})\n", heuristic.name());

    let time = std::time::Instant::now();
    let result = AStar::new(start, goal, heuristic).search();
    let elapsed = time.elapsed();

    match result {
        Ok(solution) => {
            if !common.quiet {
                print_steps(&solution);
            }
            println!("Total Moves: {}", solution.move_count());
            println!("Nodes Expanded: {}", solution.expanded);

            if common.stats {
                print_stats(elapsed, solution.expanded);
            }
        }
        Err(e) => report_failure(&e, elapsed, common.stats),
    }
}

/// Runs A* under both heuristics and reports expansion counts side by
/// side, demonstrating the dominance of Manhattan distance.
fn run_compare(start: Board, common: &CommonOptions) {
    let goal = resolve_goal(common);

    let time = std::time::Instant::now();
    let misplaced = AStar::new(start, goal, MisplacedTiles).search();
    let manhattan = AStar::new(start, goal, ManhattanDistance).search();
    let elapsed = time.elapsed();

    let describe = |result: &Result<Solution, SearchError>| match result {
        Ok(solution) => format!(
            "{} moves, {} nodes expanded",
            solution.move_count(),
            solution.expanded
        ),
        Err(e) => e.to_string(),
    };

    println!("A* (misplaced tiles):    {}", describe(&misplaced));
    println!("A* (manhattan distance): {}", describe(&manhattan));

    if common.stats {
        let expanded = misplaced.as_ref().map_or_else(SearchError::expanded, |s| s.expanded)
            + manhattan.as_ref().map_or_else(SearchError::expanded, |s| s.expanded);
        print_stats(elapsed, expanded);
    }
}

/// Prints each step of a solution: a `Start` or `Move <dir>` label with
/// the depth, then the board.
fn print_steps(solution: &Solution) {
    println!("Steps:\n");
    for step in &solution.steps {
        match step.mv {
            None => println!("Start | Depth {}", step.depth),
            Some(mv) => println!("Move {mv} | Depth {}", step.depth),
        }
        println!("{}", step.board);
    }
}

/// Reports a failed search on stderr, with stats if requested.
fn report_failure(error: &SearchError, elapsed: Duration, with_stats: bool) {
    eprintln!("No solution: {error}");
    if with_stats {
        print_stats(elapsed, error.expanded());
    }
    std::process::exit(1);
}

/// Prints timing, expansion, and memory statistics.
///
/// Memory figures come from jemalloc; the epoch advance refreshes its
/// cached statistics so the numbers reflect the solve that just ran.
fn print_stats(elapsed: Duration, expanded: usize) {
    println!("\nc Statistics:");
    println!("c Solve time: {elapsed:?}");
    println!("c Nodes expanded: {expanded}");

    if epoch::advance().is_ok() {
        let allocated = stats::allocated::mib()
            .and_then(|m| m.read())
            .unwrap_or(0);
        let resident = stats::resident::mib().and_then(|m| m.read()).unwrap_or(0);
        let allocated_mib = allocated as f64 / (1024.0 * 1024.0);
        let resident_mib = resident as f64 / (1024.0 * 1024.0);
        println!("c Memory allocated: {allocated_mib:.2} MiB");
        println!("c Memory resident: {resident_mib:.2} MiB");
    }
}
