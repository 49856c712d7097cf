use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use prim_maze::{GenerateError, Maze, PrimGenerator, logging::init_logging};
use tracing::Level;

/// Generate a perfect maze with randomized Prim's algorithm and print it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cell rows (1-255)
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=255))]
    rows: u16,

    /// Number of cell columns (1-255)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..=255))]
    cols: u16,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the summary line
    #[arg(long)]
    quiet: bool,

    /// File to write logs to
    #[arg(long, default_value = "prim-maze.log")]
    log_file: PathBuf,

    /// Maximum log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

/// Generates the maze described by `args`. Returns the maze and the number of steps taken.
fn generate(args: &Args) -> Result<(Maze, usize), GenerateError> {
    let mut maze = Maze::new(args.rows, args.cols);
    let steps = PrimGenerator::new(&mut maze, args.seed)?.generate()?;
    Ok((maze, steps))
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _guard = match init_logging(&args.log_file, args.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Cannot open log file {}: {}", args.log_file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "[main] generating {}x{} maze with seed {:?}",
        args.rows,
        args.cols,
        args.seed
    );

    let (maze, steps) = match generate(&args) {
        Ok(generated) => generated,
        Err(e) => {
            tracing::error!("[main] generation failed: {}", e);
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if !args.quiet {
        print!("{maze}");
    }
    println!(
        "cells: {}, passages: {}, steps: {}",
        maze.visited_count(),
        maze.passage_count(),
        steps
    );
    tracing::info!("[main] done after {} steps", steps);
    ExitCode::SUCCESS
}
