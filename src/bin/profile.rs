use std::{path::Path, time::Instant};

use prim_maze::{Maze, generate_maze, logging::init_logging};
use tracing::Level;

const SIZE: u16 = u8::MAX as u16;
const DEFAULT_ITERS: usize = 10;

fn main() -> std::io::Result<()> {
    let _guard = init_logging(Path::new("prim-maze-profile.log"), Level::INFO)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERS);

    let mut total = std::time::Duration::ZERO;
    for iter in 0..num_iters {
        let mut maze = Maze::new(SIZE, SIZE);
        let started = Instant::now();
        let steps = generate_maze(&mut maze, None).map_err(std::io::Error::other)?;
        let elapsed = started.elapsed();
        total += elapsed;
        tracing::info!("[profile] iteration {}: {} steps in {:?}", iter, steps, elapsed);
    }

    if num_iters > 0 {
        let average = total / num_iters as u32;
        tracing::info!("[profile] average over {} iterations: {:?}", num_iters, average);
        println!("{num_iters} x {SIZE}x{SIZE}: average {average:?}, total {total:?}");
    }
    Ok(())
}
