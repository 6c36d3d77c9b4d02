//! Terminal demo of the three search algorithms.
//!
//! Run: cargo run --bin pathviz -- [dijkstra|bidijkstra|astar|all] [BOARD_FILE|random[:SEED]]

use pathviz_demos::{Args, BoardSource, build_board, render, summary};
use pathviz_search::Solver;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(std::env::args().skip(1))?;
    let text = match &args.source {
        BoardSource::File(path) => Some(std::fs::read_to_string(path)?),
        _ => None,
    };
    let mut board = build_board(&args.source, text.as_deref())?;

    let mut solver = Solver::new();
    for algorithm in args.algorithms {
        let solution = solver.solve(&mut board, algorithm)?;
        println!("{}", summary(algorithm, &solution));
        print!("{}", render(&board, &solution));
        println!();
    }
    Ok(())
}
