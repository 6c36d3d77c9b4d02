//! Shortest-path search on a [`Board`](pathviz_core::Board).
//!
//! Three algorithms share one cell model and one neighbor resolver:
//!
//! - **Dijkstra** ([`Solver::dijkstra`])
//! - **A\*** with the Manhattan heuristic ([`Solver::astar`])
//! - **Bidirectional Dijkstra** ([`Solver::bidirectional`])
//!
//! Every search resets the board's search-scoped fields, mutates them while it
//! runs and returns a [`Solution`]: the cells in the order they were
//! extracted, and the path from start to finish (both included, empty when
//! the finish cannot be reached).
//!
//! Dijkstra and A* are the same engine ([`Solver::unidirectional`])
//! parameterized by a [`Priority`].

mod algorithm;
mod bidirectional;
mod frontier;
mod neighbors;
pub mod path;
mod priority;
mod session;
mod solution;
mod solver;
mod unidirectional;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use neighbors::Neighbors;
pub use priority::{Astar, Dijkstra, Key, Priority};
pub use session::Session;
pub use solution::Solution;
pub use solver::Solver;
