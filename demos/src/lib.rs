//! Shared helpers for the command-line demo: board construction, argument
//! parsing and text rendering of a [`Solution`].

use std::collections::HashSet;
use std::fmt;
use std::fmt::Write as _;

use pathviz_core::{Board, BoardConfig, BoardError, Pos};
use pathviz_search::{Algorithm, ParseAlgorithmError, Solution};
use rand::SeedableRng;

const VISITED: char = 'o';
const PATH: char = '*';
const RANDOM: &str = "random";
const DEFAULT_SEED: u64 = 42;
const DEFAULT_PERCENT: u32 = 30;

/// Where the demo board comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    /// The default board with a wall across most of the middle column.
    Default,
    /// The default board with randomly scattered walls.
    Random { seed: u64, percent: u32 },
    /// An ASCII board file.
    File(String),
}

/// Parsed command line: `pathviz [ALGORITHM|all] [BOARD_FILE|random[:SEED]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub algorithms: Vec<Algorithm>,
    pub source: BoardSource,
}

/// Bad command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// The first argument names no algorithm.
    Algorithm(ParseAlgorithmError),
    /// The text after `random:` is not a seed.
    Seed(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(e) => write!(f, "{e}"),
            Self::Seed(s) => write!(f, "invalid random seed \u{201c}{s}\u{201d}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ParseAlgorithmError> for ArgsError {
    fn from(e: ParseAlgorithmError) -> Self {
        Self::Algorithm(e)
    }
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ArgsError> {
        let mut args = args.into_iter();
        let algorithms = match args.next() {
            None => Algorithm::ALL.to_vec(),
            Some(a) if a == "all" => Algorithm::ALL.to_vec(),
            Some(a) => vec![a.parse()?],
        };
        let source = match args.next() {
            None => BoardSource::Default,
            Some(s) => board_source(s)?,
        };
        Ok(Self { algorithms, source })
    }
}

/// `random`, `random:SEED`, or anything else as a file name.
fn board_source(s: String) -> Result<BoardSource, ArgsError> {
    let seed = if s == RANDOM {
        DEFAULT_SEED
    } else if let Some(seed) = s.strip_prefix(RANDOM).and_then(|r| r.strip_prefix(':')) {
        seed.parse().map_err(|_| ArgsError::Seed(seed.to_string()))?
    } else {
        return Ok(BoardSource::File(s));
    };
    Ok(BoardSource::Random {
        seed,
        percent: DEFAULT_PERCENT,
    })
}

/// Build the board described by `source`. File contents are passed in so
/// that I/O stays with the caller.
pub fn build_board(source: &BoardSource, file_text: Option<&str>) -> Result<Board, BoardError> {
    match source {
        BoardSource::Default => {
            let mut board = Board::new(BoardConfig::default())?;
            let col = board.cols() / 2;
            for row in 2..board.rows() {
                board.set_wall(Pos::new(row, col), true)?;
            }
            Ok(board)
        }
        BoardSource::Random { seed, percent } => {
            let mut board = Board::new(BoardConfig::default())?;
            let mut rng = rand::rngs::StdRng::seed_from_u64(*seed);
            board.scatter_walls(&mut rng, *percent);
            Ok(board)
        }
        BoardSource::File(_) => Board::parse(file_text.unwrap_or_default()),
    }
}

/// Render `board` with visited cells as `o` and path cells as `*`.
pub fn render(board: &Board, solution: &Solution) -> String {
    let visited: HashSet<Pos> = solution.visited.iter().copied().collect();
    let path: HashSet<Pos> = solution.path.iter().copied().collect();
    let plain = board.to_string();
    let mut out = String::with_capacity(plain.len());
    for (row, line) in plain.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let p = Pos::new(row as i32, col as i32);
            let ch = if ch != '.' {
                ch
            } else if path.contains(&p) {
                PATH
            } else if visited.contains(&p) {
                VISITED
            } else {
                ch
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One-line summary of a solve.
pub fn summary(algorithm: Algorithm, solution: &Solution) -> String {
    let mut s = String::new();
    let _ = write!(s, "{algorithm}: {} cells visited, ", solution.visited.len());
    match solution.cost() {
        Some(cost) => {
            let _ = write!(s, "path of {cost} steps");
        }
        None => s.push_str("no path"),
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_search::Solver;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_defaults_to_all() {
        let a = Args::parse(args(&[])).unwrap();
        assert_eq!(a.algorithms, Algorithm::ALL.to_vec());
        assert_eq!(a.source, BoardSource::Default);
    }

    #[test]
    fn parse_algorithm_and_source() {
        let a = Args::parse(args(&["astar", "random:7"])).unwrap();
        assert_eq!(a.algorithms, vec![Algorithm::Astar]);
        assert_eq!(a.source, BoardSource::Random { seed: 7, percent: 30 });

        let a = Args::parse(args(&["all", "maze.txt"])).unwrap();
        assert_eq!(a.source, BoardSource::File("maze.txt".into()));
        assert!(matches!(
            Args::parse(args(&["greedy"])),
            Err(ArgsError::Algorithm(_))
        ));
    }

    #[test]
    fn bare_random_uses_default_seed() {
        let a = Args::parse(args(&["dijkstra", "random"])).unwrap();
        assert_eq!(a.source, BoardSource::Random { seed: 42, percent: 30 });
    }

    #[test]
    fn file_named_like_random_is_a_file() {
        for name in ["random_maze.txt", "randomly", "random.txt"] {
            let a = Args::parse(args(&["all", name])).unwrap();
            assert_eq!(a.source, BoardSource::File(name.into()));
        }
    }

    #[test]
    fn bad_seed_is_an_error() {
        assert_eq!(
            Args::parse(args(&["all", "random:abc"])),
            Err(ArgsError::Seed("abc".into()))
        );
        assert_eq!(
            Args::parse(args(&["all", "random:"])),
            Err(ArgsError::Seed(String::new()))
        );
        let e = Args::parse(args(&["all", "random:-1"])).unwrap_err();
        assert_eq!(e.to_string(), "invalid random seed \u{201c}-1\u{201d}");
    }

    #[test]
    fn default_board_has_gap_at_top() {
        let board = build_board(&BoardSource::Default, None).unwrap();
        assert!(board.is_open(Pos::new(0, 25)));
        assert!(!board.is_open(Pos::new(2, 25)));
    }

    #[test]
    fn render_marks_path_and_visits() {
        let mut board = Board::parse("S..\n...\n..F").unwrap();
        let s = Solver::new().solve(&mut board, Algorithm::Astar).unwrap();
        let text = render(&board, &s);
        assert_eq!(text, "S**\n..*\n..F\n");
        assert_eq!(summary(Algorithm::Astar, &s), "A*: 4 cells visited, path of 4 steps");
    }
}
