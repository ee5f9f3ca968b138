//! Jump Point Search on static 8-connected grids.
//!
//! Build a [`Board`] once from wall flags, then search it with a
//! [`PathFinder`] (reusable, step-able) or the one-shot [`find_path`].
//! Paths come back as the world positions of their jump points, start and
//! goal included. Every move, diagonal or not, costs the Manhattan distance
//! between node positions.
//!
//! ```
//! use jps_pathfinder::{find_path, Board, Position};
//!
//! let board = Board::from_ascii(
//!     "
//!     ..#..
//!     ..#..
//!     .....
//!     ",
//! )
//! .unwrap();
//!
//! let path = find_path(&board, Position::new(0.0, 0.0), Position::new(4.0, 0.0))
//!     .unwrap()
//!     .expect("reachable");
//! assert_eq!(path.first(), Some(&Position::new(0.0, 0.0)));
//! assert_eq!(path.last(), Some(&Position::new(4.0, 0.0)));
//! ```

mod modules;

pub use modules::board::{Board, Layout};
pub use modules::config::SearchConfig;
pub use modules::direction::{Direction, ALL as ALL_DIRECTIONS};
pub use modules::error::{PathfinderError, Result};
pub use modules::jump::Scanner;
pub use modules::node::{Coordinate, Node, NodeId};
pub use modules::open_list::OpenList;
pub use modules::path_finder::{find_path, PathFinder, SearchStats, Step};
pub use modules::position::Position;
