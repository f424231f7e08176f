//! Expected number of dice rolls to finish a snakes-and-ladders board.
//!
//! A [`Board`] is turned into a one-roll [`TransitionTable`], which is
//! rearranged into a [`LinearSystem`] whose solution gives the expected
//! remaining rolls from every tile.
//!
//! ```
//! use snadder::{solve, SnadderMap};
//!
//! let rolls = solve(3, &SnadderMap::from([(1, 2)]), 2).unwrap();
//! assert!((rolls - 2.0).abs() < 1e-9);
//! ```

mod board;
pub mod defs;
mod die;
mod error;
mod lu;
mod system;
mod transition;
mod util;

pub use board::Board;
pub use die::Die;
pub use error::{Error, Result};
pub use system::{assemble_system, solve, solve_board, ExpectedRolls, LinearSystem};
pub use transition::{build_transitions, TransitionTable};
pub use util::{Face, SnadderMap, Tile};

pub const DEFAULT_DICE_SIZE: Face = 6;
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;
