//! Error types for the snadder crate.

use crate::util::Tile;

/// Error type for all fallible operations in the snadder crate.
///
/// Configuration problems are reported when a [`Board`](crate::Board) is
/// built; numerical problems are reported when its linear system is solved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Returned when the board has no playable tiles.
    #[error("board size must be at least 1")]
    EmptyBoard,

    /// Returned when the dice has no faces.
    #[error("dice must have at least one face")]
    NoFaces,

    /// Returned when a snadder starts outside `1..size`.
    #[error("snadder source {tile} is out of range for a board of size {size}")]
    SourceOutOfRange {
        /// Offending source tile.
        tile: Tile,
        /// Board size.
        size: Tile,
    },

    /// Returned when a snadder ends outside `0..=size`.
    #[error("snadder destination {tile} is out of range for a board of size {size}")]
    DestinationOutOfRange {
        /// Offending destination tile.
        tile: Tile,
        /// Board size.
        size: Tile,
    },

    /// Returned when a snadder maps a tile onto itself.
    #[error("snadder on tile {tile} points to itself")]
    SelfLoop {
        /// Offending tile.
        tile: Tile,
    },

    /// Returned when transitive resolution would never terminate.
    #[error("snadders form a cycle through tile {tile}")]
    SnadderCycle {
        /// First source tile on the cycle.
        tile: Tile,
    },

    /// Returned when a transition table is not row-stochastic.
    #[error("invalid transition table: {reason}")]
    InvalidTable {
        /// Human-readable description of the problem.
        reason: String,
    },

    /// Returned when a table or system does not match the requested size.
    #[error("dimension mismatch: expected {expected} tiles, got {actual}")]
    DimensionMismatch {
        /// Number of states expected.
        expected: usize,
        /// Number of states found.
        actual: usize,
    },

    /// Returned when the linear system has no unique solution.
    #[error("linear system is singular (no usable pivot in column {column})")]
    Singular {
        /// Column of the first vanishing pivot.
        column: usize,
    },

    /// Returned when the solver produced NaN or infinite values.
    #[error("solution contains non-finite values")]
    NonFiniteSolution,

    /// Returned when an exact probability cannot be represented as `f64`.
    #[error("overflow in probabilities")]
    Overflow,
}

pub type Result<T> = core::result::Result<T, Error>;
