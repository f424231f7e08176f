//! Linear system for expected roll counts.
//!
//! For every non-winning tile `i` the expected number of remaining rolls
//! satisfies `e[i] = 1 + sum_k P(i -> k) * e[k]`. Rearranged, each row reads
//! `(P - I) e = -1`, and the win tile contributes `-e[size] = 0`.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::lu::Lu;
use crate::transition::TransitionTable;
use crate::util::{Face, SnadderMap, Tile};

/// Coefficient matrix and right-hand side of `A e = B`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: Array2<f64>,
    rhs: Array1<f64>,
}

impl LinearSystem {
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    pub fn rhs(&self) -> &Array1<f64> {
        &self.rhs
    }

    /// Solves the system for the expected roll counts of every tile.
    ///
    /// # Errors
    ///
    /// - [`Error::Singular`] if some tile cannot reach the win tile.
    /// - [`Error::NonFiniteSolution`] if the result is not finite.
    pub fn solve(&self) -> Result<ExpectedRolls> {
        let lu = Lu::factor(self.matrix.clone())?;
        let e = lu.solve(&self.rhs)?;
        Ok(ExpectedRolls(e))
    }
}

/// Expected remaining rolls from every tile, indexed by tile.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedRolls(Array1<f64>);

impl ExpectedRolls {
    /// Expected rolls from the start tile.
    pub fn start(&self) -> f64 {
        self.0[0]
    }

    /// Expected rolls from `tile`, or `None` past the win tile.
    pub fn at(&self, tile: Tile) -> Option<f64> {
        self.0.get(tile).copied()
    }

    pub fn as_array(&self) -> &Array1<f64> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds `A = P - I` and `B = -1` (with `B[size] = 0`) from a table.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `size` differs from the size the
/// table was built for.
pub fn assemble_system(table: &TransitionTable, size: Tile) -> Result<LinearSystem> {
    if table.size() != size {
        return Err(Error::DimensionMismatch {
            expected: size + 1,
            actual: table.size() + 1,
        });
    }

    let mut matrix = table.probs().clone();
    matrix.diag_mut().mapv_inplace(|p| p - 1.0);

    let mut rhs = Array1::from_elem(size + 1, -1.0);
    rhs[size] = 0.0;

    Ok(LinearSystem { matrix, rhs })
}

/// Solves a fully configured board.
#[tracing::instrument(skip_all, fields(board = %board))]
pub fn solve_board(board: &Board) -> Result<ExpectedRolls> {
    let table = TransitionTable::from_board(board)?;
    let system = assemble_system(&table, board.size())?;
    let expected = system.solve()?;
    debug!(expected = expected.start(), "solved");
    Ok(expected)
}

/// Expected number of rolls to finish a board where overshooting wins and
/// snadders apply once per roll.
///
/// # Errors
///
/// Returns a configuration error for invalid snadders, or
/// [`Error::Singular`] if some tile can never reach the end.
pub fn solve(size: Tile, snadders: &SnadderMap, dice_size: Face) -> Result<f64> {
    let board = Board::builder(size)
        .snadders(snadders.clone())
        .dice_size(dice_size)
        .build()?;
    solve_board(&board).map(|e| e.start())
}
