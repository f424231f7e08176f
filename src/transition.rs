//! Markov transition model over board tiles.

use ndarray::{Array2, ArrayView1};
use tracing::debug;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::util::{Face, SnadderMap, Tile};
use crate::ROW_SUM_TOLERANCE;

/// Dense `(size + 1) x (size + 1)` one-roll transition matrix.
///
/// Entry `(s, t)` is the probability that a player on tile `s` ends the
/// roll on tile `t`. Rows of non-absorbing tiles sum to 1.0; the row of
/// the win tile is all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTable {
    size: Tile,
    probs: Array2<f64>,
}

impl TransitionTable {
    /// Builds the transition table of a board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if an outcome probability cannot be
    /// represented as `f64`.
    #[tracing::instrument(skip_all, fields(size = board.size(), dice_size = board.dice_size()))]
    pub fn from_board(board: &Board) -> Result<Self> {
        let size = board.size();
        let mut probs = Array2::<f64>::zeros((size + 1, size + 1));

        for source in 0..size {
            for (dest, p) in board.roll_outcomes(source).probabilities()? {
                probs[[source, dest]] += p;
            }
        }

        debug!(states = size + 1, "transition table built");
        Ok(Self { size, probs })
    }

    /// Number of playable tiles; the table has `size + 1` rows.
    pub fn size(&self) -> Tile {
        self.size
    }

    /// Probability of moving from `from` to `to` in one roll.
    ///
    /// # Panics
    ///
    /// Panics if either tile is greater than `size`.
    pub fn prob(&self, from: Tile, to: Tile) -> f64 {
        self.probs[[from, to]]
    }

    /// Outgoing probabilities of `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is greater than `size`.
    pub fn row(&self, from: Tile) -> ArrayView1<'_, f64> {
        self.probs.row(from)
    }

    pub fn row_sum(&self, from: Tile) -> f64 {
        self.row(from).sum()
    }

    pub fn probs(&self) -> &Array2<f64> {
        &self.probs
    }

    /// Checks that the table is a valid absorbing chain.
    ///
    /// Every entry must be finite and in `[0, 1]`, every non-absorbing row
    /// must sum to 1.0 within [`ROW_SUM_TOLERANCE`], and the absorbing row
    /// must be empty.
    pub fn validate(&self) -> Result<()> {
        for ((i, j), &p) in self.probs.indexed_iter() {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidTable {
                    reason: format!("probs[{i}][{j}] = {p} is not a probability"),
                });
            }
        }
        for i in 0..self.size {
            let sum = self.row_sum(i);
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(Error::InvalidTable {
                    reason: format!("row {i} sums to {sum}, expected 1.0"),
                });
            }
        }
        let last = self.row_sum(self.size);
        if last != 0.0 {
            return Err(Error::InvalidTable {
                reason: format!("absorbing row sums to {last}, expected 0.0"),
            });
        }
        Ok(())
    }
}

/// Builds the transition table for a board described by plain parameters.
///
/// # Errors
///
/// Returns any configuration error raised by [`Board::builder`], such as
/// [`Error::SourceOutOfRange`] for a snadder outside the board.
pub fn build_transitions(
    size: Tile,
    snadders: &SnadderMap,
    dice_size: Face,
    transitive: bool,
    exact: bool,
) -> Result<TransitionTable> {
    let board = Board::builder(size)
        .snadders(snadders.clone())
        .dice_size(dice_size)
        .transitive(transitive)
        .exact(exact)
        .build()?;
    TransitionTable::from_board(&board)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn small_board_matches_hand_computation() {
        let t = build_transitions(3, &SnadderMap::from([(1, 2)]), 2, false, false).unwrap();
        assert_eq!(t.prob(0, 2), 1.0);
        assert_eq!(t.prob(0, 1), 0.0);
        assert_eq!(t.prob(1, 2), 0.5);
        assert_eq!(t.prob(1, 3), 0.5);
        assert_eq!(t.prob(2, 3), 1.0);
        assert_eq!(t.row_sum(3), 0.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn exact_landing_keeps_mass_on_source() {
        let t = build_transitions(4, &SnadderMap::new(), 6, false, true).unwrap();
        assert_abs_diff_eq!(t.prob(3, 3), 5.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.prob(3, 4), 1.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.prob(0, 0), 2.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn transitive_chain_lands_on_final_tile() {
        let snadders = SnadderMap::from([(1, 2), (2, 3)]);
        let chained = build_transitions(4, &snadders, 1, true, false).unwrap();
        assert_eq!(chained.prob(0, 3), 1.0);

        let single = build_transitions(4, &snadders, 1, false, false).unwrap();
        assert_eq!(single.prob(0, 2), 1.0);
        assert_eq!(single.prob(1, 3), 1.0);
    }

    #[test]
    fn out_of_range_snadder_fails() {
        let result = build_transitions(3, &SnadderMap::from([(5, 1)]), 6, false, false);
        assert_eq!(result, Err(Error::SourceOutOfRange { tile: 5, size: 3 }));
    }

    #[test]
    fn validate_reports_bad_row() {
        let mut t = build_transitions(2, &SnadderMap::new(), 2, false, false).unwrap();
        t.probs[[0, 1]] = 0.25;
        assert!(matches!(
            t.validate(),
            Err(Error::InvalidTable { reason }) if reason.contains("row 0")
        ));
    }
}
