//! Board configuration and per-roll movement rules.

use std::collections::BTreeSet;
use std::fmt;

use bon::bon;
use itertools::Itertools;
use tracing::debug;

use crate::die::Die;
use crate::error::{Error, Result};
use crate::util::{Face, SnadderMap, Tile};
use crate::DEFAULT_DICE_SIZE;

/// A validated snakes-and-ladders board.
///
/// Tiles run from `0` (start) to `size` (win). Snadders relocate a player
/// who lands on their source tile. Boards are immutable once built; use
/// [`Board::builder`] to create one.
///
/// # Example
///
/// ```
/// use snadder::{Board, SnadderMap};
///
/// let board = Board::builder(3)
///     .snadders(SnadderMap::from([(1, 2)]))
///     .dice_size(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(board.resolve(0, 1), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: Tile,
    snadders: SnadderMap,
    dice_size: Face,
    transitive: bool,
    exact: bool,
}

#[bon]
impl Board {
    /// Validates and builds a board.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyBoard`] if `size` is zero.
    /// - [`Error::NoFaces`] if `dice_size` is zero.
    /// - [`Error::SourceOutOfRange`] if a snadder starts outside `1..size`.
    /// - [`Error::DestinationOutOfRange`] if a snadder ends past `size`.
    /// - [`Error::SelfLoop`] if a snadder points to its own tile.
    /// - [`Error::SnadderCycle`] if `transitive` is set and snadders chain
    ///   into a loop.
    #[builder]
    pub fn new(
        #[builder(start_fn)] size: Tile,
        #[builder(default, into)] snadders: SnadderMap,
        #[builder(default = DEFAULT_DICE_SIZE)] dice_size: Face,
        #[builder(default)] transitive: bool,
        #[builder(default)] exact: bool,
    ) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyBoard);
        }
        if dice_size == 0 {
            return Err(Error::NoFaces);
        }
        for (&from, &to) in &snadders {
            if from == 0 || from >= size {
                return Err(Error::SourceOutOfRange { tile: from, size });
            }
            if to > size {
                return Err(Error::DestinationOutOfRange { tile: to, size });
            }
            if from == to {
                return Err(Error::SelfLoop { tile: from });
            }
        }
        if transitive {
            if let Some(tile) = find_cycle(&snadders) {
                return Err(Error::SnadderCycle { tile });
            }
        }

        debug!(
            size,
            dice_size,
            snadders = snadders.len(),
            transitive,
            exact,
            "board configured"
        );

        Ok(Self {
            size,
            snadders,
            dice_size,
            transitive,
            exact,
        })
    }
}

impl Board {
    pub fn size(&self) -> Tile {
        self.size
    }

    pub fn snadders(&self) -> &SnadderMap {
        &self.snadders
    }

    pub fn dice_size(&self) -> Face {
        self.dice_size
    }

    pub fn is_transitive(&self) -> bool {
        self.transitive
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Returns the tile a player on `source` ends up on after rolling `roll`.
    ///
    /// Snadders are applied first (once, or until none applies when the
    /// board is transitive), then the overshoot policy: past the win tile
    /// the player either wins or, with exact landing, stays on `source`.
    pub fn resolve(&self, source: Tile, roll: Face) -> Tile {
        let mut tile = source + roll as Tile;

        if self.transitive {
            // Terminates: cycles are rejected when the board is built.
            while let Some(&next) = self.snadders.get(&tile) {
                tile = next;
            }
        } else if let Some(&next) = self.snadders.get(&tile) {
            tile = next;
        }

        if tile > self.size {
            tile = if self.exact { source } else { self.size };
        }
        tile
    }

    /// Distribution of the tile reached from `source` in one roll.
    pub fn roll_outcomes(&self, source: Tile) -> Die<Tile> {
        Die::uniform(self.dice_size).map(|roll| self.resolve(source, roll))
    }

    /// Expected number of rolls from the start tile to the win tile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Singular`] if some tile can never reach the end.
    pub fn expected_rolls(&self) -> Result<f64> {
        crate::solve_board(self).map(|e| e.start())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "size={} d{} [{}]",
            self.size,
            self.dice_size,
            self.snadders
                .iter()
                .map(|(from, to)| format!("{from}->{to}"))
                .join(", ")
        )?;
        if self.transitive {
            f.write_str(" transitive")?;
        }
        if self.exact {
            f.write_str(" exact")?;
        }
        Ok(())
    }
}

/// Returns a tile on the first snadder cycle found, if any.
fn find_cycle(snadders: &SnadderMap) -> Option<Tile> {
    for &start in snadders.keys() {
        let mut seen = BTreeSet::new();
        let mut tile = start;
        while let Some(&next) = snadders.get(&tile) {
            if !seen.insert(tile) {
                return Some(tile);
            }
            tile = next;
        }
    }
    None
}
