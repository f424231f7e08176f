//! Preset boards.

use std::sync::LazyLock;

use crate::util::{SnadderMap, Tile};
use crate::{Board, Result};

pub const PRESET_SIZE: Tile = 100;

pub static BOARD_ONE: LazyLock<SnadderMap> = LazyLock::new(|| {
    SnadderMap::from([(12, 25), (22, 32), (29, 90), (34, 14), (40, 2), (99, 44)])
});

pub static BOARD_TWO: LazyLock<SnadderMap> = LazyLock::new(|| {
    SnadderMap::from([(13, 50), (24, 10), (28, 88), (78, 59), (81, 93), (92, 22)])
});

pub fn board_one() -> Result<Board> {
    Board::builder(PRESET_SIZE)
        .snadders(BOARD_ONE.clone())
        .build()
}

pub fn board_two() -> Result<Board> {
    Board::builder(PRESET_SIZE)
        .snadders(BOARD_TWO.clone())
        .build()
}

pub fn presets() -> Result<Vec<(&'static str, Board)>> {
    Ok(vec![("one", board_one()?), ("two", board_two()?)])
}
