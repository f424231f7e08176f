//! Integration tests for Error variants.

use snadder::{build_transitions, solve, Board, Error, SnadderMap};

#[test]
fn error_source_out_of_range() {
    let result = solve(3, &SnadderMap::from([(7, 1)]), 6);
    assert_eq!(result, Err(Error::SourceOutOfRange { tile: 7, size: 3 }));
}

#[test]
fn error_destination_out_of_range() {
    let result = build_transitions(3, &SnadderMap::from([(1, 9)]), 6, false, false);
    assert!(matches!(
        result,
        Err(Error::DestinationOutOfRange { tile: 9, size: 3 })
    ));
}

#[test]
fn error_two_cycle_with_transitive_resolution() {
    let snadders = SnadderMap::from([(2, 5), (5, 2)]);
    let result = build_transitions(8, &snadders, 6, true, false);
    assert!(matches!(result, Err(Error::SnadderCycle { .. })));

    let board = Board::builder(8).snadders(snadders).transitive(true).build();
    assert!(matches!(board, Err(Error::SnadderCycle { .. })));
}

#[test]
fn error_singular_when_start_is_trapped() {
    // With a one-faced dice the player bounces between 0 and 1 forever.
    let result = solve(3, &SnadderMap::from([(1, 0)]), 1);
    assert_eq!(result, Err(Error::Singular { column: 0 }));
}

#[test]
fn error_singular_when_middle_tile_is_trapped() {
    // Tile 1 rolls onto the snake on tile 2 and slides back every time.
    let board = Board::builder(3)
        .snadders(SnadderMap::from([(2, 1)]))
        .dice_size(1)
        .exact(true)
        .build()
        .unwrap();
    assert!(matches!(
        board.expected_rolls(),
        Err(Error::Singular { .. })
    ));
}

#[test]
fn error_empty_board() {
    assert_eq!(solve(0, &SnadderMap::new(), 6), Err(Error::EmptyBoard));
}

#[test]
fn error_no_faces() {
    assert_eq!(solve(5, &SnadderMap::new(), 0), Err(Error::NoFaces));
}
