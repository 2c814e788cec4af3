//! Tests for board selection, swapping and solution checking

#[cfg(test)]
mod tests {
    use crate::unit::seamed_image;
    use edgestitch::PuzzleError;
    use edgestitch::algorithm::images_equal;
    use edgestitch::algorithm::reconstruct::Strategy;
    use edgestitch::session::{Board, Selection, Verdict};
    use edgestitch::spatial::grid::partition;
    use edgestitch::spatial::tiles::{Tile, TileSet};
    use ndarray::Array2;

    fn source() -> Array2<u32> {
        seamed_image(4, 4, 4, 6, 0)
    }

    fn board() -> Board {
        Board::new(TileSet::new(partition(&source(), 4, 4).unwrap(), 4, 4).unwrap())
    }

    // Tests first click selects and second click swaps
    // Verified by swapping on the first click
    #[test]
    fn test_select_then_swap() {
        let mut board = board();
        let first_tile = board.tiles().tile(2).unwrap().clone();

        assert_eq!(board.select(2).unwrap(), Selection::Selected(2));
        assert_eq!(board.selected(), Some(2));

        assert_eq!(board.select(7).unwrap(), Selection::Swapped(2, 7));
        assert_eq!(board.selected(), None);
        assert_eq!(board.tiles().tile(7).unwrap().pixels(), first_tile.pixels());
    }

    // Tests clicking the same tile twice leaves the arrangement unchanged
    // Verified by keeping the selection after a self swap
    #[test]
    fn test_select_same_tile_twice() {
        let mut board = board();
        let before = board.arrangement().unwrap();

        board.select(5).unwrap();
        assert_eq!(board.select(5).unwrap(), Selection::Swapped(5, 5));

        assert_eq!(board.selected(), None);
        assert!(images_equal(&before, &board.arrangement().unwrap()));
    }

    // Tests an out of range click is rejected without touching the selection
    // Verified by clearing the selection before validating
    #[test]
    fn test_select_out_of_range() {
        let mut board = board();
        board.select(1).unwrap();

        assert!(matches!(
            board.select(16),
            Err(PuzzleError::InvalidTileIndex { index: 16, .. })
        ));
        assert_eq!(board.selected(), Some(1));
    }

    // Tests the unshuffled board checks as solved
    // Verified by inverting the verdict
    #[test]
    fn test_unshuffled_board_is_solved() {
        let mut board = board();
        let report = board.check().unwrap();

        assert_eq!(report.verdict, Verdict::Solved);
        assert!(report.order.is_identity());
        assert_eq!(report.links, 48);
        assert!(images_equal(&report.reconstruction, &source()));
    }

    // Tests a shuffled board is unsolved until the tiles are clicked into place
    // Verified by comparing against the arrangement instead of the reconstruction
    #[test]
    fn test_shuffle_then_solve_by_clicks() {
        let mut board = board();
        board.shuffle(42);

        let report = board.check().unwrap();
        assert!(images_equal(&report.reconstruction, &source()));
        let expected = if report.order.is_identity() {
            Verdict::Solved
        } else {
            Verdict::Unsolved
        };
        assert_eq!(report.verdict, expected);

        // at[p] is the arena index, at check time, of the tile now at p
        let order = report.order.indices().to_vec();
        let mut at: Vec<usize> = (0..16).collect();
        for (target, wanted) in order.iter().enumerate() {
            let current = at.iter().position(|i| i == wanted).unwrap();
            if current != target {
                board.select(target).unwrap();
                board.select(current).unwrap();
                at.swap(target, current);
            }
        }

        let solved = board.check().unwrap();
        assert_eq!(solved.verdict, Verdict::Solved);
        assert!(images_equal(&solved.arrangement, &source()));
    }

    // Tests both strategies agree on a well formed board
    // Verified by ignoring the configured strategy
    #[test]
    fn test_row_walk_strategy() {
        let mut board = board().with_strategy(Strategy::RowWalk);
        board.shuffle(9);
        assert_eq!(board.strategy(), Strategy::RowWalk);

        let order = board.solve().unwrap();
        let composed = board.tiles().compose_order(order.indices()).unwrap();
        assert!(images_equal(&composed, &source()));
    }

    // Tests tiles from unrelated images surface a reconstruction failure
    // Verified by mapping failures to an unsolved verdict
    #[test]
    fn test_unrelated_tiles_cannot_be_checked() {
        let tiles: Vec<Tile> = (0..16u8)
            .map(|tint| {
                let image = seamed_image(4, 4, 4, 6, tint.wrapping_mul(11));
                partition(&image, 4, 4).unwrap().swap_remove(usize::from(tint))
            })
            .collect();
        let mut board = Board::new(TileSet::new(tiles, 4, 4).unwrap());

        let err = board.check().unwrap_err();
        assert!(err.is_reconstruction_failure());
    }
}
