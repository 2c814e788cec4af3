//! Best-neighbor graph construction
//!
//! For every tile the builder scans all tiles of the set (itself included)
//! and keeps, per direction, the candidate with the highest edge score. A
//! candidate is tried against the directions in [`Direction::PRIORITY`] order
//! and claims at most one slot per scan: the first direction whose running
//! best it beats. Links are not made symmetric.

use crate::algorithm::scoring::score;
use crate::io::configuration::MATCH_FLOOR;
use crate::io::error::Result;
use crate::spatial::tiles::{Direction, Neighbors, TileSet};

/// Links inferred for one tile together with the scores that won them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileMatches {
    /// Winning neighbor per direction
    pub neighbors: Neighbors,
    /// Winning score per direction, indexed by [`Direction::index`]
    pub scores: [usize; 4],
}

/// Compute the best matches for the tile at `index` without mutating the set
///
/// Running bests start at [`MATCH_FLOOR`]; a score must strictly exceed the
/// current best to be accepted, so slots whose best score is at or below the
/// floor stay empty.
///
/// # Errors
///
/// Returns `InvalidTileIndex` for an index outside the set and
/// `DimensionMismatch` if any two compared edges differ in length
pub fn best_matches(tiles: &TileSet, index: usize) -> Result<TileMatches> {
    let subject = tiles.tile(index)?;
    let mut matches = TileMatches {
        neighbors: Neighbors::default(),
        scores: [MATCH_FLOOR; 4],
    };

    for (candidate_index, candidate) in tiles.tiles().iter().enumerate() {
        for direction in Direction::PRIORITY {
            let candidate_score = score(direction, subject, candidate)?;
            let Some(best) = matches.scores.get_mut(direction.index()) else {
                continue;
            };
            if candidate_score > *best {
                *best = candidate_score;
                matches.neighbors.set(direction, Some(candidate_index));
                break;
            }
        }
    }

    Ok(matches)
}

/// Populate the neighbor links of every tile in the set
///
/// Existing links are discarded first. Returns the number of links assigned.
///
/// # Errors
///
/// Returns `DimensionMismatch` if any two compared edges differ in length.
/// The set is left without links in that case.
pub fn build_graph(tiles: &mut TileSet) -> Result<usize> {
    tiles.clear_links();

    let computed = (0..tiles.len())
        .map(|index| best_matches(tiles, index))
        .collect::<Result<Vec<_>>>()?;

    for (tile, matches) in tiles.tiles_mut().iter_mut().zip(computed) {
        *tile.neighbors_mut() = matches.neighbors;
    }

    let links = tiles.link_count();
    log::debug!(
        "neighbor graph built: {links} links across {} tiles",
        tiles.len()
    );
    Ok(links)
}
