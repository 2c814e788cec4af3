//! Recovering row-major tile order from the neighbor graph
//!
//! Two walks are available. [`Strategy::Positional`] is the offset-based
//! heuristic: its branches look a fixed number of positions back and only
//! make sense for a 4-wide grid. [`Strategy::RowWalk`] follows `right` links
//! across each row and a `down` link from each row start, for any grid shape.
//! Both begin from the same corner search and agree on a well-formed graph.

use crate::io::configuration::GRID_SIDE;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::tiles::{Direction, TileSet};

/// Traversal used to turn the neighbor graph into an ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Offset-based walk over a 4-wide grid
    #[default]
    Positional,
    /// Explicit (row, col) walk
    RowWalk,
}

/// Best guess at the original row-major layout, as arena indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructedOrder {
    indices: Vec<usize>,
}

impl ReconstructedOrder {
    /// Arena indices in row-major order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of placed tiles
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when nothing was placed
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// True when the order keeps every tile at its current arena position
    pub fn is_identity(&self) -> bool {
        self.indices.iter().enumerate().all(|(i, &index)| i == index)
    }
}

/// Reconstruct with the default positional walk
///
/// # Errors
///
/// Returns an error if:
/// - The grid is not [`GRID_SIDE`] columns wide
/// - No top-left corner can be located (`CornerNotFound`)
/// - A required link is absent (`IncompleteTraversal`)
pub fn reconstruct(tiles: &TileSet) -> Result<ReconstructedOrder> {
    reconstruct_with(tiles, Strategy::Positional)
}

/// Reconstruct with an explicit strategy
///
/// # Errors
///
/// Returns `CornerNotFound` or `IncompleteTraversal` when the graph cannot be
/// walked, and `InvalidParameter` if the positional walk is asked to handle a
/// grid that is not [`GRID_SIDE`] columns wide
pub fn reconstruct_with(tiles: &TileSet, strategy: Strategy) -> Result<ReconstructedOrder> {
    let indices = match strategy {
        Strategy::Positional => walk_positional(tiles)?,
        Strategy::RowWalk => walk_rows(tiles)?,
    };
    log::debug!("reconstructed order ({strategy:?}): {indices:?}");
    Ok(ReconstructedOrder { indices })
}

/// First tile with neither an `up` nor a `left` neighbor
pub fn find_top_left(tiles: &TileSet) -> Option<usize> {
    tiles.tiles().iter().position(|tile| {
        tile.neighbor(Direction::Up).is_none() && tile.neighbor(Direction::Left).is_none()
    })
}

/// Fallback corner search through a bottom-left looking tile
///
/// Takes the first tile with neither a `left` nor a `down` neighbor and climbs
/// `rows - 1` `up` links from it. Only that first candidate is tried, and the
/// climb assumes it really sits at the bottom of the left column.
pub fn find_top_left_by_ascent(tiles: &TileSet) -> Option<usize> {
    let bottom_left = tiles.tiles().iter().position(|tile| {
        tile.neighbor(Direction::Left).is_none() && tile.neighbor(Direction::Down).is_none()
    })?;

    (1..tiles.rows()).try_fold(bottom_left, |current, _| {
        tiles.neighbor(current, Direction::Up)
    })
}

/// Locate the starting tile, trying the primary rule then the fallback
///
/// # Errors
///
/// Returns `CornerNotFound` if neither rule yields a tile
pub fn locate_corner(tiles: &TileSet) -> Result<usize> {
    if let Some(corner) = find_top_left(tiles) {
        return Ok(corner);
    }
    log::debug!("no tile without up and left links, climbing from bottom-left");
    find_top_left_by_ascent(tiles).ok_or(PuzzleError::CornerNotFound {
        tile_count: tiles.len(),
    })
}

// Follows a chain of links, naming the first hop that is missing
fn follow(tiles: &TileSet, start: usize, path: &[Direction], position: usize) -> Result<usize> {
    path.iter().try_fold(start, |current, &direction| {
        tiles
            .neighbor(current, direction)
            .ok_or(PuzzleError::IncompleteTraversal {
                position,
                direction,
            })
    })
}

fn follow_opt(tiles: &TileSet, start: usize, path: &[Direction]) -> Option<usize> {
    path.iter()
        .try_fold(start, |current, &direction| tiles.neighbor(current, direction))
}

// Tile placed `offset` positions before `position`
fn placed_before(
    order: &[usize],
    position: usize,
    offset: usize,
    direction: Direction,
) -> Result<usize> {
    position
        .checked_sub(offset)
        .and_then(|i| order.get(i).copied())
        .ok_or(PuzzleError::IncompleteTraversal {
            position,
            direction,
        })
}

fn walk_positional(tiles: &TileSet) -> Result<Vec<usize>> {
    if tiles.cols() != GRID_SIDE {
        return Err(invalid_parameter(
            "cols",
            &tiles.cols(),
            &format!("the positional walk needs a grid {GRID_SIDE} tiles wide"),
        ));
    }

    let mut order = Vec::with_capacity(tiles.len());
    order.push(locate_corner(tiles)?);
    let mut placed_in_row = 1;

    for position in 1..tiles.len() {
        let next = if placed_in_row < GRID_SIDE {
            placed_in_row += 1;
            let previous = placed_before(&order, position, 1, Direction::Right)?;
            if let Some(right) = tiles.neighbor(previous, Direction::Right) {
                right
            } else if position > GRID_SIDE {
                let above = placed_before(&order, position, GRID_SIDE, Direction::Down)?;
                match tiles.neighbor(above, Direction::Down) {
                    Some(down) => down,
                    None => {
                        let diagonal =
                            placed_before(&order, position, GRID_SIDE - 1, Direction::Down)?;
                        follow(tiles, diagonal, &[Direction::Down], position)?
                    }
                }
            } else {
                follow(
                    tiles,
                    previous,
                    &[Direction::Down, Direction::Right, Direction::Up],
                    position,
                )?
            }
        } else {
            placed_in_row = 1;
            let above = placed_before(&order, position, GRID_SIDE, Direction::Down)?;
            let diagonal = placed_before(&order, position, GRID_SIDE - 1, Direction::Down)?;
            if let Some(down) = tiles.neighbor(above, Direction::Down) {
                down
            } else if let Some(down_left) =
                follow_opt(tiles, diagonal, &[Direction::Down, Direction::Left])
            {
                down_left
            } else {
                let two_back = placed_before(&order, position, 2, Direction::Left)?;
                follow(
                    tiles,
                    two_back,
                    &[Direction::Left, Direction::Left],
                    position,
                )?
            }
        };
        order.push(next);
    }

    Ok(order)
}

fn walk_rows(tiles: &TileSet) -> Result<Vec<usize>> {
    let cols = tiles.cols();
    let mut order = Vec::with_capacity(tiles.len());
    let mut row_start = locate_corner(tiles)?;

    for row in 0..tiles.rows() {
        if row > 0 {
            row_start = follow(tiles, row_start, &[Direction::Down], row * cols)?;
        }
        order.push(row_start);

        let mut current = row_start;
        for col in 1..cols {
            current = follow(tiles, current, &[Direction::Right], row * cols + col)?;
            order.push(current);
        }
    }

    Ok(order)
}
