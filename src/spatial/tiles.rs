//! Tile records and the fixed arena that holds them
//!
//! Tiles carry no original grid coordinate. Their only relation to each other
//! is the neighbor graph, stored as optional indices into the owning
//! [`TileSet`] so that links never own or borrow another tile.

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::spatial::grid;
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Side of a tile that faces a neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Neighbor sits immediately to the left
    Left,
    /// Neighbor sits immediately to the right
    Right,
    /// Neighbor sits immediately below
    Down,
    /// Neighbor sits immediately above
    Up,
}

impl Direction {
    /// Order in which the graph builder tries each slot for a candidate
    pub const PRIORITY: [Self; 4] = [Self::Left, Self::Right, Self::Down, Self::Up];

    /// Dense index in `0..4`, matching [`Self::PRIORITY`]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Up => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Down => "down",
            Self::Up => "up",
        };
        f.write_str(name)
    }
}

/// Directed neighbor links of one tile, as indices into its [`TileSet`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    /// Tile to the left
    pub left: Option<usize>,
    /// Tile to the right
    pub right: Option<usize>,
    /// Tile below
    pub down: Option<usize>,
    /// Tile above
    pub up: Option<usize>,
}

impl Neighbors {
    /// Link in the given direction
    pub const fn get(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Down => self.down,
            Direction::Up => self.up,
        }
    }

    /// Replace the link in the given direction
    pub const fn set(&mut self, direction: Direction, target: Option<usize>) {
        match direction {
            Direction::Left => self.left = target,
            Direction::Right => self.right = target,
            Direction::Down => self.down = target,
            Direction::Up => self.up = target,
        }
    }

    /// Number of links present
    pub fn count(&self) -> usize {
        Direction::PRIORITY
            .iter()
            .filter(|&&d| self.get(d).is_some())
            .count()
    }
}

/// One rectangular cell of a partitioned image
///
/// Pixels are packed RGB values indexed `(row, col)`. They are fixed at
/// construction; only the neighbor links change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pixels: Array2<u32>,
    neighbors: Neighbors,
}

impl Tile {
    /// Wrap a pixel grid as an unlinked tile
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid has no rows or no columns
    pub fn new(pixels: Array2<u32>) -> Result<Self> {
        let (height, width) = pixels.dim();
        if height == 0 || width == 0 {
            return Err(invalid_parameter(
                "tile",
                &format!("{width}x{height}"),
                &"tiles must contain at least one pixel",
            ));
        }
        Ok(Self {
            pixels,
            neighbors: Neighbors::default(),
        })
    }

    /// Pixel grid of this tile
    pub const fn pixels(&self) -> &Array2<u32> {
        &self.pixels
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Size as (height, width)
    pub fn dim(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Current neighbor links
    pub const fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    /// Link in one direction
    pub const fn neighbor(&self, direction: Direction) -> Option<usize> {
        self.neighbors.get(direction)
    }

    pub(crate) const fn neighbors_mut(&mut self) -> &mut Neighbors {
        &mut self.neighbors
    }
}

/// Fixed collection of tiles forming one `rows x cols` puzzle
///
/// Position in the arena is the only tile identity. Reordering operations
/// clear every link because links are positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl TileSet {
    /// Build a set for a `rows x cols` grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rows` or `cols` is zero, or the tile count is not `rows * cols`
    /// - Any tile differs in size from the first tile
    pub fn new(tiles: Vec<Tile>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "grid",
                &format!("{rows}x{cols}"),
                &"grid must have at least one row and one column",
            ));
        }
        if tiles.len() != rows * cols {
            return Err(invalid_parameter(
                "tiles",
                &tiles.len(),
                &format!("a {rows}x{cols} grid needs {} tiles", rows * cols),
            ));
        }
        check_uniform_size(tiles.iter())?;

        Ok(Self { tiles, rows, cols })
    }

    /// Number of grid rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed set, kept for API symmetry with `len`
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in arena order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at an arena index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Tile at an arena index, or an `InvalidTileIndex` error
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if `index` is outside the set
    pub fn tile(&self, index: usize) -> Result<&Tile> {
        self.tiles.get(index).ok_or(PuzzleError::InvalidTileIndex {
            index,
            max_tiles: self.tiles.len(),
        })
    }

    /// Follow one link from a tile
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        self.tiles.get(index).and_then(|t| t.neighbor(direction))
    }

    /// Set or clear one link by hand
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if either index is outside the set
    pub fn set_neighbor(
        &mut self,
        index: usize,
        direction: Direction,
        target: Option<usize>,
    ) -> Result<()> {
        let max_tiles = self.tiles.len();
        if let Some(target) = target {
            if target >= max_tiles {
                return Err(PuzzleError::InvalidTileIndex {
                    index: target,
                    max_tiles,
                });
            }
        }
        let tile = self
            .tiles
            .get_mut(index)
            .ok_or(PuzzleError::InvalidTileIndex { index, max_tiles })?;
        tile.neighbors_mut().set(direction, target);
        Ok(())
    }

    /// Remove every neighbor link
    pub fn clear_links(&mut self) {
        for tile in &mut self.tiles {
            *tile.neighbors_mut() = Neighbors::default();
        }
    }

    /// Total number of links in the graph
    pub fn link_count(&self) -> usize {
        self.tiles.iter().map(|t| t.neighbors().count()).sum()
    }

    /// Exchange two positions, dropping the graph
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if either index is outside the set
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let max_tiles = self.tiles.len();
        for index in [a, b] {
            if index >= max_tiles {
                return Err(PuzzleError::InvalidTileIndex { index, max_tiles });
            }
        }
        self.tiles.swap(a, b);
        self.clear_links();
        Ok(())
    }

    /// Uniformly permute the tiles, dropping the graph
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
        self.clear_links();
    }

    /// Compose the tiles in their current arena order
    ///
    /// # Errors
    ///
    /// Propagates errors from [`grid::compose`]
    pub fn compose(&self) -> Result<Array2<u32>> {
        let refs: Vec<&Tile> = self.tiles.iter().collect();
        grid::compose(&refs, self.rows, self.cols)
    }

    /// Compose the tiles in the order given by arena indices
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` for an index outside the set, otherwise
    /// propagates errors from [`grid::compose`]
    pub fn compose_order(&self, order: &[usize]) -> Result<Array2<u32>> {
        let refs = order
            .iter()
            .map(|&index| self.tile(index))
            .collect::<Result<Vec<_>>>()?;
        grid::compose(&refs, self.rows, self.cols)
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}

/// Verify that every tile matches the size of the first one
///
/// # Errors
///
/// Returns `InconsistentTileSize` naming the first tile that differs
pub fn check_uniform_size<'a, I>(tiles: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Tile>,
{
    let mut expected = None;
    for (index, tile) in tiles.into_iter().enumerate() {
        let found = tile.dim();
        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(PuzzleError::InconsistentTileSize {
                    index,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
    }
    Ok(())
}
