//! Puzzle board state: the current arrangement, click selection and checking
//!
//! A front end renders `tiles()` in arena order and forwards clicks to
//! [`Board::select`]. Checking never mutates the arrangement; it only rebuilds
//! the neighbor graph over it.

use crate::algorithm::equality::images_equal;
use crate::algorithm::graph::build_graph;
use crate::algorithm::reconstruct::{ReconstructedOrder, Strategy, reconstruct_with};
use crate::io::error::Result;
use crate::spatial::tiles::TileSet;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Result of one click on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First click, the tile at this position is now highlighted
    Selected(usize),
    /// Second click, the two positions were exchanged and selection cleared
    Swapped(usize, usize),
}

/// Outcome of checking the current arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The arrangement matches the reconstruction pixel for pixel
    Solved,
    /// The arrangement differs from the reconstruction
    Unsolved,
}

/// Everything produced by one check, for callers that display intermediates
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Whether the arrangement matched
    pub verdict: Verdict,
    /// Order inferred from the neighbor graph
    pub order: ReconstructedOrder,
    /// Composition of the current arrangement
    pub arrangement: Array2<u32>,
    /// Composition of the reconstructed order
    pub reconstruction: Array2<u32>,
    /// Number of neighbor links the graph builder assigned
    pub links: usize,
}

/// A puzzle in progress
#[derive(Debug, Clone)]
pub struct Board {
    tiles: TileSet,
    selected: Option<usize>,
    strategy: Strategy,
}

impl Board {
    /// Start a board from tiles in their displayed order
    pub const fn new(tiles: TileSet) -> Self {
        Self {
            tiles,
            selected: None,
            strategy: Strategy::Positional,
        }
    }

    /// Use a different reconstruction strategy when checking
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reconstruction strategy used by [`Self::check`]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Tiles in displayed order
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Position highlighted by a pending first click
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Permute the tiles with a seeded uniform shuffle and clear the selection
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.tiles.shuffle(&mut rng);
        self.selected = None;
    }

    /// Handle a click on the tile at `index`
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if `index` is outside the board; the
    /// selection is left unchanged in that case
    pub fn select(&mut self, index: usize) -> Result<Selection> {
        self.tiles.tile(index)?;
        match self.selected.take() {
            None => {
                self.selected = Some(index);
                Ok(Selection::Selected(index))
            }
            Some(first) => {
                self.tiles.swap(first, index)?;
                Ok(Selection::Swapped(first, index))
            }
        }
    }

    /// Exchange two positions directly
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if either index is outside the board
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        self.tiles.swap(a, b)
    }

    /// Compose the current arrangement
    ///
    /// # Errors
    ///
    /// Propagates composition errors
    pub fn arrangement(&self) -> Result<Array2<u32>> {
        self.tiles.compose()
    }

    /// Link the current tiles and infer their original order
    ///
    /// # Errors
    ///
    /// Propagates scoring and reconstruction errors
    pub fn solve(&mut self) -> Result<ReconstructedOrder> {
        build_graph(&mut self.tiles)?;
        reconstruct_with(&self.tiles, self.strategy)
    }

    /// Compare the arrangement against the inferred original order
    ///
    /// # Errors
    ///
    /// Returns `CornerNotFound` or `IncompleteTraversal` when the graph cannot
    /// be walked; these are never reported as an `Unsolved` verdict
    pub fn check(&mut self) -> Result<CheckReport> {
        let arrangement = self.arrangement()?;
        let links = build_graph(&mut self.tiles)?;
        let order = reconstruct_with(&self.tiles, self.strategy)?;
        let reconstruction = self.tiles.compose_order(order.indices())?;

        let verdict = if images_equal(&arrangement, &reconstruction) {
            Verdict::Solved
        } else {
            Verdict::Unsolved
        };
        log::debug!("check finished with {links} links: {verdict:?}");

        Ok(CheckReport {
            verdict,
            order,
            arrangement,
            reconstruction,
            links,
        })
    }
}
