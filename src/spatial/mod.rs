//! Tile data structures and grid layout
//!
//! This module contains:
//! - Tiles, their neighbor links and the tile arena
//! - Partitioning an image into tiles and composing tiles back

/// Image partitioning and recomposition
pub mod grid;
/// Tile records, directions and the tile arena
pub mod tiles;

pub use grid::{compose, partition};
pub use tiles::{Direction, Neighbors, Tile, TileSet};
