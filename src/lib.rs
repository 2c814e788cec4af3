//! Reassembly of a shuffled 4x4 image puzzle from pixel-edge similarity
//!
//! An image is cut into a grid of tiles. Every ordered tile pair is scored by
//! counting identical pixels along the touching edges, the best candidates
//! form a directed neighbor graph, and walking that graph from the top-left
//! corner recovers the original row-major order.

#![deny(unsafe_code)]

/// Edge scoring, neighbor graph construction, reconstruction and comparison
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Headless puzzle board with selection, swaps and checking
pub mod session;
/// Tiles, the tile arena and grid partitioning
pub mod spatial;

pub use io::error::{PuzzleError, Result};
