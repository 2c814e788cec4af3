//! Error types for partitioning, graph building and reconstruction

use crate::spatial::tiles::Direction;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Failed to load source image from filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Images or tiles have sizes that the requested operation cannot combine
    ///
    /// Raised by the edge scorer when two edges differ in length and by the
    /// partitioner when the image does not divide evenly into the grid.
    DimensionMismatch {
        /// Operation that rejected the input
        operation: &'static str,
        /// Description of the mismatch
        reason: String,
    },

    /// A tile's dimensions differ from the first tile of its collection
    InconsistentTileSize {
        /// Position of the offending tile
        index: usize,
        /// Size of the first tile (height, width)
        expected: (usize, usize),
        /// Size of the offending tile (height, width)
        found: (usize, usize),
    },

    /// Neither corner rule identified a top-left tile in the neighbor graph
    CornerNotFound {
        /// Number of tiles that were searched
        tile_count: usize,
    },

    /// The grid walk required a neighbor link that the graph does not have
    IncompleteTraversal {
        /// Output position being filled when the link was missing
        position: usize,
        /// Direction of the missing link
        direction: Direction,
    },

    /// Tile index exceeds available tile set
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the set
        max_tiles: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save an image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl PuzzleError {
    /// Whether this error comes from the reconstruction heuristic itself
    ///
    /// These failures depend only on the tile graph, so retrying with the same
    /// tiles fails identically. I/O and parameter errors return `false`.
    pub const fn is_reconstruction_failure(&self) -> bool {
        matches!(
            self,
            Self::CornerNotFound { .. } | Self::IncompleteTraversal { .. }
        )
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DimensionMismatch { operation, reason } => {
                write!(f, "Dimension mismatch in {operation}: {reason}")
            }
            Self::InconsistentTileSize {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile {index} is {}x{} but expected {}x{}",
                    found.1, found.0, expected.1, expected.0
                )
            }
            Self::CornerNotFound { tile_count } => {
                write!(f, "No top-left corner found among {tile_count} tiles")
            }
            Self::IncompleteTraversal {
                position,
                direction,
            } => {
                write!(
                    f,
                    "Traversal stopped at position {position}: missing {direction} neighbor"
                )
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (tiles: {max_tiles})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a dimension mismatch error
pub fn dimension_mismatch(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::DimensionMismatch {
        operation,
        reason: reason.to_string(),
    }
}
