//! Puzzle constants and runtime configuration defaults

// Working resolution every source image is rescaled to before partitioning
/// Working image width in pixels
pub const WORKING_WIDTH: u32 = 1280;
/// Working image height in pixels
pub const WORKING_HEIGHT: u32 = 1024;

/// Tiles per grid side
pub const GRID_SIDE: usize = 4;
/// Tiles per puzzle
pub const TILE_COUNT: usize = GRID_SIDE * GRID_SIDE;

// Suppresses single-pixel coincidences between unrelated edges
/// Edge score a candidate must strictly exceed to become a neighbor
pub const MATCH_FLOOR: usize = 1;

/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Suffix for the reconstructed image
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix for the arrangement being checked
pub const ARRANGEMENT_SUFFIX: &str = "_arranged";
/// Input extensions picked up when the target is a directory
pub const INPUT_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
