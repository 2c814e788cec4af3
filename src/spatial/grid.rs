//! Grid partitioning and recomposition
//!
//! `partition` cuts an image into equal tiles in row-major order and
//! `compose` draws an ordered tile sequence back onto one canvas. The two are
//! exact inverses for images whose sides divide evenly by the grid.

use crate::io::error::{Result, dimension_mismatch, invalid_parameter};
use crate::spatial::tiles::{Tile, check_uniform_size};
use ndarray::{Array2, s};

/// Cut an image into `rows x cols` equal tiles, left-to-right then top-to-bottom
///
/// # Errors
///
/// Returns an error if:
/// - `rows` or `cols` is zero
/// - The image height is not divisible by `rows` or its width by `cols`
pub fn partition(image: &Array2<u32>, rows: usize, cols: usize) -> Result<Vec<Tile>> {
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{rows}x{cols}"),
            &"grid must have at least one row and one column",
        ));
    }

    let (height, width) = image.dim();
    if height % rows != 0 || width % cols != 0 || height == 0 || width == 0 {
        return Err(dimension_mismatch(
            "partition",
            &format!("{width}x{height} image does not divide into a {cols}x{rows} grid"),
        ));
    }

    let tile_height = height / rows;
    let tile_width = width / cols;

    let mut tiles = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let top = row * tile_height;
            let left = col * tile_width;
            let region = image.slice(s![top..top + tile_height, left..left + tile_width]);
            tiles.push(Tile::new(region.to_owned())?);
        }
    }

    Ok(tiles)
}

/// Draw tiles onto one canvas, tile `i` at column `i % cols` and row `i / cols`
///
/// # Errors
///
/// Returns an error if:
/// - The number of tiles is not `rows * cols` (or is zero)
/// - The tiles do not all share one size
pub fn compose(tiles: &[&Tile], rows: usize, cols: usize) -> Result<Array2<u32>> {
    if rows == 0 || cols == 0 || tiles.len() != rows * cols {
        return Err(invalid_parameter(
            "tiles",
            &tiles.len(),
            &format!("a {rows}x{cols} grid needs {} tiles", rows * cols),
        ));
    }
    check_uniform_size(tiles.iter().copied())?;

    let (tile_height, tile_width) = tiles.first().map_or((0, 0), |t| t.dim());
    let mut canvas = Array2::zeros((tile_height * rows, tile_width * cols));

    for (i, tile) in tiles.iter().enumerate() {
        let top = (i / cols) * tile_height;
        let left = (i % cols) * tile_width;
        canvas
            .slice_mut(s![top..top + tile_height, left..left + tile_width])
            .assign(tile.pixels());
    }

    Ok(canvas)
}
