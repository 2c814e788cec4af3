//! Conversion between decoded images and packed pixel grids, plus PNG export

use crate::io::error::{PuzzleError, Result};
use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use ndarray::Array2;
use std::path::Path;

const OPAQUE: u32 = 0xFF00_0000;

/// Pack an RGB triple into one opaque `0xFFRRGGBB` value
pub const fn pack_rgb(rgb: [u8; 3]) -> u32 {
    OPAQUE | (rgb[0] as u32) << 16 | (rgb[1] as u32) << 8 | rgb[2] as u32
}

/// Split a packed value back into its RGB channels
pub const fn unpack_rgb(pixel: u32) -> [u8; 3] {
    [(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8]
}

/// Convert a decoded RGB image into a `(row, col)` grid of packed pixels
pub fn to_pixel_grid(image: &RgbImage) -> Array2<u32> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut grid = Array2::zeros((height, width));

    for (x, y, pixel) in image.enumerate_pixels() {
        if let Some(cell) = grid.get_mut((y as usize, x as usize)) {
            *cell = pack_rgb(pixel.0);
        }
    }

    grid
}

/// Convert a packed pixel grid back into an RGB image
pub fn to_rgb_image(grid: &Array2<u32>) -> RgbImage {
    let (height, width) = grid.dim();
    RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let pixel = grid.get((y as usize, x as usize)).copied().unwrap_or(OPAQUE);
        Rgb(unpack_rgb(pixel))
    })
}

/// Load an image and rescale it exactly to `width x height`
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded
pub fn load_and_resize<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Array2<u32>> {
    let path_buf = path.as_ref().to_path_buf();
    let decoded = image::open(&path_buf).map_err(|e| PuzzleError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;

    let resized = if decoded.width() == width && decoded.height() == height {
        decoded.to_rgb8()
    } else {
        log::debug!(
            "resizing '{}' from {}x{} to {width}x{height}",
            path_buf.display(),
            decoded.width(),
            decoded.height()
        );
        decoded
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgb8()
    };

    Ok(to_pixel_grid(&resized))
}

/// Save a pixel grid as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png<P: AsRef<Path>>(grid: &Array2<u32>, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    to_rgb_image(grid)
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
