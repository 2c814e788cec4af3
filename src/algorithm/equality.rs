//! Pixel-exact image comparison

use ndarray::Array2;

/// True when both images share dimensions and every pixel matches exactly
pub fn images_equal(a: &Array2<u32>, b: &Array2<u32>) -> bool {
    if a.dim() != b.dim() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(x, y)| x == y)
}
