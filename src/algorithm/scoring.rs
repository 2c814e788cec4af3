//! Edge similarity between two tiles
//!
//! Each comparator counts exact pixel equalities along the 1-pixel border of
//! `subject` and the opposing border of `candidate`. Tiles cut from one image
//! share identical pixels across a true seam, so a true neighbor scores the
//! full edge length while unrelated edges score near zero.

use crate::io::error::{Result, dimension_mismatch};
use crate::spatial::tiles::{Direction, Tile};
use ndarray::ArrayView1;

fn count_equal(a: ArrayView1<'_, u32>, b: ArrayView1<'_, u32>) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x == y).count()
}

fn require_same(operation: &'static str, edge: &str, a: usize, b: usize) -> Result<()> {
    if a == b {
        Ok(())
    } else {
        Err(dimension_mismatch(
            operation,
            &format!("{edge} {a} does not match {edge} {b}"),
        ))
    }
}

/// Score `candidate` as the tile immediately left of `subject`
///
/// Column 0 of `subject` against the last column of `candidate`.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the tiles differ in height
pub fn score_left_right(subject: &Tile, candidate: &Tile) -> Result<usize> {
    require_same(
        "score_left_right",
        "height",
        subject.height(),
        candidate.height(),
    )?;
    Ok(count_equal(
        subject.pixels().column(0),
        candidate.pixels().column(candidate.width() - 1),
    ))
}

/// Score `candidate` as the tile immediately right of `subject`
///
/// # Errors
///
/// Returns `DimensionMismatch` if the tiles differ in height
pub fn score_right_left(subject: &Tile, candidate: &Tile) -> Result<usize> {
    require_same(
        "score_right_left",
        "height",
        subject.height(),
        candidate.height(),
    )?;
    Ok(count_equal(
        subject.pixels().column(subject.width() - 1),
        candidate.pixels().column(0),
    ))
}

/// Score `candidate` as the tile immediately below `subject`
///
/// # Errors
///
/// Returns `DimensionMismatch` if the tiles differ in width
pub fn score_bottom_top(subject: &Tile, candidate: &Tile) -> Result<usize> {
    require_same(
        "score_bottom_top",
        "width",
        subject.width(),
        candidate.width(),
    )?;
    Ok(count_equal(
        subject.pixels().row(subject.height() - 1),
        candidate.pixels().row(0),
    ))
}

/// Score `candidate` as the tile immediately above `subject`
///
/// # Errors
///
/// Returns `DimensionMismatch` if the tiles differ in width
pub fn score_top_bottom(subject: &Tile, candidate: &Tile) -> Result<usize> {
    require_same(
        "score_top_bottom",
        "width",
        subject.width(),
        candidate.width(),
    )?;
    Ok(count_equal(
        subject.pixels().row(0),
        candidate.pixels().row(candidate.height() - 1),
    ))
}

/// Score `candidate` as the neighbor of `subject` in `direction`
///
/// # Errors
///
/// Returns `DimensionMismatch` if the compared edges differ in length
pub fn score(direction: Direction, subject: &Tile, candidate: &Tile) -> Result<usize> {
    match direction {
        Direction::Left => score_left_right(subject, candidate),
        Direction::Right => score_right_left(subject, candidate),
        Direction::Down => score_bottom_top(subject, candidate),
        Direction::Up => score_top_bottom(subject, candidate),
    }
}
