//! Interactive puzzle state without any UI toolkit

/// Board arrangement, click selection and solution checking
pub mod board;

pub use board::{Board, CheckReport, Selection, Verdict};
