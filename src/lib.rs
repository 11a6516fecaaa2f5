//! Jigsaw assembly of square image tiles followed by a pattern search
//!
//! Tiles arrive rotated, flipped and shuffled. Borders shared by no other tile
//! reveal the corners and edges of the board; a backtracking search places
//! every tile, the interiors are stitched into one image, and the image is
//! scanned in all eight orientations for a fixed pattern.

#![forbid(unsafe_code)]

/// Tile classification, placement search and image composition
pub mod algorithm;
/// Pattern detection over assembled images
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Grids, orientations and tiles
pub mod spatial;

pub use io::error::{PuzzleError, Result};
