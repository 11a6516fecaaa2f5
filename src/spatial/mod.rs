//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Orientation encoding shared by tiles and assembled images
//! - Boolean grids with view-based transforms and border fingerprints
//! - Tile data structures and the validated tile set

/// Boolean grids, border fingerprints and orientation transforms
pub mod grid;
/// Eight-way rotation and reflection encoding
pub mod orientation;
/// Tiles and tile set validation
pub mod tiles;

pub use grid::{Border, Borders, Grid, Side};
pub use orientation::Orientation;
pub use tiles::{Tile, TileId, TileSet};
