//! Square image fragments and the validated set they are assembled from
//!
//! A tile keeps its original cells untouched and materializes one orientation
//! at a time. Reorienting always starts again from the original cells, so no
//! sequence of `rotate` calls can accumulate transforms.

use std::collections::HashSet;

use crate::io::configuration::{MIN_TILE_SIDE, MIN_TILES_PER_SIDE};
use crate::io::error::{Result, invalid_tile_data};
use crate::spatial::grid::{Border, Borders, Grid};
use crate::spatial::orientation::Orientation;

/// Identifier carried by a tile in its source text
pub type TileId = u32;

/// A square image fragment with unknown position and orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    original: Grid,
    oriented: Grid,
    orientation: Orientation,
}

impl Tile {
    /// Create a tile from its cells
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not square or is too small to have
    /// an interior once its border ring is removed
    pub fn new(id: TileId, grid: Grid) -> Result<Self> {
        if !grid.is_square() {
            return Err(invalid_tile_data(&format!(
                "tile {id} is {}x{}, expected a square",
                grid.rows(),
                grid.cols()
            )));
        }
        if grid.rows() < MIN_TILE_SIDE {
            return Err(invalid_tile_data(&format!(
                "tile {id} has side {}, minimum is {MIN_TILE_SIDE}",
                grid.rows()
            )));
        }

        Ok(Self {
            id,
            oriented: grid.clone(),
            original: grid,
            orientation: Orientation::IDENTITY,
        })
    }

    /// Tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Cells along one side
    pub fn side(&self) -> usize {
        self.original.rows()
    }

    /// Currently materialized orientation
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells as supplied, ignoring orientation
    pub const fn original(&self) -> &Grid {
        &self.original
    }

    /// Cells in the current orientation
    pub const fn grid(&self) -> &Grid {
        &self.oriented
    }

    /// Borders in the current orientation
    pub fn borders(&self) -> Borders {
        self.oriented.borders()
    }

    /// Borders the tile would show under `orientation`, without changing it
    pub fn borders_at(&self, orientation: Orientation) -> Borders {
        self.original.borders_at(orientation)
    }

    /// Materialize `orientation` from the original cells
    pub fn rotate(&mut self, orientation: Orientation) {
        if orientation != self.orientation {
            self.oriented = self.original.oriented(orientation);
            self.orientation = orientation;
        }
    }

    /// Canonical fingerprints of the tile's physical edges
    ///
    /// Every orientation exposes the same four edges, so the untransformed
    /// borders are enough. Edges that coincide up to reversal collapse.
    pub fn border_keys(&self) -> HashSet<Border> {
        self.original.borders().iter().map(Border::canonical).collect()
    }
}

/// Validated tiles for one square board
///
/// Tiles are held in ascending id order; positions in that order are the
/// tile indices used throughout classification and solving.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: Vec<Tile>,
    tiles_per_side: usize,
    tile_side: usize,
}

impl TileSet {
    /// Validate and index a collection of tiles
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two tiles share an identifier
    /// - Tile sides differ
    /// - The tile count is not the square of a side of at least two
    pub fn new(mut tiles: Vec<Tile>) -> Result<Self> {
        tiles.sort_by_key(Tile::id);

        let tile_side = tiles
            .first()
            .map(Tile::side)
            .ok_or_else(|| invalid_tile_data(&"no tiles supplied"))?;

        let mut seen = HashSet::with_capacity(tiles.len());
        for tile in &tiles {
            if tile.side() != tile_side {
                return Err(invalid_tile_data(&format!(
                    "tile {} has side {}, expected {tile_side}",
                    tile.id(),
                    tile.side()
                )));
            }
            if !seen.insert(tile.id()) {
                return Err(invalid_tile_data(&format!(
                    "tile id {} appears more than once",
                    tile.id()
                )));
            }
        }

        let tiles_per_side = tiles.len().isqrt();
        if tiles_per_side * tiles_per_side != tiles.len() || tiles_per_side < MIN_TILES_PER_SIDE
        {
            return Err(invalid_tile_data(&format!(
                "{} tiles cannot form a square board of side {MIN_TILES_PER_SIDE} or more",
                tiles.len()
            )));
        }

        Ok(Self {
            tiles,
            tiles_per_side,
            tile_side,
        })
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set is empty (never true for a validated set)
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Board side measured in tiles
    pub const fn tiles_per_side(&self) -> usize {
        self.tiles_per_side
    }

    /// Side of every tile measured in cells
    pub const fn tile_side(&self) -> usize {
        self.tile_side
    }

    /// Tile at an index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Mutable tile at an index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Tiles in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
