//! Corner, edge and interior partition by globally unique borders
//!
//! A border is globally unique when no other tile carries the same physical
//! edge in either reading direction. On a solvable board those borders face
//! outward: corners have two, edge tiles one, interior tiles none.

use std::collections::HashMap;
use tracing::debug;

use crate::io::error::{PuzzleError, Result, computation_error};
use crate::spatial::grid::Border;
use crate::spatial::tiles::{TileId, TileSet};

/// Position class of a tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Two outward borders
    Corner,
    /// One outward border
    Edge,
    /// No outward borders
    Interior,
}

impl Category {
    /// Category for a count of globally unique borders
    pub const fn from_unique_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Self::Corner),
            1 => Some(Self::Edge),
            0 => Some(Self::Interior),
            _ => None,
        }
    }

    /// Lowercase display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Corner => "corner",
            Self::Edge => "edge",
            Self::Interior => "interior",
        }
    }

    /// Number of tiles of this category on a board `tiles_per_side` wide
    pub const fn expected_count(self, tiles_per_side: usize) -> usize {
        let inner = tiles_per_side.saturating_sub(2);
        match self {
            Self::Corner => 4,
            Self::Edge => 4 * inner,
            Self::Interior => inner * inner,
        }
    }
}

/// Partition of a tile set into corner, edge and interior tiles
#[derive(Debug, Clone)]
pub struct Classification {
    corners: Vec<usize>,
    edges: Vec<usize>,
    interior: Vec<usize>,
    unique_borders: Vec<Vec<Border>>,
}

impl Classification {
    /// Classify every tile by its count of globally unique borders
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any tile has three or four unique borders
    /// - There are not exactly four corners
    /// - The edge count differs from `4 * (N - 2)` for an `N x N` board
    pub fn classify(tiles: &TileSet) -> Result<Self> {
        let keys: Vec<Vec<Border>> = tiles
            .iter()
            .map(|tile| {
                let mut keys: Vec<Border> = tile.border_keys().into_iter().collect();
                keys.sort_unstable();
                keys
            })
            .collect();

        // Each tile contributes each of its keys once
        let mut occurrences: HashMap<&Border, usize> = HashMap::new();
        for key in keys.iter().flatten() {
            *occurrences.entry(key).or_default() += 1;
        }

        let mut classification = Self {
            corners: Vec::new(),
            edges: Vec::new(),
            interior: Vec::new(),
            unique_borders: Vec::with_capacity(tiles.len()),
        };

        for (index, (tile, tile_keys)) in tiles.iter().zip(&keys).enumerate() {
            let unique: Vec<Border> = tile_keys
                .iter()
                .filter(|key| occurrences.get(key).copied() == Some(1))
                .cloned()
                .collect();

            let category = Category::from_unique_count(unique.len()).ok_or(
                PuzzleError::Classification {
                    tile_id: tile.id(),
                    unique_borders: unique.len(),
                },
            )?;

            match category {
                Category::Corner => classification.corners.push(index),
                Category::Edge => classification.edges.push(index),
                Category::Interior => classification.interior.push(index),
            }
            classification.unique_borders.push(unique);
        }

        classification.check_counts(tiles.tiles_per_side())?;

        debug!(
            corners = classification.corners.len(),
            edges = classification.edges.len(),
            interior = classification.interior.len(),
            "classified tiles"
        );

        Ok(classification)
    }

    fn check_counts(&self, tiles_per_side: usize) -> Result<()> {
        for (category, found) in [
            (Category::Corner, self.corners.len()),
            (Category::Edge, self.edges.len()),
        ] {
            let expected = category.expected_count(tiles_per_side);
            if found != expected {
                return Err(PuzzleError::CategoryCount {
                    category: category.name(),
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Indices of corner tiles, ascending
    pub fn corners(&self) -> &[usize] {
        &self.corners
    }

    /// Indices of edge tiles, ascending
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    /// Indices of interior tiles, ascending
    pub fn interior(&self) -> &[usize] {
        &self.interior
    }

    /// Indices of every tile in a category
    pub fn of(&self, category: Category) -> &[usize] {
        match category {
            Category::Corner => &self.corners,
            Category::Edge => &self.edges,
            Category::Interior => &self.interior,
        }
    }

    /// Canonical forms of a tile's globally unique borders
    pub fn unique_borders(&self, index: usize) -> &[Border] {
        self.unique_borders
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `border`, in either direction, is one of a tile's unique borders
    pub fn is_unique(&self, index: usize, border: &Border) -> bool {
        self.unique_borders(index)
            .iter()
            .any(|unique| unique.matches(border))
    }

    /// Identifiers of the four corner tiles, ascending
    pub fn corner_ids(&self, tiles: &TileSet) -> Vec<TileId> {
        self.corners
            .iter()
            .filter_map(|&index| tiles.get(index).map(|tile| tile.id()))
            .collect()
    }

    /// Product of the four corner identifiers
    ///
    /// # Errors
    ///
    /// Returns an error if the product overflows `u64`
    pub fn corner_product(&self, tiles: &TileSet) -> Result<u64> {
        self.corner_ids(tiles)
            .into_iter()
            .try_fold(1_u64, |product, id| product.checked_mul(u64::from(id)))
            .ok_or_else(|| computation_error("corner product", &"product overflows u64"))
    }
}
