//! Fixed-pattern search over assembled images in every orientation

use std::collections::HashSet;
use tracing::debug;

use crate::io::configuration::{PATTERN_MARKER, SEA_MONSTER};
use crate::spatial::grid::Grid;
use crate::spatial::orientation::Orientation;

/// A fixed arrangement of cells that must all be set
///
/// Only the marked cells matter; everything else in the bounding box is
/// ignored when matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Pattern {
    /// Build a pattern from text rows, where `marker` flags significant cells
    ///
    /// Rows may differ in length; the bounding box spans the longest.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], marker: char) -> Self {
        let offsets: Vec<(usize, usize)> = rows
            .iter()
            .enumerate()
            .flat_map(|(row, text)| {
                text.as_ref()
                    .chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == marker)
                    .map(move |(col, _)| (row, col))
                    .collect::<Vec<_>>()
            })
            .collect();

        let width = rows
            .iter()
            .map(|text| text.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        Self {
            offsets,
            height: rows.len(),
            width,
        }
    }

    /// The sea monster
    pub fn sea_monster() -> Self {
        Self::from_rows(&SEA_MONSTER, PATTERN_MARKER)
    }

    /// Offsets of significant cells from the top-left anchor
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Bounding box height
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bounding box width
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of significant cells
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the pattern has no significant cells
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether every significant cell is set with the pattern anchored at `(row, col)`
    pub fn matches_at(&self, grid: &Grid, row: usize, col: usize) -> bool {
        self.offsets
            .iter()
            .all(|&(dr, dc)| grid.get(row + dr, col + dc) == Some(true))
    }

    /// All matches in a grid as stored
    ///
    /// Returns the number of anchors that match and the union of the cells
    /// they cover, so overlapping matches count shared cells once.
    pub fn find_in(&self, grid: &Grid) -> (usize, HashSet<(usize, usize)>) {
        let mut instances = 0;
        let mut covered = HashSet::new();

        if self.is_empty() || grid.rows() < self.height || grid.cols() < self.width {
            return (instances, covered);
        }

        for row in 0..=grid.rows() - self.height {
            for col in 0..=grid.cols() - self.width {
                if self.matches_at(grid, row, col) {
                    instances += 1;
                    covered.extend(self.offsets.iter().map(|&(dr, dc)| (row + dr, col + dc)));
                }
            }
        }

        (instances, covered)
    }

    /// Scan every orientation of an image, stopping at the first with a match
    ///
    /// Returns `None` when no orientation contains the pattern, which is
    /// distinct from a habitat whose roughness happens to be zero.
    pub fn scan(&self, image: &Grid) -> Option<Habitat> {
        let total_set = image.count_set();

        Orientation::ALL.into_iter().find_map(|orientation| {
            let oriented = image.oriented(orientation);
            let (instances, covered) = self.find_in(&oriented);
            debug!(%orientation, instances, "scanned orientation");

            (instances > 0).then(|| Habitat {
                orientation,
                instances,
                roughness: total_set.saturating_sub(covered.len()),
                covered,
                image: oriented,
            })
        })
    }
}

/// Result of a successful scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habitat {
    /// Orientation of the image in which matches were found
    pub orientation: Orientation,
    /// Number of pattern matches
    pub instances: usize,
    /// Cells covered by at least one match, in the oriented image
    pub covered: HashSet<(usize, usize)>,
    /// Set cells not covered by any match
    pub roughness: usize,
    /// The image in the orientation the matches refer to
    pub image: Grid,
}
