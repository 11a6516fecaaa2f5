use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset recording which tiles are already on the board
///
/// Indexed by tile position in the `TileSet`. Placement and removal are
/// symmetric so a backtracking step can undo exactly what it applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsedTiles {
    bits: BitVec,
}

impl UsedTiles {
    /// Create a bitset with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Mark a tile as used; out-of-range indices are ignored
    pub fn insert(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Release a tile; out-of-range indices are ignored
    pub fn remove(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, false);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test if every tile is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Indices of all tiles present, ascending
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for UsedTiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} used {:?}", self.count(), self.to_vec())
    }
}
