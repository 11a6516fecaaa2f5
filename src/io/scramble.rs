//! Seeded puzzle generation for tests and benchmarks
//!
//! A random lattice of cells is cut into overlapping tiles that share their
//! border rows and columns with each neighbour. Every tile is then turned to
//! a random orientation, given a random identifier and shuffled.

use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use tracing::debug;

use crate::io::configuration::{
    MAX_SCRAMBLE_ATTEMPTS, MIN_TILE_SIDE, MIN_TILES_PER_SIDE, SCRAMBLE_ID_RANGE, SCRAMBLE_MIN_ID,
};
use crate::io::error::{PuzzleError, Result, computation_error, invalid_parameter};
use crate::io::parser::render_tiles;
use crate::spatial::grid::{Border, Grid};
use crate::spatial::orientation::Orientation;
use crate::spatial::tiles::{Tile, TileId, TileSet};

/// A shuffled puzzle along with the answers it was built from
#[derive(Debug, Clone)]
pub struct ScrambledPuzzle {
    /// Tiles in shuffled order, each in a random orientation
    pub tiles: Vec<Tile>,
    /// The image the tiles assemble into, in lattice orientation
    pub composite: Grid,
    /// Identifiers of the four corner tiles, ascending
    pub corner_ids: Vec<TileId>,
}

impl ScrambledPuzzle {
    /// Tile text in the format the parser reads
    pub fn to_text(&self) -> String {
        render_tiles(&self.tiles)
    }

    /// Validated tile set for the solver
    ///
    /// # Errors
    ///
    /// Returns an error if the tiles fail `TileSet` validation
    pub fn tile_set(&self) -> Result<TileSet> {
        TileSet::new(self.tiles.clone())
    }
}

/// Seeded puzzle generator
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: StdRng,
}

impl Scrambler {
    /// Create a generator from a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a puzzle with uniquely matching borders
    ///
    /// Lattices are redrawn until every tile border is distinct from every
    /// other under reversal, and no border reads the same both ways.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are out of range or no lattice
    /// with unique borders turns up within the attempt limit
    pub fn generate(&mut self, tiles_per_side: usize, tile_side: usize) -> Result<ScrambledPuzzle> {
        let side = lattice_side(tiles_per_side, tile_side)?;

        for attempt in 1..=MAX_SCRAMBLE_ATTEMPTS {
            let rng = &mut self.rng;
            let lattice = Grid::new(Array2::from_shape_fn((side, side), |_| rng.random_bool(0.5)));

            if has_unique_borders(&lattice, tiles_per_side, tile_side) {
                debug!(attempt, tiles_per_side, tile_side, "generated lattice");
                return self.scramble(&lattice, tile_side);
            }
        }

        Err(computation_error(
            "generate",
            &format!("no lattice with unique borders after {MAX_SCRAMBLE_ATTEMPTS} attempts"),
        ))
    }

    /// Cut a lattice into tiles and scramble them
    ///
    /// The lattice side must be `n * (tile_side - 1) + 1` for some board
    /// side `n`, so that neighbouring tiles share their facing borders.
    ///
    /// # Errors
    ///
    /// Returns an error if the lattice does not divide into tiles of
    /// `tile_side`, or the board is too large for the identifier range
    pub fn scramble(&mut self, lattice: &Grid, tile_side: usize) -> Result<ScrambledPuzzle> {
        let tiles_per_side = board_side(lattice, tile_side)?;
        let count = tiles_per_side * tiles_per_side;
        if count > SCRAMBLE_ID_RANGE {
            return Err(invalid_parameter(
                "tiles_per_side",
                &tiles_per_side,
                &format!("at most {SCRAMBLE_ID_RANGE} tiles can be numbered"),
            ));
        }

        let ids = sample(&mut self.rng, SCRAMBLE_ID_RANGE, count)
            .into_iter()
            .map(|offset| {
                u32::try_from(offset)
                    .map(|offset| SCRAMBLE_MIN_ID + offset)
                    .map_err(|e| computation_error("scramble", &e))
            })
            .collect::<Result<Vec<TileId>>>()?;

        let step = tile_side - 1;
        let last = tiles_per_side - 1;
        let mut tiles = Vec::with_capacity(count);
        let mut corner_ids = Vec::with_capacity(4);

        for (index, &id) in ids.iter().enumerate() {
            let (row, col) = (index / tiles_per_side, index % tiles_per_side);
            let cells = lattice
                .window(row * step, col * step, tile_side, tile_side)
                .ok_or_else(|| computation_error("scramble", &"tile window outside lattice"))?
                .to_owned();

            let orientation =
                Orientation::from_parts(self.rng.random_bool(0.5), self.rng.random_range(0..4));
            tiles.push(Tile::new(id, Grid::new(cells).oriented(orientation))?);

            if (row == 0 || row == last) && (col == 0 || col == last) {
                corner_ids.push(id);
            }
        }

        tiles.shuffle(&mut self.rng);
        corner_ids.sort_unstable();

        Ok(ScrambledPuzzle {
            tiles,
            composite: composite_of(lattice, tiles_per_side, tile_side),
            corner_ids,
        })
    }
}

fn lattice_side(tiles_per_side: usize, tile_side: usize) -> Result<usize> {
    if tiles_per_side < MIN_TILES_PER_SIDE {
        return Err(invalid_parameter(
            "tiles_per_side",
            &tiles_per_side,
            &format!("must be at least {MIN_TILES_PER_SIDE}"),
        ));
    }
    if tile_side < MIN_TILE_SIDE {
        return Err(invalid_parameter(
            "tile_side",
            &tile_side,
            &format!("must be at least {MIN_TILE_SIDE}"),
        ));
    }
    Ok(tiles_per_side * (tile_side - 1) + 1)
}

fn board_side(lattice: &Grid, tile_side: usize) -> Result<usize> {
    if tile_side < MIN_TILE_SIDE {
        return Err(invalid_parameter(
            "tile_side",
            &tile_side,
            &format!("must be at least {MIN_TILE_SIDE}"),
        ));
    }
    let side = lattice.rows();
    let step = tile_side - 1;
    if !lattice.is_square() || side == 0 || (side - 1) % step != 0 {
        return Err(PuzzleError::InvalidTileData {
            reason: format!(
                "{}x{} lattice does not divide into tiles of side {tile_side}",
                lattice.rows(),
                lattice.cols()
            ),
        });
    }
    let tiles_per_side = (side - 1) / step;
    if tiles_per_side < MIN_TILES_PER_SIDE {
        return Err(invalid_parameter(
            "lattice",
            &side,
            &format!("holds fewer than {MIN_TILES_PER_SIDE} tiles per side"),
        ));
    }
    Ok(tiles_per_side)
}

// Every physical border segment of the lattice, each listed once
fn segments(lattice: &Grid, tiles_per_side: usize, tile_side: usize) -> Vec<Border> {
    let step = tile_side - 1;
    let mut borders = Vec::with_capacity(2 * tiles_per_side * (tiles_per_side + 1));

    for line in 0..=tiles_per_side {
        for tile in 0..tiles_per_side {
            let across = lattice.window(line * step, tile * step, 1, tile_side);
            let down = lattice.window(tile * step, line * step, tile_side, 1);
            for segment in [across, down].into_iter().flatten() {
                borders.push(Border::from_cells(segment.iter().copied()));
            }
        }
    }
    borders
}

fn has_unique_borders(lattice: &Grid, tiles_per_side: usize, tile_side: usize) -> bool {
    let mut seen = HashSet::new();
    segments(lattice, tiles_per_side, tile_side)
        .into_iter()
        .all(|border| border.reversed() != border && seen.insert(border.canonical()))
}

// Tile interiors stitched in lattice order
fn composite_of(lattice: &Grid, tiles_per_side: usize, tile_side: usize) -> Grid {
    let step = tile_side - 1;
    let inner = tile_side - 2;
    let cells = lattice.cells();
    let side = tiles_per_side * inner;

    let lattice_index = |i: usize| (i / inner) * step + 1 + i % inner;
    Grid::new(Array2::from_shape_fn((side, side), |(row, col)| {
        cells
            .get((lattice_index(row), lattice_index(col)))
            .copied()
            .unwrap_or(false)
    }))
}
