//! Stitching placed tiles into one composite image

use ndarray::{Array2, ArrayView2, Axis, concatenate};

use crate::algorithm::solver::Placement;
use crate::io::error::{PuzzleError, Result, computation_error};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileSet;

/// Materialize each placed orientation onto its tile, then compose
///
/// # Errors
///
/// Returns an error if the placement refers to a tile outside the set, or
/// if stripped tiles disagree in shape along a row or column
pub fn compose(tiles: &mut TileSet, placement: &Placement) -> Result<Grid> {
    for placed in placement.iter() {
        tiles
            .get_mut(placed.tile)
            .ok_or_else(|| missing_tile(placed.tile))?
            .rotate(placed.orientation);
    }
    compose_oriented(tiles, placement)
}

/// Compose from tiles whose orientations are already materialized
///
/// Each tile loses its outer ring; tiles in a board row are joined left to
/// right and the resulting bands top to bottom.
///
/// # Errors
///
/// Returns an error if the placement refers to a tile outside the set, or
/// if stripped tiles disagree in shape along a row or column
pub fn compose_oriented(tiles: &TileSet, placement: &Placement) -> Result<Grid> {
    let mut bands: Vec<Array2<bool>> = Vec::with_capacity(placement.tiles_per_side());

    for row in placement.rows() {
        let pieces = row
            .iter()
            .map(|placed| {
                tiles
                    .get(placed.tile)
                    .and_then(|tile| tile.grid().interior())
                    .ok_or_else(|| missing_tile(placed.tile))
            })
            .collect::<Result<Vec<ArrayView2<'_, bool>>>>()?;

        let band = concatenate(Axis(1), &pieces)
            .map_err(|e| computation_error("compose row", &e))?;
        bands.push(band);
    }

    let views: Vec<ArrayView2<'_, bool>> = bands.iter().map(Array2::view).collect();
    let composite =
        concatenate(Axis(0), &views).map_err(|e| computation_error("compose column", &e))?;

    Ok(Grid::new(composite))
}

fn missing_tile(index: usize) -> PuzzleError {
    computation_error("compose", &format!("tile index {index} has no interior"))
}
