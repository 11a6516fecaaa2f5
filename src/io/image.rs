//! PNG export of assembled images with pattern matches highlighted

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::analysis::patterns::Habitat;
use crate::io::configuration::{CLEAR_COLOR, MATCH_COLOR, SET_COLOR};
use crate::io::error::{PuzzleError, Result, computation_error};
use crate::spatial::grid::Grid;

fn dimension(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|e| computation_error("export image", &e))
}

fn render(
    grid: &Grid,
    color_of: impl Fn(usize, usize, bool) -> [u8; 4],
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    let mut img = ImageBuffer::new(dimension(grid.cols())?, dimension(grid.rows())?);

    for ((row, col), &set) in grid.cells().indexed_iter() {
        img.put_pixel(
            dimension(col)?,
            dimension(row)?,
            Rgba(color_of(row, col, set)),
        );
    }

    Ok(img)
}

fn save(img: &ImageBuffer<Rgba<u8>, Vec<u8>>, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Export a grid as a two-color PNG, one pixel per cell
///
/// # Errors
///
/// Returns an error if:
/// - The grid is too large for the image dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    let img = render(grid, |_, _, set| if set { SET_COLOR } else { CLEAR_COLOR })?;
    save(&img, output_path)
}

/// Export a scanned image with every matched cell highlighted
///
/// The image is written in the orientation the matches were found in.
///
/// # Errors
///
/// Returns an error if:
/// - The image is too large for the image dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_habitat_png(habitat: &Habitat, output_path: &Path) -> Result<()> {
    let img = render(&habitat.image, |row, col, set| {
        if habitat.covered.contains(&(row, col)) {
            MATCH_COLOR
        } else if set {
            SET_COLOR
        } else {
            CLEAR_COLOR
        }
    })?;
    save(&img, output_path)
}
