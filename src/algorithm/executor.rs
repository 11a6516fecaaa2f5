//! End-to-end puzzle orchestration: classify, place, compose, scan
//!
//! `Puzzle` owns its tiles and a solver configuration. It is the explicit
//! context for one solve; nothing is read from process-wide state.

use std::path::Path;
use tracing::{debug, info};

use crate::algorithm::classification::Classification;
use crate::algorithm::compositor::compose;
use crate::algorithm::solver::{Placement, Solver, SolverConfig};
use crate::analysis::patterns::{Habitat, Pattern};
use crate::io::error::{PuzzleError, Result, computation_error};
use crate::io::parser::{parse_tiles, read_tiles};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{TileId, TileSet};

/// Placed tiles and the composite image stitched from them
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Tile and orientation for every board cell
    pub placement: Placement,
    /// Stitched image without tile borders
    pub image: Grid,
    /// Backtracking steps spent finding the placement
    pub steps: usize,
}

/// A tile set together with the configuration used to solve it
#[derive(Debug, Clone)]
pub struct Puzzle {
    tiles: TileSet,
    config: SolverConfig,
    classification: Option<Classification>,
}

impl Puzzle {
    /// Wrap a validated tile set
    pub const fn new(tiles: TileSet, config: SolverConfig) -> Self {
        Self {
            tiles,
            config,
            classification: None,
        }
    }

    /// Parse tile text into a puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed or the tiles fail validation
    pub fn from_text(text: &str, config: SolverConfig) -> Result<Self> {
        Ok(Self::new(TileSet::new(parse_tiles(text)?)?, config))
    }

    /// Read and parse a tile file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or the
    /// tiles fail validation
    pub fn from_file(path: &Path, config: SolverConfig) -> Result<Self> {
        Ok(Self::new(read_tiles(path)?, config))
    }

    /// The tiles, in their current materialized orientations
    pub const fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Solver configuration
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Classify the tiles, reusing an earlier classification
    ///
    /// # Errors
    ///
    /// Returns an input-consistency error if the tiles cannot form a board
    pub fn classification(&mut self) -> Result<&Classification> {
        self.classified().map(|(_, classification)| classification)
    }

    fn classified(&mut self) -> Result<(&TileSet, &Classification)> {
        if self.classification.is_none() {
            self.classification = Some(Classification::classify(&self.tiles)?);
        }
        self.classification
            .as_ref()
            .map(|classification| (&self.tiles, classification))
            .ok_or_else(|| computation_error("classify", &"classification missing"))
    }

    /// Product of the four corner tile identifiers
    ///
    /// # Errors
    ///
    /// Returns an error if classification fails or the product overflows
    pub fn corner_product(&mut self) -> Result<u64> {
        let (tiles, classification) = self.classified()?;
        let product = classification.corner_product(tiles)?;
        debug!(product, "corner product");
        Ok(product)
    }

    /// Identifiers of the four corner tiles, ascending
    ///
    /// # Errors
    ///
    /// Returns an error if classification fails
    pub fn corner_ids(&mut self) -> Result<Vec<TileId>> {
        let (tiles, classification) = self.classified()?;
        Ok(classification.corner_ids(tiles))
    }

    /// Search for a placement without composing
    ///
    /// Returns the placement, or `None` when the search is exhausted, along
    /// with the backtracking steps spent.
    ///
    /// # Errors
    ///
    /// Returns an error if classification fails or the step budget runs out
    pub fn place(&mut self) -> Result<(Option<Placement>, usize)> {
        let config = self.config;
        let (tiles, classification) = self.classified()?;

        let mut solver = Solver::new(tiles, classification, config);
        let placement = solver.solve()?;
        Ok((placement, solver.steps()))
    }

    /// Place every tile and stitch the composite image
    ///
    /// # Errors
    ///
    /// Returns an error if classification fails, the step budget runs out,
    /// or the search is exhausted without a placement
    pub fn assemble(&mut self) -> Result<Assembly> {
        let (placement, steps) = match self.place()? {
            (Some(placement), steps) => (placement, steps),
            (None, steps) => return Err(PuzzleError::NoPlacement { steps }),
        };

        let image = compose(&mut self.tiles, &placement)?;
        info!(
            steps,
            width = image.cols(),
            height = image.rows(),
            "assembled image"
        );

        Ok(Assembly {
            placement,
            image,
            steps,
        })
    }

    /// Assemble and scan for `pattern`
    ///
    /// # Errors
    ///
    /// Returns an error if assembly fails or the pattern is in no orientation
    pub fn habitat(&mut self, pattern: &Pattern) -> Result<Habitat> {
        let assembly = self.assemble()?;
        pattern
            .scan(&assembly.image)
            .ok_or(PuzzleError::PatternNotFound)
    }

    /// Assemble and measure sea monster roughness
    ///
    /// # Errors
    ///
    /// Returns an error if assembly fails or no sea monster is found
    pub fn roughness(&mut self) -> Result<usize> {
        self.habitat(&Pattern::sea_monster())
            .map(|habitat| habitat.roughness)
    }
}
