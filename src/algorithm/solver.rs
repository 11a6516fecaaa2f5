//! Backtracking placement of classified tiles onto a square board
//!
//! The search runs in three phases. Corner arrangements are enumerated
//! lazily with one corner pinned top-left and the other three permuted, each
//! tile oriented so its two unique borders face outward. Every arrangement
//! is then extended along the sides (left and right columns woven top to
//! bottom, then top and bottom rows left to right) and finally through the
//! interior in row-major order. Each placement is undone before the next
//! candidate is tried, so a failed branch leaves nothing behind.

use ndarray::{Array2, ArrayView1};
use tracing::{debug, trace};

use crate::algorithm::bitset::UsedTiles;
use crate::algorithm::classification::{Category, Classification};
use crate::io::configuration::DEFAULT_MAX_STEPS;
use crate::io::error::{PuzzleError, Result, computation_error};
use crate::spatial::grid::{Borders, Side};
use crate::spatial::orientation::Orientation;
use crate::spatial::tiles::{TileId, TileSet};

/// Search limits for one solve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Candidate trials allowed before the search fails fast
    pub max_steps: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Corner cells of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Row 0, column 0
    TopLeft,
    /// Row 0, last column
    TopRight,
    /// Last row, column 0
    BottomLeft,
    /// Last row, last column
    BottomRight,
}

impl Corner {
    /// All corners; the first is where the pinned corner tile goes
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The two board edges this corner touches
    pub const fn sides(self) -> [Side; 2] {
        match self {
            Self::TopLeft => [Side::Top, Side::Left],
            Self::TopRight => [Side::Top, Side::Right],
            Self::BottomLeft => [Side::Bottom, Side::Left],
            Self::BottomRight => [Side::Bottom, Side::Right],
        }
    }

    /// Board cell of this corner
    pub const fn position(self, tiles_per_side: usize) -> (usize, usize) {
        let last = tiles_per_side.saturating_sub(1);
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, last),
            Self::BottomLeft => (last, 0),
            Self::BottomRight => (last, last),
        }
    }
}

/// A tile fixed into a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placed {
    /// Tile index within the `TileSet`
    pub tile: usize,
    /// Orientation the tile is placed in
    pub orientation: Orientation,
}

/// Partially filled board owned by one search attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Option<Placed>>,
}

impl Board {
    /// Empty board `tiles_per_side` cells wide
    pub fn new(tiles_per_side: usize) -> Self {
        Self {
            cells: Array2::from_elem((tiles_per_side, tiles_per_side), None),
        }
    }

    /// Board side measured in tiles
    pub fn tiles_per_side(&self) -> usize {
        self.cells.nrows()
    }

    /// Placement at a cell, if filled
    pub fn get(&self, row: usize, col: usize) -> Option<Placed> {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Fill a cell, returning whether the cell exists
    pub fn place(&mut self, row: usize, col: usize, placed: Placed) -> bool {
        self.cells
            .get_mut((row, col))
            .map(|cell| *cell = Some(placed))
            .is_some()
    }

    /// Empty a cell, returning what was there
    pub fn clear(&mut self, row: usize, col: usize) -> Option<Placed> {
        self.cells.get_mut((row, col)).and_then(Option::take)
    }

    /// Filled neighbour across one side of a cell
    pub fn neighbour(&self, row: usize, col: usize, side: Side) -> Option<Placed> {
        let (next_row, next_col) = side.step(row, col, self.cells.dim())?;
        self.get(next_row, next_col)
    }

    /// Whether every cell is filled
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Tile indices currently on the board
    pub fn placed_tiles(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().flatten().map(|placed| placed.tile)
    }

    /// Convert a complete board into a placement
    pub fn into_placement(self) -> Option<Placement> {
        let dim = self.cells.dim();
        let cells: Option<Vec<Placed>> = self.cells.iter().copied().collect();
        cells
            .and_then(|cells| Array2::from_shape_vec(dim, cells).ok())
            .map(|cells| Placement { cells })
    }
}

/// Fully resolved board: a tile and orientation for every cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    cells: Array2<Placed>,
}

impl Placement {
    /// Board side measured in tiles
    pub fn tiles_per_side(&self) -> usize {
        self.cells.nrows()
    }

    /// Placement at a cell
    pub fn get(&self, row: usize, col: usize) -> Option<Placed> {
        self.cells.get((row, col)).copied()
    }

    /// Board rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Placed>> {
        self.cells.rows().into_iter()
    }

    /// Every placement in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Placed> + '_ {
        self.cells.iter().copied()
    }

    /// Identifiers at the four board corners, in `Corner::ALL` order
    pub fn corner_ids(&self, tiles: &TileSet) -> Vec<TileId> {
        Corner::ALL
            .iter()
            .filter_map(|corner| {
                let (row, col) = corner.position(self.tiles_per_side());
                self.get(row, col)
                    .and_then(|placed| tiles.get(placed.tile))
                    .map(|tile| tile.id())
            })
            .collect()
    }
}

/// Search phase a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Non-corner cell on a board edge; the side faces outward
    Side(Side),
    /// Cell with no board edge
    Interior,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    row: usize,
    col: usize,
    phase: Phase,
}

/// Side cells in visiting order: left/right woven by row, then top/bottom by column
fn side_slots(tiles_per_side: usize) -> impl Iterator<Item = Slot> {
    let last = tiles_per_side.saturating_sub(1);
    let columns = (1..last).flat_map(move |row| {
        [
            Slot {
                row,
                col: 0,
                phase: Phase::Side(Side::Left),
            },
            Slot {
                row,
                col: last,
                phase: Phase::Side(Side::Right),
            },
        ]
    });
    let rows = (1..last).flat_map(move |col| {
        [
            Slot {
                row: 0,
                col,
                phase: Phase::Side(Side::Top),
            },
            Slot {
                row: last,
                col,
                phase: Phase::Side(Side::Bottom),
            },
        ]
    });
    columns.chain(rows)
}

/// Interior cells in row-major order
fn interior_slots(tiles_per_side: usize) -> impl Iterator<Item = Slot> {
    let last = tiles_per_side.saturating_sub(1);
    (1..last).flat_map(move |row| {
        (1..last).map(move |col| Slot {
            row,
            col,
            phase: Phase::Interior,
        })
    })
}

// Remaining corners in every order; 3! = 6
const PERMUTATIONS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Lazy enumeration of corner placements
///
/// The first corner tile stays top-left; the rest are permuted over the
/// other three corners. For each assignment every combination of outward-
/// facing orientations is produced, odometer style.
#[derive(Debug, Clone)]
pub struct CornerArrangements {
    tiles: [usize; 4],
    // Outward-facing orientations, by tile slot then by corner
    options: [[Vec<Orientation>; 4]; 4],
    tiles_per_side: usize,
    permutation: usize,
    choice: [usize; 4],
}

impl CornerArrangements {
    // Tile slots for each corner; slot 0 is pinned top-left
    const fn assignment(order: [usize; 3]) -> [usize; 4] {
        let [a, b, c] = order;
        [0, a + 1, b + 1, c + 1]
    }

    fn options_for(
        options_by_slot: &[[Vec<Orientation>; 4]; 4],
        slots: [usize; 4],
    ) -> Option<[&[Orientation]; 4]> {
        let mut options: [&[Orientation]; 4] = [&[]; 4];
        for ((option, slot), corner) in options.iter_mut().zip(slots).zip(0..4) {
            *option = options_by_slot
                .get(slot)
                .and_then(|per_corner| per_corner.get(corner))
                .map(Vec::as_slice)
                .filter(|candidates| !candidates.is_empty())?;
        }
        Some(options)
    }

    fn next_permutation(&mut self) {
        self.permutation += 1;
        self.choice = [0; 4];
    }
}

impl Iterator for CornerArrangements {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        while let Some(&order) = PERMUTATIONS.get(self.permutation) {
            let slots = Self::assignment(order);
            let Some(options) = Self::options_for(&self.options, slots) else {
                self.next_permutation();
                continue;
            };

            let mut board = Board::new(self.tiles_per_side);
            for (((corner, slot), candidates), &choice) in Corner::ALL
                .iter()
                .zip(slots)
                .zip(options)
                .zip(&self.choice)
            {
                let (Some(&tile), Some(&orientation)) =
                    (self.tiles.get(slot), candidates.get(choice))
                else {
                    return None;
                };
                let (row, col) = corner.position(self.tiles_per_side);
                board.place(row, col, Placed { tile, orientation });
            }

            // Advance the odometer, last corner fastest
            let mut carried = true;
            for (digit, candidates) in self.choice.iter_mut().zip(options).rev() {
                *digit += 1;
                if *digit < candidates.len() {
                    carried = false;
                    break;
                }
                *digit = 0;
            }
            if carried {
                self.next_permutation();
            }

            return Some(board);
        }
        None
    }
}

/// Backtracking solver over a classified tile set
///
/// Owns all search state for one solve; nothing is shared between solves.
pub struct Solver<'a> {
    tiles: &'a TileSet,
    classification: &'a Classification,
    config: SolverConfig,
    // Borders of every tile under every orientation, by tile then orientation index
    borders: Vec<[Borders; 8]>,
    steps: usize,
    arrangements_tried: usize,
}

impl<'a> Solver<'a> {
    /// Prepare a solver, precomputing every tile's borders in every orientation
    pub fn new(tiles: &'a TileSet, classification: &'a Classification, config: SolverConfig) -> Self {
        let borders = tiles
            .iter()
            .map(|tile| Orientation::ALL.map(|orientation| tile.borders_at(orientation)))
            .collect();

        Self {
            tiles,
            classification,
            config,
            borders,
            steps: 0,
            arrangements_tried: 0,
        }
    }

    /// Candidate trials spent so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Corner arrangements attempted so far
    pub const fn arrangements_tried(&self) -> usize {
        self.arrangements_tried
    }

    /// Search for a complete placement
    ///
    /// Returns `Ok(None)` when every corner arrangement has been exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The step budget is exceeded
    /// - The corner partition does not hold exactly four tiles
    pub fn solve(&mut self) -> Result<Option<Placement>> {
        let tiles_per_side = self.tiles.tiles_per_side();
        let slots: Vec<Slot> = side_slots(tiles_per_side)
            .chain(interior_slots(tiles_per_side))
            .collect();

        for mut board in self.corner_arrangements()? {
            self.tick()?;
            self.arrangements_tried += 1;
            if !self.corners_fit(&board) {
                continue;
            }
            trace!(arrangement = self.arrangements_tried, "trying corner arrangement");

            let mut used = UsedTiles::new(self.tiles.len());
            for tile in board.placed_tiles() {
                used.insert(tile);
            }

            if self.fill(&mut board, &slots, &mut used)? {
                if !used.is_full() {
                    return Err(computation_error(
                        "solve",
                        &format!("filled board leaves tiles unused: {used}"),
                    ));
                }
                debug!(
                    steps = self.steps,
                    arrangements = self.arrangements_tried,
                    "placement found"
                );
                return board
                    .into_placement()
                    .map(Some)
                    .ok_or_else(|| computation_error("solve", &"filled board has empty cells"));
            }
        }

        debug!(steps = self.steps, "corner arrangements exhausted");
        Ok(None)
    }

    /// Enumerate corner placements with outward-facing unique borders
    ///
    /// # Errors
    ///
    /// Returns an error if the classification does not hold exactly four corners
    pub fn corner_arrangements(&self) -> Result<CornerArrangements> {
        let corners = self.classification.corners();
        let Ok(tiles) = <[usize; 4]>::try_from(corners) else {
            return Err(PuzzleError::CategoryCount {
                category: Category::Corner.name(),
                expected: 4,
                found: corners.len(),
            });
        };

        let options =
            tiles.map(|tile| Corner::ALL.map(|corner| self.corner_orientations(tile, corner)));

        Ok(CornerArrangements {
            tiles,
            options,
            tiles_per_side: self.tiles.tiles_per_side(),
            permutation: 0,
            choice: [0; 4],
        })
    }

    fn corner_orientations(&self, tile: usize, corner: Corner) -> Vec<Orientation> {
        let [first, second] = corner.sides();
        Orientation::ALL
            .into_iter()
            .filter(|&orientation| {
                self.oriented_borders(tile, orientation)
                    .is_some_and(|borders| {
                        let (a, b) = (borders.get(first), borders.get(second));
                        self.classification.is_unique(tile, a)
                            && self.classification.is_unique(tile, b)
                            && !a.matches(b)
                    })
            })
            .collect()
    }

    fn oriented_borders(&self, tile: usize, orientation: Orientation) -> Option<&Borders> {
        self.borders
            .get(tile)
            .and_then(|per_orientation| per_orientation.get(usize::from(orientation.index())))
    }

    fn tick(&mut self) -> Result<()> {
        self.steps += 1;
        if self.steps > self.config.max_steps {
            return Err(PuzzleError::StepLimitExceeded {
                limit: self.config.max_steps,
            });
        }
        Ok(())
    }

    // Corners only touch each other on a 2x2 board
    fn corners_fit(&self, board: &Board) -> bool {
        Corner::ALL.iter().all(|corner| {
            let (row, col) = corner.position(board.tiles_per_side());
            board.get(row, col).is_some_and(|placed| {
                self.oriented_borders(placed.tile, placed.orientation)
                    .is_some_and(|borders| self.fits(board, row, col, borders))
            })
        })
    }

    /// Whether `borders` agree with every filled neighbour of a cell
    ///
    /// Facing borders are read in the same direction on both tiles, so a
    /// geometric match is plain equality.
    fn fits(&self, board: &Board, row: usize, col: usize, borders: &Borders) -> bool {
        Side::ALL.into_iter().all(|side| {
            board.neighbour(row, col, side).is_none_or(|neighbour| {
                self.oriented_borders(neighbour.tile, neighbour.orientation)
                    .is_some_and(|theirs| borders.get(side) == theirs.get(side.opposite()))
            })
        })
    }

    fn accepts(&self, board: &Board, slot: Slot, tile: usize, orientation: Orientation) -> bool {
        let Some(borders) = self.oriented_borders(tile, orientation) else {
            return false;
        };
        let faces_out = match slot.phase {
            Phase::Side(outward) => self.classification.is_unique(tile, borders.get(outward)),
            Phase::Interior => true,
        };
        faces_out && self.fits(board, slot.row, slot.col, borders)
    }

    fn fill(&mut self, board: &mut Board, slots: &[Slot], used: &mut UsedTiles) -> Result<bool> {
        let Some((&slot, rest)) = slots.split_first() else {
            return Ok(true);
        };

        let category = match slot.phase {
            Phase::Side(_) => Category::Edge,
            Phase::Interior => Category::Interior,
        };
        let classification = self.classification;

        for &tile in classification.of(category) {
            if used.contains(tile) {
                continue;
            }
            for orientation in Orientation::ALL {
                self.tick()?;
                if !self.accepts(board, slot, tile, orientation) {
                    continue;
                }

                board.place(slot.row, slot.col, Placed { tile, orientation });
                used.insert(tile);
                if self.fill(board, rest, used)? {
                    return Ok(true);
                }
                board.clear(slot.row, slot.col);
                used.remove(tile);
            }
        }

        Ok(false)
    }
}
