//! Boolean cell grids, orientation transforms and border fingerprints
//!
//! Every grid transform is expressed as an `ndarray` view over the untouched
//! source cells, so probing an orientation never copies or mutates anything.
//! Borders are read top/bottom left-to-right and left/right top-to-bottom.

use bitvec::prelude::*;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis, Slice};
use std::fmt;

use crate::io::configuration::{CLEAR_CELL, SET_CELL};
use crate::io::error::{Result, invalid_tile_data, parse_error};
use crate::spatial::orientation::Orientation;

/// One side of a rectangular grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First row
    Top,
    /// Last row
    Bottom,
    /// First column
    Left,
    /// Last column
    Right,
}

impl Side {
    /// All four sides
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The side facing this one across a shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Neighbouring cell in this direction, if it stays within `size`
    pub fn step(self, row: usize, col: usize, size: (usize, usize)) -> Option<(usize, usize)> {
        let (rows, cols) = size;
        let (next_row, next_col) = match self {
            Self::Top => (row.checked_sub(1)?, col),
            Self::Bottom => (row.checked_add(1)?, col),
            Self::Left => (row, col.checked_sub(1)?),
            Self::Right => (row, col.checked_add(1)?),
        };
        (next_row < rows && next_col < cols).then_some((next_row, next_col))
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Ordered cell states along one edge of a grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Border(BitVec);

impl Border {
    /// Build a fingerprint from cells in reading order
    pub fn from_cells(cells: impl IntoIterator<Item = bool>) -> Self {
        Self(cells.into_iter().collect())
    }

    /// The same edge read in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut bits = self.0.clone();
        bits.reverse();
        Self(bits)
    }

    /// Representative shared by a fingerprint and its reversal
    ///
    /// Two physical edges that can be made to touch have equal canonical forms.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let reversed = self.reversed();
        if reversed < *self { reversed } else { self.clone() }
    }

    /// Equality up to reading direction
    pub fn matches(&self, other: &Self) -> bool {
        self == other || self.reversed() == *other
    }

    /// Number of cells along the edge
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the edge has no cells
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of set cells along the edge
    pub fn count_set(&self) -> usize {
        self.0.count_ones()
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0.iter().by_vals() {
            write!(f, "{}", if bit { SET_CELL } else { CLEAR_CELL })?;
        }
        Ok(())
    }
}

fn edge(lane: Option<ArrayView1<'_, bool>>) -> Border {
    Border::from_cells(lane.into_iter().flatten().copied())
}

/// The four border fingerprints of a grid in one orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borders {
    top: Border,
    bottom: Border,
    left: Border,
    right: Border,
}

impl Borders {
    fn of(view: &ArrayView2<'_, bool>) -> Self {
        Self {
            top: edge(view.axis_iter(Axis(0)).next()),
            bottom: edge(view.axis_iter(Axis(0)).next_back()),
            left: edge(view.axis_iter(Axis(1)).next()),
            right: edge(view.axis_iter(Axis(1)).next_back()),
        }
    }

    /// Fingerprint of one side
    pub const fn get(&self, side: Side) -> &Border {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Fingerprints in `Side::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = &Border> {
        Side::ALL.into_iter().map(|side| self.get(side))
    }
}

/// Apply an orientation to a view without copying cells
pub fn orient_view(view: ArrayView2<'_, bool>, orientation: Orientation) -> ArrayView2<'_, bool> {
    let mut oriented = view;
    if orientation.is_flipped() {
        oriented.invert_axis(Axis(0));
    }
    for _ in 0..orientation.quarter_turns() {
        oriented = quarter_turn(oriented);
    }
    oriented
}

// Transpose then reverse rows: new[i][j] = old[j][last - i]
fn quarter_turn(view: ArrayView2<'_, bool>) -> ArrayView2<'_, bool> {
    let mut turned = view.reversed_axes();
    turned.invert_axis(Axis(0));
    turned
}

/// Rectangular grid of set/clear cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<bool>,
}

impl Grid {
    /// Wrap an existing cell array
    pub const fn new(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Parse rows of `#` (set) and `.` (clear)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A row contains any other character
    /// - Rows differ in length
    /// - There are no rows
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let width = lines
            .first()
            .map(|line| line.as_ref().chars().count())
            .ok_or_else(|| invalid_tile_data(&"grid has no rows"))?;

        let mut cells = Vec::with_capacity(lines.len() * width);
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != width {
                return Err(parse_error(
                    index + 1,
                    &format!(
                        "row has {} cells, expected {width}",
                        line.chars().count()
                    ),
                ));
            }
            for ch in line.chars() {
                match ch {
                    SET_CELL => cells.push(true),
                    CLEAR_CELL => cells.push(false),
                    other => {
                        return Err(parse_error(
                            index + 1,
                            &format!("unexpected cell character '{other}'"),
                        ));
                    }
                }
            }
        }

        let cells = Array2::from_shape_vec((lines.len(), width), cells)
            .map_err(|e| invalid_tile_data(&e))?;
        Ok(Self { cells })
    }

    /// Render rows of `#` and `.`
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell { SET_CELL } else { CLEAR_CELL })
                    .collect()
            })
            .collect()
    }

    /// Underlying cell array
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether rows and columns agree
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Cell state, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get((row, col)).copied()
    }

    /// Number of set cells
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// View of the grid under an orientation
    pub fn oriented_view(&self, orientation: Orientation) -> ArrayView2<'_, bool> {
        orient_view(self.cells.view(), orientation)
    }

    /// Copy of the grid under an orientation
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        Self::new(self.oriented_view(orientation).to_owned())
    }

    /// Borders of the grid as stored
    pub fn borders(&self) -> Borders {
        Borders::of(&self.cells.view())
    }

    /// Borders the grid would have under an orientation
    pub fn borders_at(&self, orientation: Orientation) -> Borders {
        Borders::of(&self.oriented_view(orientation))
    }

    /// Rectangular block of cells anchored at `(row, col)`, if it fits
    pub fn window(
        &self,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    ) -> Option<ArrayView2<'_, bool>> {
        let row_end = row.checked_add(height).filter(|&end| end <= self.rows())?;
        let col_end = col.checked_add(width).filter(|&end| end <= self.cols())?;

        let mut view = self.cells.view();
        view.slice_axis_inplace(Axis(0), Slice::from(row..row_end));
        view.slice_axis_inplace(Axis(1), Slice::from(col..col_end));
        Some(view)
    }

    /// The grid without its outermost ring of cells
    pub fn interior(&self) -> Option<ArrayView2<'_, bool>> {
        let (rows, cols) = self.cells.dim();
        if rows > 2 && cols > 2 {
            self.window(1, 1, rows - 2, cols - 2)
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
