//! Tile text parsing
//!
//! Input is a sequence of blocks, each a `Tile <id>:` header followed by rows
//! of `#` and `.`. Blocks are separated by blank lines.

use std::path::Path;

use crate::io::error::{PuzzleError, Result, parse_error};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{Tile, TileId, TileSet};

const HEADER_PREFIX: &str = "Tile ";
const HEADER_SUFFIX: char = ':';

struct Block<'a> {
    id: TileId,
    header_line: usize,
    rows: Vec<&'a str>,
}

impl Block<'_> {
    fn into_tile(self) -> Result<Tile> {
        if self.rows.is_empty() {
            return Err(parse_error(
                self.header_line,
                &format!("tile {} has no rows", self.id),
            ));
        }
        let grid = Grid::from_lines(&self.rows).map_err(|e| match e {
            // Re-anchor row numbers to the file
            PuzzleError::Parse { line, reason } => PuzzleError::Parse {
                line: self.header_line + line,
                reason,
            },
            other => other,
        })?;
        Tile::new(self.id, grid)
    }
}

fn parse_header(line: &str, number: usize) -> Result<TileId> {
    line.strip_prefix(HEADER_PREFIX)
        .and_then(|rest| rest.strip_suffix(HEADER_SUFFIX))
        .ok_or_else(|| parse_error(number, &format!("expected 'Tile <id>:', found '{line}'")))?
        .trim()
        .parse::<TileId>()
        .map_err(|e| parse_error(number, &format!("invalid tile id: {e}")))
}

/// Parse every tile block in `text`
///
/// A trailing block need not be followed by a blank line; surrounding
/// whitespace and CRLF line endings are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - A block does not start with a `Tile <id>:` header
/// - A header is followed by no rows
/// - A row contains characters other than `#` and `.`, or rows differ in length
/// - The grid is not square
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            if let Some(block) = current.take() {
                tiles.push(block.into_tile()?);
            }
            continue;
        }

        match current.as_mut() {
            Some(block) => block.rows.push(line),
            None => {
                current = Some(Block {
                    id: parse_header(line, number)?,
                    header_line: number,
                    rows: Vec::new(),
                });
            }
        }
    }

    if let Some(block) = current.take() {
        tiles.push(block.into_tile()?);
    }

    Ok(tiles)
}

/// Read a tile file into a validated tile set
///
/// # Errors
///
/// Returns an error if the file cannot be read, fails to parse, or the
/// tiles fail `TileSet` validation
pub fn read_tiles(path: &Path) -> Result<TileSet> {
    let text = std::fs::read_to_string(path).map_err(|e| PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tiles",
        source: e,
    })?;
    TileSet::new(parse_tiles(&text)?)
}

/// Render tiles in the text format `parse_tiles` reads
///
/// Each tile is written in its currently materialized orientation.
pub fn render_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> String {
    let mut text = String::new();
    for tile in tiles {
        text.push_str(&format!("{HEADER_PREFIX}{}{HEADER_SUFFIX}\n", tile.id()));
        for line in tile.grid().to_lines() {
            text.push_str(&line);
            text.push('\n');
        }
        text.push('\n');
    }
    text
}
