//! Error types for parsing, classification, assembly and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Tile text could not be parsed
    Parse {
        /// One-based line number where parsing failed
        line: usize,
        /// Description of what was expected
        reason: String,
    },

    /// Tile grids don't meet assembly requirements
    ///
    /// Raised for non-square or non-uniform grids, grids too small to lose
    /// their border ring, duplicate identifiers, or a tile count that is not
    /// the square of a side of at least two.
    InvalidTileData {
        /// Description of what's wrong with the tile data
        reason: String,
    },

    /// A tile has a number of globally unique borders no position can explain
    Classification {
        /// Identifier of the offending tile
        tile_id: u32,
        /// Number of borders shared with no other tile
        unique_borders: usize,
    },

    /// Corner or edge tile count disagrees with the board size
    CategoryCount {
        /// Category name (`corner` or `edge`)
        category: &'static str,
        /// Count required by the board size
        expected: usize,
        /// Count actually found
        found: usize,
    },

    /// Every candidate arrangement was exhausted without filling the board
    NoPlacement {
        /// Backtracking steps spent before giving up
        steps: usize,
    },

    /// Backtracking exceeded the configured step budget
    StepLimitExceeded {
        /// The budget that was exceeded
        limit: usize,
    },

    /// The scan pattern appears in no orientation of the assembled image
    PatternNotFound,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Internal invariant broken during a computation
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { line, reason } => write!(f, "Parse error on line {line}: {reason}"),
            Self::InvalidTileData { reason } => write!(f, "Invalid tile data: {reason}"),
            Self::Classification {
                tile_id,
                unique_borders,
            } => {
                write!(
                    f,
                    "Tile {tile_id} has {unique_borders} unmatched borders (expected 0, 1 or 2)"
                )
            }
            Self::CategoryCount {
                category,
                expected,
                found,
            } => {
                write!(f, "Found {found} {category} tiles, expected {expected}")
            }
            Self::NoPlacement { steps } => {
                write!(f, "No placement found after {steps} backtracking steps")
            }
            Self::StepLimitExceeded { limit } => {
                write!(f, "Backtracking exceeded the step limit of {limit}")
            }
            Self::PatternNotFound => write!(f, "Pattern not found in any orientation"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl PuzzleError {
    /// Whether the error reflects malformed input rather than a failed search
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::InvalidTileData { .. }
                | Self::Classification { .. }
                | Self::CategoryCount { .. }
        )
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invalid tile data error
pub fn invalid_tile_data(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidTileData {
        reason: reason.to_string(),
    }
}

/// Create a parse error for a one-based line number
pub fn parse_error(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Parse {
        line,
        reason: reason.to_string(),
    }
}
