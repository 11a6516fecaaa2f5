//! Solver constants and runtime configuration defaults

// Backtracking budget; a solvable 12x12 board needs a few thousand steps
/// Default maximum number of candidate trials before the solver gives up
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Smallest tile side that still has an interior once its border ring is stripped
pub const MIN_TILE_SIDE: usize = 3;

/// Smallest board side (in tiles) with four distinct corners
pub const MIN_TILES_PER_SIDE: usize = 2;

/// Cell character for a set cell
pub const SET_CELL: char = '#';
/// Cell character for a clear cell
pub const CLEAR_CELL: char = '.';

/// Marker for significant cells in pattern text
pub const PATTERN_MARKER: char = '#';

/// The sea monster pattern searched for in assembled images
pub const SEA_MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

// Scrambler settings
/// Fixed seed for reproducible scrambling
pub const DEFAULT_SEED: u64 = 42;
/// Lowest tile identifier handed out by the scrambler
pub const SCRAMBLE_MIN_ID: u32 = 1000;
/// Number of identifiers available to the scrambler
pub const SCRAMBLE_ID_RANGE: usize = 9000;
/// Lattice redraws before giving up on unique borders
pub const MAX_SCRAMBLE_ATTEMPTS: usize = 256;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Extension of tile files picked up from a directory target
pub const TILE_FILE_EXTENSION: &str = "txt";
/// Suffix added to exported image filenames
pub const OUTPUT_SUFFIX: &str = "_habitat";

/// Export color for clear cells
pub const CLEAR_COLOR: [u8; 4] = [12, 35, 64, 255];
/// Export color for set cells outside any pattern match
pub const SET_COLOR: [u8; 4] = [64, 160, 200, 255];
/// Export color for cells covered by a pattern match
pub const MATCH_COLOR: [u8; 4] = [240, 90, 40, 255];
