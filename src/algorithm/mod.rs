/// Used-tile tracking for backtracking
pub mod bitset;
/// Corner, edge and interior tile classification
pub mod classification;
/// Composite image assembly from placed tiles
pub mod compositor;
/// End-to-end puzzle orchestration
pub mod executor;
/// Backtracking tile placement
pub mod solver;
