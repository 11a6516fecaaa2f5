//! Pattern detection over assembled images

/// Multi-orientation pattern matching and roughness measurement
pub mod patterns;

pub use patterns::{Habitat, Pattern};
