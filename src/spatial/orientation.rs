//! Eight-way orientation encoding shared by tiles and assembled images

use std::fmt;

/// One of the eight rotations and reflections of a square grid
///
/// The low bit selects a vertical flip (row order reversed), applied before
/// rotating. The remaining two bits count quarter turns, where one quarter
/// turn makes new row `i` equal to old column `last - i` read top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Orientation(u8);

impl Orientation {
    /// The untransformed orientation
    pub const IDENTITY: Self = Self(0);

    /// Every orientation, in index order
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Orientation from a flip flag and a quarter-turn count (taken modulo 4)
    pub const fn from_parts(flipped: bool, quarter_turns: u8) -> Self {
        Self(((quarter_turns % 4) << 1) | flipped as u8)
    }

    /// Index in `0..8`
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Whether rows are reversed before rotating
    pub const fn is_flipped(self) -> bool {
        self.0 & 1 == 1
    }

    /// Number of quarter turns applied after the optional flip
    pub const fn quarter_turns(self) -> u8 {
        self.0 >> 1
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = u16::from(self.quarter_turns()) * 90;
        if self.is_flipped() {
            write!(f, "flip+rot{degrees}")
        } else {
            write!(f, "rot{degrees}")
        }
    }
}
