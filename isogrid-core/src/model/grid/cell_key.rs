use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// a (column, row) address of a cell in a regular grid. keys are totally ordered
/// by their Z-order (Morton) index so that enumeration is deterministic and
/// neighboring cells tend to sort near one another.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct CellKey {
    pub col: i32,
    pub row: i32,
}

impl CellKey {
    pub fn new(col: i32, row: i32) -> CellKey {
        CellKey { col, row }
    }

    /// interleaves the bits of column (even bits) and row (odd bits).
    /// flipping the sign bit first maps i32 onto u32 while preserving order
    /// along each axis.
    pub fn z_index(&self) -> u64 {
        let x = spread_bits((self.col as u32) ^ 0x8000_0000);
        let y = spread_bits((self.row as u32) ^ 0x8000_0000);
        x | (y << 1)
    }
}

impl Ord for CellKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.z_index().cmp(&other.z_index())
    }
}

impl PartialOrd for CellKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

fn spread_bits(value: u32) -> u64 {
    let mut x = value as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}
