use crate::direction::Direction;
use serde::*;

/// A board coordinate, `row` counted from the top edge and `col` from the
/// left edge.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Location {
    packed: u32,
}

impl Location {
    pub fn from_coords(row: u32, col: u32) -> Self {
        Location {
            packed: ((row & 0xFFFF) << 16) | (col & 0xFFFF),
        }
    }

    #[inline]
    pub fn row(self) -> u16 {
        ((self.packed >> 16) & 0xFFFF) as u16
    }

    #[inline]
    pub fn col(self) -> u16 {
        (self.packed & 0xFFFF) as u16
    }

    #[inline]
    pub fn packed_repr(self) -> u32 {
        self.packed
    }

    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Location { packed }
    }

    pub fn manhattan_distance_to(self, other: Self) -> u32 {
        let dr = (self.row() as i32) - (other.row() as i32);
        let dc = (self.col() as i32) - (other.col() as i32);

        (dr.abs() + dc.abs()) as u32
    }

    /// The coordinate one step away in `direction`, or `None` if it would
    /// fall off a board with the given side length.
    pub fn step(self, direction: Direction, side: usize) -> Option<Location> {
        let (dr, dc) = direction.offset();
        let row = self.row() as i64 + dr as i64;
        let col = self.col() as i64 + dc as i64;

        if valid_coordinates(side, row, col) {
            Some(Location::from_coords(row as u32, col as u32))
        } else {
            None
        }
    }
}

/// True iff `0 <= row, col <= side - 1`.
#[inline]
pub fn valid_coordinates(side: usize, row: i64, col: i64) -> bool {
    let side = side as i64;
    row >= 0 && col >= 0 && row < side && col < side
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.packed_repr().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(Location::from_packed)
    }
}
