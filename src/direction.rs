use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A single cardinal step. Declaration order is the search order used by
/// every breadth-first expansion in this crate.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Neighbor expansion order: North, East, South, West.
pub const SEARCH_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// `(row, col)` delta of one step.
    #[inline]
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// The value handed back to the game host each turn.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Action {
    North,
    South,
    East,
    West,
    Stay,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Action::North,
            Direction::East => Action::East,
            Direction::South => Action::South,
            Direction::West => Action::West,
        }
    }
}

/// No direction means the hero stays where it is.
impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(Action::from).unwrap_or(Action::Stay)
    }
}

impl Action {
    /// Interpret a host response tag. Anything unrecognised is `Stay`.
    pub fn from_tag(tag: &str) -> Action {
        tag.parse().unwrap_or(Action::Stay)
    }
}
