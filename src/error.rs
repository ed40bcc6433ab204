//! Error types.
//!
//! A search that finds nothing is not an error; it is `None`. The types here
//! cover malformed snapshots handed to us by the host and faults raised by
//! caller-supplied predicates.

use crate::location::Location;
use thiserror::Error;

/// Rejected board or game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board side length must be at least 1")]
    EmptyBoard,

    #[error("expected {expected} tiles for a square board, got {actual}")]
    TileCount { expected: usize, actual: usize },

    #[error("tile at index {index} claims ({row}, {col})")]
    MisplacedTile { index: usize, row: u16, col: u16 },

    #[error("coordinate ({row}, {col}) is outside a board of side {side}")]
    OutOfBounds { row: u32, col: u32, side: usize },

    #[error("active hero location {0} does not hold a hero")]
    ActiveHeroMissing(Location),
}

/// Raised by a fallible tile predicate. The search treats it as "no match".
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PredicateError {
    #[error("{0}")]
    Other(String),
}
