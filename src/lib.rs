pub mod board;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod location;
pub mod policy;
pub mod radius;
pub mod search;
pub mod strategy;
pub mod tactics;
pub mod tile;

pub use board::{Board, BoardBuilder, GameData};
pub use config::TacticsConfig;
pub use direction::{Action, Direction};
pub use error::{BoardError, PredicateError};
pub use location::Location;
pub use policy::{decide, decide_with, Decision, Rule};
pub use strategy::{BalancedStrategy, Strategy};
pub use tile::{HeroInfo, Owner, Tile, TileKind};
