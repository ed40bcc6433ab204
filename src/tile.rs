use crate::location::*;
use serde::{Deserialize, Serialize};

/// Team and agent that own a diamond mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner {
    pub team: u32,
    pub id: u32,
}

/// Attributes of a hero standing on a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeroInfo {
    pub team: u32,
    pub id: u32,
    pub health: i32,
}

impl HeroInfo {
    pub fn owner(&self) -> Owner {
        Owner {
            team: self.team,
            id: self.id,
        }
    }
}

/// What occupies a tile this turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Unoccupied,
    Hero(HeroInfo),
    HealthWell,
    DiamondMine { owner: Option<Owner> },
    /// Trees, bones and anything else the host places. Never walkable.
    Obstacle(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "loc")]
    pub location: Location,
    #[serde(rename = "k")]
    pub kind: TileKind,
}

impl Tile {
    pub fn new(location: Location, kind: TileKind) -> Self {
        Tile { location, kind }
    }

    pub fn unoccupied(location: Location) -> Self {
        Tile::new(location, TileKind::Unoccupied)
    }

    #[inline]
    pub fn row(&self) -> u16 {
        self.location.row()
    }

    #[inline]
    pub fn col(&self) -> u16 {
        self.location.col()
    }

    /// Only unoccupied tiles can be walked through.
    #[inline]
    pub fn is_unoccupied(&self) -> bool {
        matches!(self.kind, TileKind::Unoccupied)
    }

    pub fn hero(&self) -> Option<&HeroInfo> {
        match &self.kind {
            TileKind::Hero(info) => Some(info),
            _ => None,
        }
    }

    pub fn is_health_well(&self) -> bool {
        matches!(self.kind, TileKind::HealthWell)
    }

    /// `Some(owner)` for a diamond mine, where `owner` is `None` if nobody
    /// holds it yet. `None` for every other tile.
    pub fn mine_owner(&self) -> Option<Option<Owner>> {
        match &self.kind {
            TileKind::DiamondMine { owner } => Some(*owner),
            _ => None,
        }
    }
}
