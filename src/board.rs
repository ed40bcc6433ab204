use crate::direction::*;
use crate::error::*;
use crate::location::*;
use crate::tile::*;
use log::*;
use serde::{Deserialize, Serialize};

/// A side x side array of per-tile data, indexed row-major.
#[derive(Clone, Debug)]
pub struct BoardDataArray<T: Copy> {
    side: usize,
    data: Vec<T>,
}

impl<T: Copy> BoardDataArray<T> {
    pub fn new(side: usize, initial: T) -> Self {
        BoardDataArray {
            side,
            data: vec![initial; side * side],
        }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> &T {
        &self.data[self.index(loc)]
    }

    #[inline]
    pub fn get_mut(&mut self, loc: Location) -> &mut T {
        let index = self.index(loc);
        &mut self.data[index]
    }

    #[inline]
    pub fn set(&mut self, loc: Location, value: T) {
        *self.get_mut(loc) = value;
    }

    #[inline]
    fn index(&self, loc: Location) -> usize {
        loc.row() as usize * self.side + loc.col() as usize
    }
}

/// Immutable snapshot of a square board for one decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    side: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board from row-major tiles. Every coordinate must be present
    /// exactly once, in order.
    pub fn new(side: usize, tiles: Vec<Tile>) -> Result<Board, BoardError> {
        if side == 0 {
            return Err(BoardError::EmptyBoard);
        }
        if tiles.len() != side * side {
            return Err(BoardError::TileCount {
                expected: side * side,
                actual: tiles.len(),
            });
        }
        for (index, tile) in tiles.iter().enumerate() {
            let row = index / side;
            let col = index % side;
            if tile.row() as usize != row || tile.col() as usize != col {
                return Err(BoardError::MisplacedTile {
                    index,
                    row: tile.row(),
                    col: tile.col(),
                });
            }
        }

        Ok(Board { side, tiles })
    }

    /// Side length N.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn valid_coordinates(&self, row: i64, col: i64) -> bool {
        valid_coordinates(self.side, row, col)
    }

    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        (loc.row() as usize) < self.side && (loc.col() as usize) < self.side
    }

    /// The tile at `loc`, or `None` if it is off the board.
    pub fn get(&self, loc: Location) -> Option<&Tile> {
        if self.contains(loc) {
            Some(&self.tiles[loc.row() as usize * self.side + loc.col() as usize])
        } else {
            None
        }
    }

    pub fn get_rc(&self, row: i64, col: i64) -> Option<&Tile> {
        if self.valid_coordinates(row, col) {
            Some(&self.tiles[row as usize * self.side + col as usize])
        } else {
            None
        }
    }

    /// The tile one step from `loc` in `direction`, if it exists.
    pub fn neighbor(&self, loc: Location, direction: Direction) -> Option<&Tile> {
        if !self.contains(loc) {
            return None;
        }
        loc.step(direction, self.side).and_then(|next| self.get(next))
    }

    /// Like [`Board::neighbor`], but takes the host's textual direction tag.
    /// Unknown tags are treated as "no neighbor".
    pub fn neighbor_by_tag(&self, row: i64, col: i64, tag: &str) -> Option<&Tile> {
        let direction: Direction = match tag.parse() {
            Ok(direction) => direction,
            Err(_) => {
                trace!("Ignoring unknown direction tag '{}'", tag);
                return None;
            }
        };
        let tile = self.get_rc(row, col)?;
        self.neighbor(tile.location, direction)
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.side)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawBoard {
            side: usize,
            tiles: Vec<Tile>,
        }

        let raw = RawBoard::deserialize(deserializer)?;
        Board::new(raw.side, raw.tiles).map_err(serde::de::Error::custom)
    }
}

/// Fluent builder for board snapshots. Every tile starts unoccupied.
pub struct BoardBuilder {
    side: usize,
    kinds: Vec<TileKind>,
    error: Option<BoardError>,
}

impl BoardBuilder {
    pub fn new(side: usize) -> Self {
        BoardBuilder {
            side,
            kinds: vec![TileKind::Unoccupied; side * side],
            error: None,
        }
    }

    /// Place `kind` at (row, col), replacing whatever was there.
    pub fn tile(mut self, row: u32, col: u32, kind: TileKind) -> Self {
        if valid_coordinates(self.side, row as i64, col as i64) {
            let index = row as usize * self.side + col as usize;
            self.kinds[index] = kind;
        } else if self.error.is_none() {
            self.error = Some(BoardError::OutOfBounds {
                row,
                col,
                side: self.side,
            });
        }
        self
    }

    pub fn hero(self, row: u32, col: u32, team: u32, id: u32, health: i32) -> Self {
        self.tile(row, col, TileKind::Hero(HeroInfo { team, id, health }))
    }

    pub fn well(self, row: u32, col: u32) -> Self {
        self.tile(row, col, TileKind::HealthWell)
    }

    pub fn mine(self, row: u32, col: u32, owner: Option<Owner>) -> Self {
        self.tile(row, col, TileKind::DiamondMine { owner })
    }

    pub fn obstacle(self, row: u32, col: u32) -> Self {
        self.tile(row, col, TileKind::Obstacle("Impassable".to_string()))
    }

    pub fn build(self) -> Result<Board, BoardError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let side = self.side;
        let tiles = self
            .kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let loc = Location::from_coords((i / side) as u32, (i % side) as u32);
                Tile::new(loc, kind)
            })
            .collect();
        Board::new(side, tiles)
    }
}

/// Everything a decision gets to see: the board and which hero is moving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameData {
    board: Board,
    active_hero: Location,
    hero: HeroInfo,
}

impl GameData {
    pub fn new(board: Board, active_hero: Location) -> Result<GameData, BoardError> {
        let hero = match board.get(active_hero).and_then(|tile| tile.hero()) {
            Some(info) => *info,
            None => return Err(BoardError::ActiveHeroMissing(active_hero)),
        };
        Ok(GameData {
            board,
            active_hero,
            hero,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_hero_location(&self) -> Location {
        self.active_hero
    }

    pub fn active_hero_tile(&self) -> &Tile {
        let side = self.board.side;
        &self.board.tiles[self.active_hero.row() as usize * side + self.active_hero.col() as usize]
    }

    #[inline]
    pub fn active_hero(&self) -> &HeroInfo {
        &self.hero
    }
}
