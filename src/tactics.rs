//! Tactical predicates and the queries built on them.
//!
//! Predicates are plain functions of the game snapshot and a tile. None of
//! them has side effects, so the order they are evaluated in never matters.
//! `TileClass` names the closed set of predicates so they can be passed
//! around as values, and `TacticalView` bundles a snapshot with its config
//! to answer "where is the nearest X" questions from the active hero.

use crate::board::*;
use crate::config::*;
use crate::location::*;
use crate::radius::*;
use crate::search::*;
use crate::tile::*;
use fnv::FnvHashSet;
use itertools::Itertools;
use log::*;

pub fn is_ally(game: &GameData, tile: &Tile) -> bool {
    matches!(tile.hero(), Some(info) if info.team == game.active_hero().team)
}

pub fn is_enemy(game: &GameData, tile: &Tile) -> bool {
    matches!(tile.hero(), Some(info) if info.team != game.active_hero().team)
}

/// An enemy with strictly less health than the active hero.
pub fn is_weaker_enemy(game: &GameData, tile: &Tile) -> bool {
    is_enemy(game, tile)
        && matches!(tile.hero(), Some(info) if info.health < game.active_hero().health)
}

pub fn is_well(tile: &Tile) -> bool {
    tile.is_health_well()
}

/// A diamond mine that is unowned or held by another team.
pub fn is_non_team_mine(game: &GameData, tile: &Tile) -> bool {
    match tile.mine_owner() {
        Some(Some(owner)) => owner.team != game.active_hero().team,
        Some(None) => true,
        None => false,
    }
}

/// A diamond mine that is unowned or held by anyone but the active hero,
/// teammates included.
pub fn is_unowned_mine(game: &GameData, tile: &Tile) -> bool {
    match tile.mine_owner() {
        Some(Some(owner)) => owner.id != game.active_hero().id,
        Some(None) => true,
        None => false,
    }
}

/// An enemy that can be attacked safely: no well within reach of it, no
/// second enemy close to both it and the active hero, and at least
/// `kill_margin` less health than the active hero.
pub fn is_vulnerable_enemy(game: &GameData, tile: &Tile, config: &TacticsConfig) -> bool {
    let info = match tile.hero() {
        Some(info) if is_enemy(game, tile) => info,
        _ => return false,
    };

    let board = game.board();
    let around_target = tiles_in_path_circle(board, tile.location, config.support_radius);

    if around_target.iter().any(|t| is_well(t)) {
        return false;
    }

    let enemies_near_target: Vec<&Tile> = around_target
        .into_iter()
        .filter(|t| is_enemy(game, t))
        .collect();
    let enemies_near_hero: Vec<&Tile> =
        tiles_in_path_circle(board, game.active_hero_location(), config.support_radius)
            .into_iter()
            .filter(|t| is_enemy(game, t))
            .collect();

    if intersection(&enemies_near_hero, &enemies_near_target).len() > 1 {
        return false;
    }

    info.health <= game.active_hero().health.saturating_sub(config.kill_margin)
}

/// The closed set of tile predicates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileClass {
    Ally,
    Enemy,
    WeakerEnemy,
    Well,
    NonTeamMine,
    UnownedMine,
    VulnerableEnemy,
    /// Exactly the tile at this location.
    At(Location),
}

/// A game snapshot seen through a tactics config.
#[derive(Copy, Clone)]
pub struct TacticalView<'a> {
    game: &'a GameData,
    config: &'a TacticsConfig,
}

impl<'a> TacticalView<'a> {
    pub fn new(game: &'a GameData, config: &'a TacticsConfig) -> Self {
        TacticalView { game, config }
    }

    pub fn game(&self) -> &'a GameData {
        self.game
    }

    pub fn config(&self) -> &'a TacticsConfig {
        self.config
    }

    pub fn board(&self) -> &'a Board {
        self.game.board()
    }

    pub fn hero(&self) -> &'a HeroInfo {
        self.game.active_hero()
    }

    pub fn hero_location(&self) -> Location {
        self.game.active_hero_location()
    }

    pub fn matches(&self, class: TileClass, tile: &Tile) -> bool {
        match class {
            TileClass::Ally => is_ally(self.game, tile),
            TileClass::Enemy => is_enemy(self.game, tile),
            TileClass::WeakerEnemy => is_weaker_enemy(self.game, tile),
            TileClass::Well => is_well(tile),
            TileClass::NonTeamMine => is_non_team_mine(self.game, tile),
            TileClass::UnownedMine => is_unowned_mine(self.game, tile),
            TileClass::VulnerableEnemy => is_vulnerable_enemy(self.game, tile, self.config),
            TileClass::At(loc) => tile.location == loc,
        }
    }

    /// Nearest reachable tile of the given class, from the active hero.
    pub fn nearest(&self, class: TileClass) -> Option<PathInfo> {
        find_nearest(self.board(), self.hero_location(), |tile| {
            self.matches(class, tile)
        })
    }

    pub fn nearest_health_well(&self) -> Option<PathInfo> {
        self.nearest(TileClass::Well)
    }

    pub fn nearest_enemy(&self) -> Option<PathInfo> {
        self.nearest(TileClass::Enemy)
    }

    pub fn nearest_weaker_enemy(&self) -> Option<PathInfo> {
        self.nearest(TileClass::WeakerEnemy)
    }

    pub fn nearest_team_member(&self) -> Option<PathInfo> {
        self.nearest(TileClass::Ally)
    }

    pub fn nearest_non_team_mine(&self) -> Option<PathInfo> {
        self.nearest(TileClass::NonTeamMine)
    }

    pub fn nearest_unowned_mine(&self) -> Option<PathInfo> {
        self.nearest(TileClass::UnownedMine)
    }

    /// Route to one specific tile.
    pub fn find_tile(&self, target: Location) -> Option<PathInfo> {
        self.nearest(TileClass::At(target))
    }

    /// Enemies within Manhattan distance `radius` of `origin`.
    pub fn num_nearby_enemies(&self, origin: Location, radius: i32) -> usize {
        tiles_in_manhattan_circle(self.board(), origin, radius)
            .into_iter()
            .filter(|t| is_enemy(self.game, t))
            .count()
    }

    /// Allies within Manhattan distance `radius` of `origin`. Counts the
    /// active hero itself when it is in range.
    pub fn num_nearby_allies(&self, origin: Location, radius: i32) -> usize {
        tiles_in_manhattan_circle(self.board(), origin, radius)
            .into_iter()
            .filter(|t| is_ally(self.game, t))
            .count()
    }

    /// Nearest reachable tile of `class` among those with the fewest enemies
    /// nearby.
    ///
    /// Candidates are scored in row-major order and grouped by enemy count.
    /// Groups are tried from the quietest up; within a group the normal
    /// search order decides. A group with no reachable member is skipped.
    pub fn nearest_with_min_enemies(&self, class: TileClass) -> Option<PathInfo> {
        let radius = self.config.nearby_enemy_radius;
        let scored = self
            .board()
            .tiles()
            .filter(|tile| self.matches(class, tile))
            .map(|tile| (tile.location, self.num_nearby_enemies(tile.location, radius)))
            .sorted_by_key(|&(_, enemies)| enemies);

        for (enemies, group) in &scored.group_by(|&(_, enemies)| enemies) {
            let candidates: FnvHashSet<Location> = group.map(|(loc, _)| loc).collect();
            trace!(
                "{:?}: trying {} candidates with {} nearby enemies",
                class,
                candidates.len(),
                enemies
            );
            let found = find_nearest(self.board(), self.hero_location(), |tile| {
                candidates.contains(&tile.location)
            });
            if found.is_some() {
                return found;
            }
        }

        None
    }
}
