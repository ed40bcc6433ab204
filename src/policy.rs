//! The balanced decision policy.
//!
//! An ordered rule cascade evaluated once per turn. Each rule either
//! produces a move or steps aside for the next one; if every rule steps
//! aside the hero stays put.
//!
//! 1. Adjacent enemies: retreat if one of them is backed by a well, drink
//!    from an adjacent well if the fight cannot be won this turn and health
//!    is low, otherwise hit the weakest.
//! 2. Low health: head for the quietest reachable well.
//! 3. Wounded adjacent ally: move onto it.
//! 4. Vulnerable enemy close by: hunt the weakest one.
//! 5. Capturable mine: head for the quietest reachable one.
//! 6. Otherwise head for the quietest reachable well.

use crate::board::*;
use crate::config::*;
use crate::direction::*;
use crate::location::*;
use crate::radius::*;
use crate::search::*;
use crate::tactics::*;
use crate::tile::*;
use log::*;
use serde::{Deserialize, Serialize};

/// Which rule of the cascade produced a decision.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Adjacent enemy is next to a well; fall back to the nearest well.
    RetreatToWell,
    /// Adjacent enemy cannot be finished this turn; heal instead.
    DrinkAdjacentWell,
    /// Hit the weakest adjacent enemy.
    AttackAdjacent,
    /// Health is low; go to the quietest well.
    SeekWell,
    /// Step onto a wounded adjacent ally.
    HealAlly,
    /// Chase an isolated, weaker enemy.
    HuntVulnerable,
    /// Go capture the quietest mine not held by our team.
    CaptureMine,
    /// Nothing urgent; go to the quietest well.
    Consolidate,
    /// No rule found anything to do.
    Stay,
}

/// The action chosen this turn and why.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub rule: Rule,
    /// The tile the hero is moving toward, if any.
    pub target: Option<Location>,
}

impl Decision {
    fn toward(rule: Rule, path: PathInfo) -> Decision {
        Decision {
            action: path.direction.into(),
            rule,
            target: Some(path.location),
        }
    }

    fn stay() -> Decision {
        Decision {
            action: Action::Stay,
            rule: Rule::Stay,
            target: None,
        }
    }
}

/// A hero adjacent to the active one.
struct Adjacent<'a> {
    tile: &'a Tile,
    info: &'a HeroInfo,
}

/// Run the balanced cascade with the default thresholds.
pub fn decide(game: &GameData) -> Action {
    decide_with(game, &TacticsConfig::default()).action
}

/// Run the balanced cascade.
pub fn decide_with(game: &GameData, config: &TacticsConfig) -> Decision {
    let view = TacticalView::new(game, config);

    let decision = engage_adjacent(&view)
        .or_else(|| seek_well(&view))
        .or_else(|| heal_ally(&view))
        .or_else(|| hunt_vulnerable(&view))
        .or_else(|| capture_mine(&view))
        .or_else(|| consolidate(&view))
        .unwrap_or_else(Decision::stay);

    let hero = view.hero_location();
    debug!(
        "Hero {} at ({}, {}) health {}: {:?} -> {}",
        view.hero().id,
        hero.row(),
        hero.col(),
        view.hero().health,
        decision.rule,
        decision.action
    );

    decision
}

/// First step toward exactly the tile at `target`.
fn move_toward(view: &TacticalView, target: Location) -> Option<PathInfo> {
    view.find_tile(target)
}

/// Heroes in the four neighboring tiles that satisfy `class`, in search
/// order.
fn adjacent_heroes<'a>(view: &TacticalView<'a>, class: TileClass) -> Vec<Adjacent<'a>> {
    let board = view.board();
    SEARCH_ORDER
        .iter()
        .filter_map(|&direction| board.neighbor(view.hero_location(), direction))
        .filter(|tile| view.matches(class, tile))
        .filter_map(|tile| tile.hero().map(|info| Adjacent { tile, info }))
        .collect()
}

/// The lowest-health entry; the earliest one wins ties.
fn weakest<'a, 'b>(heroes: &'b [Adjacent<'a>]) -> Option<&'b Adjacent<'a>> {
    heroes.iter().min_by_key(|adjacent| adjacent.info.health)
}

fn engage_adjacent(view: &TacticalView) -> Option<Decision> {
    let enemies = adjacent_heroes(view, TileClass::Enemy);
    let target = weakest(&enemies)?;
    let board = view.board();
    let config = view.config();

    let enemy_has_well = enemies.iter().any(|enemy| {
        tiles_in_manhattan_circle(board, enemy.tile.location, config.well_support_radius)
            .iter()
            .any(|t| is_well(t))
    });

    if enemy_has_well {
        match view.nearest_health_well() {
            Some(path) => return Some(Decision::toward(Rule::RetreatToWell, path)),
            None => debug!("Adjacent enemy is backed by a well but no well is reachable"),
        }
    }

    // With several adjacent wells the last one in search order is used.
    let adjacent_well = SEARCH_ORDER
        .iter()
        .filter_map(|&direction| board.neighbor(view.hero_location(), direction))
        .filter(|tile| is_well(tile))
        .last();

    if let Some(well) = adjacent_well {
        if target.info.health > config.secure_kill_health
            && view.hero().health <= config.min_health
        {
            if let Some(path) = move_toward(view, well.location) {
                return Some(Decision::toward(Rule::DrinkAdjacentWell, path));
            }
        }
    }

    move_toward(view, target.tile.location).map(|path| Decision::toward(Rule::AttackAdjacent, path))
}

fn seek_well(view: &TacticalView) -> Option<Decision> {
    if view.hero().health > view.config().min_health {
        return None;
    }

    view.nearest_with_min_enemies(TileClass::Well)
        .map(|path| Decision::toward(Rule::SeekWell, path))
}

fn heal_ally(view: &TacticalView) -> Option<Decision> {
    let min_health = view.config().min_health;
    let wounded: Vec<Adjacent> = adjacent_heroes(view, TileClass::Ally)
        .into_iter()
        .filter(|ally| ally.info.health <= min_health)
        .collect();
    let target = weakest(&wounded)?;

    move_toward(view, target.tile.location).map(|path| Decision::toward(Rule::HealAlly, path))
}

fn hunt_vulnerable(view: &TacticalView) -> Option<Decision> {
    let radius = view.config().hunt_radius;
    let target = tiles_in_path_circle(view.board(), view.hero_location(), radius)
        .into_iter()
        .filter(|tile| view.matches(TileClass::VulnerableEnemy, tile))
        .filter_map(|tile| tile.hero().map(|info| (tile.location, info.health)))
        .min_by_key(|&(_, health)| health)?;

    move_toward(view, target.0).map(|path| Decision::toward(Rule::HuntVulnerable, path))
}

fn capture_mine(view: &TacticalView) -> Option<Decision> {
    view.nearest_with_min_enemies(TileClass::NonTeamMine)
        .map(|path| Decision::toward(Rule::CaptureMine, path))
}

fn consolidate(view: &TacticalView) -> Option<Decision> {
    view.nearest_with_min_enemies(TileClass::Well)
        .map(|path| Decision::toward(Rule::Consolidate, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: u32, col: u32) -> Location {
        Location::from_coords(row, col)
    }

    fn run(board: BoardBuilder, row: u32, col: u32) -> Decision {
        let game = GameData::new(board.build().unwrap(), loc(row, col)).unwrap();
        decide_with(&game, &TacticsConfig::default())
    }

    #[test]
    fn attacks_weakest_adjacent_enemy() {
        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 100)
                .hero(1, 2, 1, 2, 60)
                .hero(2, 1, 1, 3, 40),
            2,
            2,
        );
        assert_eq!(decision.rule, Rule::AttackAdjacent);
        assert_eq!(decision.action, Action::West);
        assert_eq!(decision.target, Some(loc(2, 1)));
    }

    #[test]
    fn ties_between_adjacent_enemies_go_to_search_order() {
        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 100)
                .hero(2, 1, 1, 2, 40)
                .hero(3, 2, 1, 3, 40),
            2,
            2,
        );
        assert_eq!(decision.action, Action::South);
    }

    #[test]
    fn retreats_from_enemy_backed_by_well() {
        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 100)
                .hero(2, 3, 1, 2, 10)
                .well(2, 4)
                .well(4, 0),
            2,
            2,
        );
        assert_eq!(decision.rule, Rule::RetreatToWell);
        // Both wells are four hops away; the enemy's is found first.
        assert_eq!(decision.target, Some(loc(2, 4)));
        assert_eq!(decision.action, Action::North);
    }

    #[test]
    fn drinks_when_kill_is_out_of_reach() {
        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 60)
                .hero(2, 1, 1, 2, 90)
                .well(3, 2),
            2,
            2,
        );
        assert_eq!(decision.rule, Rule::DrinkAdjacentWell);
        assert_eq!(decision.action, Action::South);

        // Two adjacent wells: the later one in search order is used.
        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 60)
                .hero(2, 1, 1, 2, 90)
                .well(1, 2)
                .well(3, 2),
            2,
            2,
        );
        assert_eq!(decision.rule, Rule::DrinkAdjacentWell);
        assert_eq!(decision.target, Some(loc(3, 2)));
        assert_eq!(decision.action, Action::South);

        // Healthy enough: keep fighting.
        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 80)
                .hero(2, 1, 1, 2, 90)
                .well(3, 2),
            2,
            2,
        );
        assert_eq!(decision.rule, Rule::AttackAdjacent);
        assert_eq!(decision.action, Action::West);
    }

    #[test]
    fn low_health_seeks_quiet_well() {
        let decision = run(
            BoardBuilder::new(7)
                .hero(3, 3, 0, 1, 50)
                .well(0, 3)
                .hero(0, 4, 1, 2, 100)
                .well(6, 3),
            3,
            3,
        );
        assert_eq!(decision.rule, Rule::SeekWell);
        assert_eq!(decision.target, Some(loc(6, 3)));
        assert_eq!(decision.action, Action::South);
    }

    #[test]
    fn heals_weakest_adjacent_ally() {
        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 100)
                .hero(1, 2, 0, 2, 70)
                .hero(2, 3, 0, 3, 30)
                .well(0, 0),
            2,
            2,
        );
        assert_eq!(decision.rule, Rule::HealAlly);
        assert_eq!(decision.action, Action::East);
    }

    #[test]
    fn hunts_vulnerable_enemy_two_hops_away() {
        let decision = run(
            BoardBuilder::new(7)
                .hero(3, 3, 0, 1, 100)
                .hero(3, 5, 1, 2, 50)
                .mine(0, 0, None),
            3,
            3,
        );
        assert_eq!(decision.rule, Rule::HuntVulnerable);
        assert_eq!(decision.action, Action::East);
    }

    #[test]
    fn hunt_radius_is_independent_of_support_radius() {
        let board = BoardBuilder::new(7)
            .hero(3, 3, 0, 1, 100)
            .hero(3, 5, 1, 2, 50)
            .mine(0, 0, None)
            .build()
            .unwrap();
        let game = GameData::new(board, loc(3, 3)).unwrap();
        let config = TacticsConfig {
            hunt_radius: 1,
            ..TacticsConfig::default()
        };

        let decision = decide_with(&game, &config);
        assert_eq!(decision.rule, Rule::CaptureMine);
    }

    #[test]
    fn captures_mines_then_consolidates() {
        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 100)
                .mine(0, 2, Some(Owner { team: 1, id: 9 }))
                .well(4, 2),
            2,
            2,
        );
        assert_eq!(decision.rule, Rule::CaptureMine);
        assert_eq!(decision.action, Action::North);

        let decision = run(
            BoardBuilder::new(5)
                .hero(2, 2, 0, 1, 100)
                .mine(0, 2, Some(Owner { team: 0, id: 9 }))
                .well(4, 2),
            2,
            2,
        );
        assert_eq!(decision.rule, Rule::Consolidate);
        assert_eq!(decision.action, Action::South);
    }

    #[test]
    fn stays_when_nothing_is_reachable() {
        let decision = run(BoardBuilder::new(3).hero(1, 1, 0, 1, 100), 1, 1);
        assert_eq!(decision, Decision::stay());
    }
}
