use crate::constants::*;
use serde::{Deserialize, Serialize};

/// Tunable thresholds for the tactical predicates and the balanced policy.
///
/// Every field has a default, so a host can deserialize a partial document
/// and only override what it cares about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsConfig {
    /// At or below this health the hero heads for a well.
    pub min_health: i32,
    /// Required health advantage before an isolated enemy is hunted.
    pub kill_margin: i32,
    /// Manhattan radius used to count enemies around a candidate tile.
    pub nearby_enemy_radius: i32,
    /// Path radius for the isolation checks on a vulnerable enemy.
    pub support_radius: i32,
    /// Path radius around the hero searched for vulnerable enemies to hunt.
    pub hunt_radius: i32,
    /// Manhattan radius within which a well heals an adjacent enemy.
    pub well_support_radius: i32,
    /// Adjacent enemies above this health cannot be killed this turn.
    pub secure_kill_health: i32,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        TacticsConfig {
            min_health: MIN_HEALTH,
            kill_margin: KILL_MARGIN,
            nearby_enemy_radius: NEARBY_ENEMY_RADIUS,
            support_radius: SUPPORT_RADIUS,
            hunt_radius: HUNT_RADIUS,
            well_support_radius: WELL_SUPPORT_RADIUS,
            secure_kill_health: SECURE_KILL_HEALTH,
        }
    }
}
