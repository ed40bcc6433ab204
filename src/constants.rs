/// At or below this health the balanced policy looks for a well.
pub const MIN_HEALTH: i32 = 70;

/// An enemy this much weaker than the active hero can be taken on alone.
pub const KILL_MARGIN: i32 = 20;

/// Enemies within this Manhattan distance of a tile count as "nearby".
pub const NEARBY_ENEMY_RADIUS: i32 = 2;

/// Path radius used when judging whether an enemy is isolated.
pub const SUPPORT_RADIUS: i32 = 2;

/// Path radius around the hero searched for an enemy worth hunting.
pub const HUNT_RADIUS: i32 = 2;

/// An adjacent enemy with a well this close is being healed.
pub const WELL_SUPPORT_RADIUS: i32 = 1;

/// An adjacent enemy above this health survives one more hit.
pub const SECURE_KILL_HEALTH: i32 = 30;
