//! Strategy seam between the game host and the decision engine.
//!
//! The host owns the turn loop and hands each strategy a fresh snapshot.
//! Strategies are stateless; everything they need is in `GameData` and
//! their own configuration.

use crate::board::GameData;
use crate::config::TacticsConfig;
use crate::direction::Action;
use crate::policy::*;

/// Picks one action per turn.
pub trait Strategy {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    fn decide(&self, game: &GameData) -> Action;
}

/// The balanced rule cascade.
#[derive(Clone, Debug, Default)]
pub struct BalancedStrategy {
    pub config: TacticsConfig,
}

impl BalancedStrategy {
    pub fn new(config: TacticsConfig) -> Self {
        BalancedStrategy { config }
    }

    /// Like [`Strategy::decide`], but also reports which rule fired.
    pub fn explain(&self, game: &GameData) -> Decision {
        decide_with(game, &self.config)
    }
}

impl Strategy for BalancedStrategy {
    fn name(&self) -> &str {
        "balanced"
    }

    fn decide(&self, game: &GameData) -> Action {
        self.explain(game).action
    }
}
