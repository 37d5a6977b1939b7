//! Per-role skill ratings

use serde::{Deserialize, Serialize};

/// Default mean skill of a new player
pub const MU: f64 = 25.0;

/// Default skill uncertainty of a new player
pub const SIGMA: f64 = MU / 3.0;

/// Performance standard deviation per player (the "skill class width")
pub const BETA: f64 = SIGMA / 2.0;

/// Gaussian belief over a player's skill in one role (defense or offense).
///
/// Ratings are produced by the league's rating subsystem and treated here as
/// read-only inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mu: f64,
    pub sigma: f64,
}

impl Rating {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Conservative skill estimate shown on leaderboards
    pub fn exposure(&self) -> f64 {
        self.mu - 3.0 * self.sigma
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::new(MU, SIGMA)
    }
}
