//! Exact 2v2 matchmaking that prefers fresh partnerships.
//!
//! With four players there are only twelve distinct ways to form two teams,
//! so every split is scored. Among the splits that are (nearly) as fair as
//! the fairest one, the split whose teammates have played together least
//! wins. This keeps a weekly group of four from getting the same teams every
//! time the ratings happen to favour one split.

use std::collections::HashMap;
use tracing::debug;

use crate::error::{MatchmakingError, Result};
use crate::fairness::draw_probability;
use crate::rating::Rating;
use crate::team::{MatchupSet, Team};

/// Default absolute quality margin for a split to count as "as fair"
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// How often two players formed a team, keyed by `(defense, offense)` index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerCounts {
    counts: HashMap<(usize, usize), u32>,
}

impl PartnerCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add games played by `defense` and `offense` as one team
    pub fn record(&mut self, defense: usize, offense: usize, games: u32) {
        *self.counts.entry((defense, offense)).or_insert(0) += games;
    }

    /// Games with exactly these roles
    pub fn get(&self, defense: usize, offense: usize) -> u32 {
        self.counts.get(&(defense, offense)).copied().unwrap_or(0)
    }

    /// Games two players shared a team, in either role order
    pub fn together(&self, a: usize, b: usize) -> u32 {
        if a == b {
            return self.get(a, a);
        }
        self.get(a, b) + self.get(b, a)
    }
}

/// A scored 2v2 split
#[derive(Debug, Clone, Copy, PartialEq)]
struct Split {
    team_a: Team<usize>,
    team_b: Team<usize>,
    quality: f64,
    familiarity: u32,
}

/// Every distinct pair of teams over four players.
///
/// Team order within a split does not matter, so the team holding player 0
/// is listed first.
fn splits() -> Vec<(Team<usize>, Team<usize>)> {
    let mut out = Vec::with_capacity(12);
    for partner in 1..4 {
        let rest: Vec<usize> = (1..4).filter(|&p| p != partner).collect();
        let (c, d) = (rest[0], rest[1]);
        for team_a in [Team::new(0, partner), Team::new(partner, 0)] {
            for team_b in [Team::new(c, d), Team::new(d, c)] {
                out.push((team_a, team_b));
            }
        }
    }
    out
}

/// Pick fair 2v2 teams, favouring pairs that rarely played together.
///
/// `tolerance` is the absolute draw probability margin below the fairest
/// split within which splits are considered equally fair. Ties on
/// familiarity go to the fairer split.
pub fn variety_2v2(
    defense: &[Rating],
    offense: &[Rating],
    partners: &PartnerCounts,
    tolerance: f64,
) -> Result<MatchupSet> {
    if defense.len() != offense.len() {
        return Err(MatchmakingError::RoleCountMismatch {
            defense: defense.len(),
            offense: offense.len(),
        });
    }
    if defense.len() != 4 {
        return Err(MatchmakingError::UnsupportedPlayerCount(defense.len()));
    }

    let scored: Vec<Split> = splits()
        .into_iter()
        .map(|(team_a, team_b)| Split {
            team_a,
            team_b,
            quality: draw_probability(
                &team_a.ratings(defense, offense),
                &team_b.ratings(defense, offense),
            ),
            familiarity: partners.together(team_a.defense, team_a.offense)
                + partners.together(team_b.defense, team_b.offense),
        })
        .collect();

    let fairest = scored.iter().map(|s| s.quality).fold(0.0, f64::max);
    let threshold = fairest - tolerance.max(0.0);

    let mut chosen: Option<Split> = None;
    for split in scored.iter().filter(|s| s.quality >= threshold) {
        let better = match chosen {
            None => true,
            Some(current) => {
                split.familiarity < current.familiarity
                    || (split.familiarity == current.familiarity && split.quality > current.quality)
            }
        };
        if better {
            chosen = Some(*split);
        }
    }

    // the fairest split always passes the threshold
    let Some(split) = chosen else {
        return Ok(MatchupSet::new());
    };
    debug!(
        quality = split.quality,
        fairest,
        familiarity = split.familiarity,
        "picked 2v2 split"
    );
    Ok([split.team_a, split.team_b].into_iter().collect())
}
