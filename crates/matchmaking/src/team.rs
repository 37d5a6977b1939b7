//! Teams, solutions and matchup sets

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::rating::Rating;

/// A defense + offense pairing.
///
/// A solo team `(p, p)` is used when only two players are present: each of
/// them covers both roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Team<P> {
    pub defense: P,
    pub offense: P,
}

impl<P> Team<P> {
    pub fn new(defense: P, offense: P) -> Self {
        Self { defense, offense }
    }
}

impl<P: Clone> Team<P> {
    /// A single player occupying both roles
    pub fn solo(player: P) -> Self {
        Self {
            defense: player.clone(),
            offense: player,
        }
    }
}

impl<P: PartialEq> Team<P> {
    pub fn is_solo(&self) -> bool {
        self.defense == self.offense
    }
}

impl<P> From<(P, P)> for Team<P> {
    fn from((defense, offense): (P, P)) -> Self {
        Self::new(defense, offense)
    }
}

impl Team<usize> {
    /// Look up the role ratings of this team's players.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for its role slice.
    pub fn ratings(&self, defense: &[Rating], offense: &[Rating]) -> Team<Rating> {
        Team::new(defense[self.defense], offense[self.offense])
    }
}

/// Players assigned to positions: `[def_a, off_a, def_b, off_b, ...]`
pub type Solution = Vec<usize>;

/// Teams induced by a solution, referencing players by index
pub type MatchupSet = BTreeSet<Team<usize>>;

/// Group consecutive players into teams.
///
/// A trailing player without a partner is left out.
pub fn as_teams<P: Clone + Ord>(players: &[P]) -> BTreeSet<Team<P>> {
    players
        .chunks_exact(2)
        .map(|pair| Team::new(pair[0].clone(), pair[1].clone()))
        .collect()
}

/// Every player appearing in a set of teams, in slot order
pub fn players_of<P: Clone>(teams: &BTreeSet<Team<P>>) -> Vec<P> {
    teams
        .iter()
        .flat_map(|t| [t.defense.clone(), t.offense.clone()])
        .collect()
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
