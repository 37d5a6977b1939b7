//! Matchmaker for turning a group of players into matchups

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::config::MatchmakingConfig;
use crate::error::{MatchmakingError, Result};
use crate::fairness::win_probability;
use crate::random_teams::build_random_teams;
use crate::rating::Rating;
use crate::tabu::TabuSearch;
use crate::team::{MatchupSet, Team};
use crate::variety::{variety_2v2, PartnerCounts};

/// How teams are assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Most balanced teams found
    #[default]
    Fair,
    /// One of the few most balanced team sets, picked at random
    QuiteFair,
    /// Uniformly random teams
    Random,
}

impl FromStr for Method {
    type Err = MatchmakingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fair" => Ok(Method::Fair),
            "quite_fair" | "quite-fair" => Ok(Method::QuiteFair),
            "random" => Ok(Method::Random),
            _ => Err(MatchmakingError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Fair => "fair",
            Method::QuiteFair => "quite_fair",
            Method::Random => "random",
        };
        f.write_str(name)
    }
}

/// Two teams facing each other, with win probabilities for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub team_a: Team<usize>,
    pub team_b: Team<usize>,
    pub win_probability_a: f64,
    pub win_probability_b: f64,
}

impl Matchup {
    pub fn new(team_a: Team<usize>, team_b: Team<usize>, defense: &[Rating], offense: &[Rating]) -> Self {
        let win_probability_a = win_probability(
            &team_a.ratings(defense, offense),
            &team_b.ratings(defense, offense),
        );
        Self {
            team_a,
            team_b,
            win_probability_a,
            win_probability_b: 1.0 - win_probability_a,
        }
    }
}

/// Builds teams with a chosen method and pairs them into matchups
pub struct Matchmaker {
    config: MatchmakingConfig,
}

impl Matchmaker {
    pub fn new(config: MatchmakingConfig) -> Self {
        Self { config }
    }

    /// Assemble teams for an even group of at least two players.
    ///
    /// Players are referenced by their index in `defense` and `offense`;
    /// `partners` is only consulted by [`Method::Fair`] with four players.
    pub fn build_teams<R: Rng + ?Sized>(
        &self,
        defense: &[Rating],
        offense: &[Rating],
        method: Method,
        partners: &PartnerCounts,
        rng: &mut R,
    ) -> Result<MatchupSet> {
        let n = defense.len();
        if n != offense.len() {
            return Err(MatchmakingError::RoleCountMismatch {
                defense: n,
                offense: offense.len(),
            });
        }
        if n < 2 {
            return Err(MatchmakingError::NotEnoughPlayers(n));
        }
        if n % 2 != 0 {
            return Err(MatchmakingError::OddPlayerCount(n));
        }

        let teams = match method {
            Method::Random => {
                let players: Vec<usize> = (0..n).collect();
                build_random_teams(&players, rng)
            }
            Method::Fair if n == 4 => {
                variety_2v2(defense, offense, partners, self.config.variety_tolerance)?
            }
            Method::Fair => self.first_solution(self.config.search.with_k(1), defense, offense, rng)?,
            Method::QuiteFair => {
                let search = self.config.search.with_k(self.config.quite_fair_k);
                let solutions = search.search(defense, offense, rng)?;
                solutions.choose(rng).cloned().unwrap_or_default()
            }
        };

        info!(players = n, method = %method, teams = teams.len(), "built teams");
        Ok(teams)
    }

    /// Build teams, then pair every two teams into a matchup
    pub fn create_matchups<R: Rng + ?Sized>(
        &self,
        defense: &[Rating],
        offense: &[Rating],
        method: Method,
        partners: &PartnerCounts,
        rng: &mut R,
    ) -> Result<Vec<Matchup>> {
        let teams = self.build_teams(defense, offense, method, partners, rng)?;
        Ok(pair_teams(&teams, defense, offense))
    }

    fn first_solution<R: Rng + ?Sized>(
        &self,
        search: TabuSearch,
        defense: &[Rating],
        offense: &[Rating],
        rng: &mut R,
    ) -> Result<MatchupSet> {
        Ok(search
            .search(defense, offense, rng)?
            .into_iter()
            .next()
            .unwrap_or_default())
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new(MatchmakingConfig::default())
    }
}

/// Every unordered pair of teams as a matchup, in team order
pub fn pair_teams(teams: &MatchupSet, defense: &[Rating], offense: &[Rating]) -> Vec<Matchup> {
    let teams: Vec<_> = teams.iter().copied().collect();
    let mut matchups = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1) / 2);
    for (i, &team_a) in teams.iter().enumerate() {
        for &team_b in &teams[i + 1..] {
            matchups.push(Matchup::new(team_a, team_b, defense, offense));
        }
    }
    matchups
}

#[cfg(test)]
#[path = "matchmaker_tests.rs"]
mod matchmaker_tests;
