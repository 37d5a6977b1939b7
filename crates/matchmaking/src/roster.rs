//! Player roster with role ratings and partner history, stored as JSON

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{LoadError, MatchmakingError, Result};
use crate::rating::Rating;
use crate::team::Team;
use crate::variety::PartnerCounts;

/// A player and their current role ratings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub defense: Rating,
    #[serde(default)]
    pub offense: Rating,
}

/// Games two players played as one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub defense: String,
    pub offense: String,
    pub games: u32,
}

/// Players available for matchmaking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub players: Vec<RosterEntry>,
    #[serde(default)]
    pub partners: Vec<PartnerRecord>,
}

impl Roster {
    /// Load and validate a roster file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, LoadError> {
        let roster: Self = serde_json::from_str(contents)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Player names must be unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.players {
            if !seen.insert(entry.name.as_str()) {
                return Err(MatchmakingError::DuplicatePlayer(entry.name.clone()));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.players.get(index).map(|p| p.name.as_str())
    }

    /// Index-aligned defense and offense ratings
    pub fn ratings(&self) -> (Vec<Rating>, Vec<Rating>) {
        self.players.iter().map(|p| (p.defense, p.offense)).unzip()
    }

    /// Partner history by player index; records naming unknown players are
    /// skipped
    pub fn partner_counts(&self) -> PartnerCounts {
        let mut counts = PartnerCounts::new();
        for record in &self.partners {
            if let (Some(d), Some(o)) = (self.index_of(&record.defense), self.index_of(&record.offense)) {
                counts.record(d, o, record.games);
            }
        }
        counts
    }

    /// Resolve a team given by player names
    pub fn team(&self, defense: &str, offense: &str) -> Result<Team<usize>> {
        let find = |name: &str| {
            self.index_of(name)
                .ok_or_else(|| MatchmakingError::UnknownPlayer(name.to_string()))
        };
        Ok(Team::new(find(defense)?, find(offense)?))
    }

    /// Render a team with player names, e.g. `anna / ben`
    pub fn describe(&self, team: &Team<usize>) -> String {
        let name = |i: usize| self.name(i).unwrap_or("?");
        if team.is_solo() {
            name(team.defense).to_string()
        } else {
            format!("{} / {}", name(team.defense), name(team.offense))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = r#"{
        "players": [
            { "name": "anna", "defense": { "mu": 27.0, "sigma": 2.0 }, "offense": { "mu": 21.0, "sigma": 3.0 } },
            { "name": "ben", "defense": { "mu": 18.0, "sigma": 4.0 }, "offense": { "mu": 30.0, "sigma": 1.5 } },
            { "name": "cleo" }
        ],
        "partners": [
            { "defense": "anna", "offense": "ben", "games": 4 },
            { "defense": "ben", "offense": "dora", "games": 9 }
        ]
    }"#;

    #[test]
    fn test_parse_roster() {
        let roster = Roster::from_json_str(ROSTER).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.index_of("ben"), Some(1));
        assert_eq!(roster.name(2), Some("cleo"));

        let (defense, offense) = roster.ratings();
        assert_eq!(defense[0], Rating::new(27.0, 2.0));
        assert_eq!(offense[1], Rating::new(30.0, 1.5));
        // missing ratings fall back to a new player's rating
        assert_eq!(defense[2], Rating::default());
    }

    #[test]
    fn test_partner_counts_skip_unknown_players() {
        let roster = Roster::from_json_str(ROSTER).unwrap();
        let partners = roster.partner_counts();
        assert_eq!(partners.get(0, 1), 4);
        assert_eq!(partners.together(1, 0), 4);
        assert_eq!(partners.together(1, 2), 0);
    }

    #[test]
    fn test_duplicate_players_rejected() {
        let err = Roster::from_json_str(r#"{ "players": [ { "name": "anna" }, { "name": "anna" } ] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(MatchmakingError::DuplicatePlayer(name)) if name == "anna"
        ));
    }

    #[test]
    fn test_team_lookup_and_description() {
        let roster = Roster::from_json_str(ROSTER).unwrap();
        let team = roster.team("cleo", "anna").unwrap();
        assert_eq!(team, Team::new(2, 0));
        assert_eq!(roster.describe(&team), "cleo / anna");
        assert_eq!(roster.describe(&Team::solo(1)), "ben");
        assert_eq!(
            roster.team("anna", "erik"),
            Err(MatchmakingError::UnknownPlayer("erik".to_string()))
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Roster::from_json_str("{"), Err(LoadError::Json(_))));
    }
}
