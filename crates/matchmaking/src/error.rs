//! Error types for matchmaking and file loading

use thiserror::Error;

/// Invalid input to team building or matchup search.
///
/// All of these are raised before any search state is built; a failed call
/// never returns partial results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchmakingError {
    #[error("k < 1 returns no solutions")]
    NoSolutionsRequested,

    #[error("no optimization can happen if no iterations are allowed")]
    NoIterations,

    #[error("tabu list length must be at least 1")]
    EmptyTabuWindow,

    #[error("each player must have a defense and offense rating (got {defense} defense, {offense} offense)")]
    RoleCountMismatch { defense: usize, offense: usize },

    #[error("cannot swap players in a solution of {0} players")]
    CannotSwap(usize),

    #[error("at least 2 players necessary (got {0})")]
    NotEnoughPlayers(usize),

    #[error("only even number of players supported (got {0})")]
    OddPlayerCount(usize),

    #[error("variety matchmaking needs exactly 4 players (got {0})")]
    UnsupportedPlayerCount(usize),

    #[error("no duplicate players allowed: {0}")]
    DuplicatePlayer(String),

    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("unknown matchmaking method: {0}")]
    UnknownMethod(String),
}

/// Failure to load a roster or configuration file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid contents: {0}")]
    Invalid(#[from] MatchmakingError),
}

pub type Result<T, E = MatchmakingError> = std::result::Result<T, E>;
