//! Foosball matchmaking
//!
//! This crate provides:
//! - Win and draw probabilities for 2v2 games from per-role skill ratings
//! - Random team assignment
//! - Tabu search for the most balanced team assignments
//! - Variety-aware exact matchmaking for groups of four
//!
//! Players are referenced by index into index-aligned defense and offense
//! rating slices. Randomness is always passed in, so a seeded generator gives
//! reproducible results.
//!
//! # Usage
//!
//! ```bash
//! # Build balanced matchups for everyone in a roster
//! cargo run -p matchmaking -- teams roster.json --method fair
//!
//! # Win probability of one team against another
//! cargo run -p matchmaking -- odds roster.json anna ben cleo dora
//! ```

mod config;
mod error;
mod eval;
mod fairness;
mod matchmaker;
mod random_teams;
mod rating;
mod roster;
mod tabu;
mod team;
mod variety;
mod window;

pub use config::*;
pub use error::*;
pub use eval::*;
pub use fairness::*;
pub use matchmaker::*;
pub use random_teams::*;
pub use rating::*;
pub use roster::*;
pub use tabu::*;
pub use team::*;
pub use variety::*;
pub use window::*;
