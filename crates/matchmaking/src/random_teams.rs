//! Random team assignment

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use crate::team::{as_teams, Team};

/// Assemble teams by assigning players randomly.
///
/// - fewer than 2 players: no teams
/// - 2 players: each player forms a solo team covering both roles
/// - odd counts: the first shuffled player also fills the last open slot, so
///   everyone plays and no team is left with a single player
pub fn build_random_teams<P, R>(players: &[P], rng: &mut R) -> BTreeSet<Team<P>>
where
    P: Clone + Ord,
    R: Rng + ?Sized,
{
    if players.len() < 2 {
        return BTreeSet::new();
    }

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    if shuffled.len() == 2 {
        return shuffled.into_iter().map(Team::solo).collect();
    }

    if shuffled.len() % 2 == 1 {
        shuffled.push(shuffled[0].clone());
    }
    as_teams(&shuffled)
}
