//! Win and draw probabilities of two teams.
//!
//! Both come from the TrueSkill performance model the ratings are produced
//! with: each player's performance is their skill plus noise with variance
//! `BETA^2`, and a team performs as the sum of its players. Solo teams list
//! their player twice, so every game counts four performances.

use skillratings::trueskill::{
    expected_score_two_teams, match_quality_two_teams, TrueSkillConfig, TrueSkillRating,
};

use crate::rating::{Rating, BETA};
use crate::team::Team;

fn model() -> TrueSkillConfig {
    TrueSkillConfig {
        beta: BETA,
        ..TrueSkillConfig::new()
    }
}

fn players(team: &Team<Rating>) -> [TrueSkillRating; 2] {
    [team.defense, team.offense].map(|r| TrueSkillRating {
        rating: r.mu,
        uncertainty: r.sigma,
    })
}

/// Probability of team a winning against team b.
///
/// `win_probability(b, a) == 1 - win_probability(a, b)`. Intended for
/// display; the search optimizes [`draw_probability`] instead.
pub fn win_probability(team_a: &Team<Rating>, team_b: &Team<Rating>) -> f64 {
    let (win_a, _) = expected_score_two_teams(&players(team_a), &players(team_b), &model());
    win_a.clamp(0.0, 1.0)
}

/// Match quality of two teams, in `(0, 1]`.
///
/// Peaks for equal mean skill and confident ratings, decays with skill
/// disparity and with uncertainty. Symmetric in its arguments.
pub fn draw_probability(team_a: &Team<Rating>, team_b: &Team<Rating>) -> f64 {
    match_quality_two_teams(&players(team_a), &players(team_b), &model())
}

#[cfg(test)]
#[path = "fairness_tests.rs"]
mod fairness_tests;
