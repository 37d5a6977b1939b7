//! Solution fitness with a per-search quality cache

use std::collections::HashMap;

use crate::fairness::draw_probability;
use crate::rating::Rating;
use crate::team::{as_teams, Team};

/// Scores team assignments against one set of role ratings.
///
/// Team-vs-team qualities are memoized by team indices, which only mean
/// something for the ratings this evaluator was built with. Create one per
/// search and drop it afterwards.
#[derive(Debug)]
pub struct MatchupEvaluator<'a> {
    defense: &'a [Rating],
    offense: &'a [Rating],
    cache: HashMap<(Team<usize>, Team<usize>), f64>,
}

impl<'a> MatchupEvaluator<'a> {
    pub fn new(defense: &'a [Rating], offense: &'a [Rating]) -> Self {
        Self {
            defense,
            offense,
            cache: HashMap::new(),
        }
    }

    /// Draw probability of a matchup; `team_a < team_b` keeps keys canonical
    pub fn quality(&mut self, team_a: Team<usize>, team_b: Team<usize>) -> f64 {
        let key = if team_a <= team_b {
            (team_a, team_b)
        } else {
            (team_b, team_a)
        };
        let (defense, offense) = (self.defense, self.offense);
        *self.cache.entry(key).or_insert_with(|| {
            draw_probability(
                &key.0.ratings(defense, offense),
                &key.1.ratings(defense, offense),
            )
        })
    }

    /// Sum of squared draw probabilities over all pairs of induced teams.
    ///
    /// Squaring punishes a single lopsided pairing harder than a plain sum.
    pub fn fitness(&mut self, solution: &[usize]) -> f64 {
        // sorted teams, so the same pair always hits the same cache key
        let teams: Vec<_> = as_teams(solution).into_iter().collect();
        let mut total = 0.0;
        for (i, &a) in teams.iter().enumerate() {
            for &b in &teams[i + 1..] {
                let q = self.quality(a, b);
                total += q * q;
            }
        }
        total
    }

    /// Number of memoized team pairings
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}
