//! Tabu search for balanced team assignments.
//!
//! The search walks the space of solutions (player orderings, read as
//! consecutive defense/offense pairs) using the swap-two-players
//! neighborhood:
//!
//! 1. Start from a uniformly random solution.
//! 2. Each step, pick a random neighbor as fallback, then move to the best
//!    neighbor outside the tabu window if it beats the fallback. The search
//!    always moves, even to a worse solution.
//! 3. Solutions strictly better than the best so far are kept in a store of
//!    capacity `k`; the oldest improvement is dropped when it overflows.
//! 4. Every visited solution enters a FIFO tabu window of `tabu_size`.
//!
//! The result is the store newest first. Because only strict improvements
//! are stored, this is an improving sequence ordered by decreasing fitness,
//! not necessarily the true top `k`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{MatchmakingError, Result};
use crate::eval::MatchupEvaluator;
use crate::rating::Rating;
use crate::team::{as_teams, MatchupSet, Solution, Team};
use crate::window::FifoWindow;

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabuSearch {
    /// Maximum number of solutions returned
    pub k: usize,
    /// Search steps; the only bound on run time
    pub max_iter: usize,
    /// Number of recently visited solutions that may not be revisited
    pub tabu_size: usize,
}

impl Default for TabuSearch {
    fn default() -> Self {
        Self {
            k: 1,
            max_iter: 5000,
            tabu_size: 20,
        }
    }
}

/// A stored solution together with its fitness
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSolution {
    pub solution: Solution,
    pub fitness: f64,
}

impl RankedSolution {
    pub fn teams(&self) -> MatchupSet {
        as_teams(&self.solution)
    }
}

impl TabuSearch {
    pub fn new(k: usize, max_iter: usize, tabu_size: usize) -> Self {
        Self {
            k,
            max_iter,
            tabu_size,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_tabu_size(mut self, tabu_size: usize) -> Self {
        self.tabu_size = tabu_size;
        self
    }

    /// Check the parameters, in the order `k`, `max_iter`, `tabu_size`
    pub fn validate(&self) -> Result<()> {
        if self.k < 1 {
            Err(MatchmakingError::NoSolutionsRequested)
        } else if self.max_iter < 1 {
            Err(MatchmakingError::NoIterations)
        } else if self.tabu_size < 1 {
            Err(MatchmakingError::EmptyTabuWindow)
        } else {
            Ok(())
        }
    }

    /// Find the team assignments with the highest draw probabilities.
    ///
    /// Players are referenced by their index in `defense` and `offense`.
    /// Returns between 1 and `k` solutions, best first, or none for fewer
    /// than 2 players.
    pub fn search<R: Rng + ?Sized>(
        &self,
        defense: &[Rating],
        offense: &[Rating],
        rng: &mut R,
    ) -> Result<Vec<MatchupSet>> {
        self.validate()?;
        check_roles(defense, offense)?;

        match defense.len() {
            0 | 1 => Ok(Vec::new()),
            2 => Ok((0..self.k).map(|_| solo_pairing(rng)).collect()),
            _ => Ok(self
                .optimize(defense, offense, rng)
                .iter()
                .map(RankedSolution::teams)
                .collect()),
        }
    }

    /// Like [`search`](Self::search), but keeps solutions and fitness.
    ///
    /// The 2-player case has nothing to optimize and yields `k` copies of the
    /// solo pairing with fitness 0.
    pub fn run<R: Rng + ?Sized>(
        &self,
        defense: &[Rating],
        offense: &[Rating],
        rng: &mut R,
    ) -> Result<Vec<RankedSolution>> {
        self.validate()?;
        check_roles(defense, offense)?;

        match defense.len() {
            0 | 1 => Ok(Vec::new()),
            2 => Ok((0..self.k)
                .map(|_| {
                    let mut order = [0, 1];
                    order.shuffle(rng);
                    RankedSolution {
                        solution: vec![order[0], order[0], order[1], order[1]],
                        fitness: 0.0,
                    }
                })
                .collect()),
            _ => Ok(self.optimize(defense, offense, rng)),
        }
    }

    fn optimize<R: Rng + ?Sized>(
        &self,
        defense: &[Rating],
        offense: &[Rating],
        rng: &mut R,
    ) -> Vec<RankedSolution> {
        let n = defense.len();
        let mut eval = MatchupEvaluator::new(defense, offense);

        let mut candidate: Solution = (0..n).collect();
        candidate.shuffle(rng);
        let mut best_fitness = eval.fitness(&candidate);

        let mut best = FifoWindow::new(self.k);
        let mut tabu = FifoWindow::new(self.tabu_size);
        best.push(candidate.clone(), best_fitness);
        tabu.push(candidate.clone(), ());

        debug!(
            players = n,
            max_iter = self.max_iter,
            tabu_size = self.tabu_size,
            start_fitness = best_fitness,
            "starting tabu search"
        );

        for iteration in 0..self.max_iter {
            let Some((next, candidate_fitness)) = step(&candidate, &tabu, &mut eval, rng) else {
                break;
            };
            candidate = next;

            if candidate_fitness > best_fitness {
                trace!(iteration, fitness = candidate_fitness, "new best solution");
                best_fitness = candidate_fitness;
                best.push(candidate.clone(), candidate_fitness);
            }

            tabu.push(candidate.clone(), ());
        }

        debug!(
            best_fitness,
            stored = best.len(),
            cached_pairings = eval.cached(),
            "tabu search finished"
        );

        best.into_newest_first()
            .into_iter()
            .map(|(solution, fitness)| RankedSolution { solution, fitness })
            .collect()
    }
}

fn check_roles(defense: &[Rating], offense: &[Rating]) -> Result<()> {
    if defense.len() != offense.len() {
        return Err(MatchmakingError::RoleCountMismatch {
            defense: defense.len(),
            offense: offense.len(),
        });
    }
    Ok(())
}

/// One search move from `candidate`.
///
/// A uniformly random neighbor is the fallback; the best neighbor outside
/// the tabu window replaces it only if strictly fitter. Returns `None` when
/// there are no neighbors.
fn step<R: Rng + ?Sized>(
    candidate: &[usize],
    tabu: &FifoWindow<Solution, ()>,
    eval: &mut MatchupEvaluator<'_>,
    rng: &mut R,
) -> Option<(Solution, f64)> {
    let neighborhood = neighbors(candidate);
    let fallback = neighborhood.choose(rng)?;
    Some(best_admissible(fallback, &neighborhood, tabu, eval))
}

/// The fittest non-tabu neighbor if it beats `fallback`, else `fallback`
fn best_admissible(
    fallback: &[usize],
    neighborhood: &[Solution],
    tabu: &FifoWindow<Solution, ()>,
    eval: &mut MatchupEvaluator<'_>,
) -> (Solution, f64) {
    let mut best = fallback.to_vec();
    let mut best_fitness = eval.fitness(fallback);
    for neighbor in neighborhood {
        if tabu.contains(neighbor) {
            continue;
        }
        let fitness = eval.fitness(neighbor);
        if fitness > best_fitness {
            best = neighbor.clone();
            best_fitness = fitness;
        }
    }
    (best, best_fitness)
}

/// Both players alone on a team, drawn in random order
fn solo_pairing<R: Rng + ?Sized>(rng: &mut R) -> MatchupSet {
    let mut order = [0, 1];
    order.shuffle(rng);
    order.into_iter().map(Team::solo).collect()
}

/// Swaps of every pair of positions, `(i, j)` in lexicographic order
fn neighbors(solution: &[usize]) -> Vec<Solution> {
    let n = solution.len();
    let mut candidates = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            let mut candidate = solution.to_vec();
            candidate.swap(i, j);
            candidates.push(candidate);
        }
    }
    candidates
}

/// All team assignments where two players are swapped.
///
/// Returns `C(n, 2)` solutions for a solution of length `n`.
pub fn swap_two_players_neighborhood(solution: &[usize]) -> Result<Vec<Solution>> {
    if solution.len() < 2 {
        return Err(MatchmakingError::CannotSwap(solution.len()));
    }
    Ok(neighbors(solution))
}

/// Find pairings with the highest draw probabilities.
///
/// Shorthand for [`TabuSearch::search`] with explicit parameters.
pub fn tabu_search<R: Rng + ?Sized>(
    defense: &[Rating],
    offense: &[Rating],
    k: usize,
    max_iter: usize,
    tabu_size: usize,
    rng: &mut R,
) -> Result<Vec<MatchupSet>> {
    TabuSearch::new(k, max_iter, tabu_size).search(defense, offense, rng)
}

#[cfg(test)]
#[path = "tabu_tests.rs"]
mod tabu_tests;
