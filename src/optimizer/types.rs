//! Candidates and the acceptance-policy trait.

use super::config::Acceptance;
use crate::graph::build_graph;
use crate::grid::Grid;
use crate::search::{label_depths, MoveDepthTable};
use rand::Rng;

/// Score of an evaluated grid: the negated discovery depth of the goal.
///
/// Higher is better, so a goal found in fewer jumps scores higher.
pub type Score = i64;

/// A generated grid together with its evaluation.
///
/// Candidates are immutable; the optimizer replaces its incumbent
/// wholesale rather than updating it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub grid: Grid,
    pub depths: MoveDepthTable,
    /// `None` when the goal was never reached.
    pub score: Option<Score>,
}

impl Candidate {
    /// Builds the jump graph of `grid`, labels depths from the start, and
    /// scores the goal's discovery depth.
    pub fn evaluate(grid: Grid) -> Self {
        let graph = build_graph(&grid);
        let depths = label_depths(&graph, grid.start_label());
        let score = depths.goal_depth().map(|d| -(d as Score));
        Self {
            grid,
            depths,
            score,
        }
    }

    /// Jumps needed to reach the goal along the discovery path.
    pub fn path_length(&self) -> Option<usize> {
        self.depths.goal_depth()
    }

    /// Whether this candidate's goal was reached.
    pub fn is_reachable(&self) -> bool {
        self.score.is_some()
    }
}

/// Whether `candidate` strictly beats `incumbent`. Any score beats none.
pub fn improves(incumbent: Option<Score>, candidate: Score) -> bool {
    incumbent.is_none_or(|best| candidate > best)
}

/// Decides whether a reachable candidate replaces the incumbent.
///
/// The optimizer calls [`accept`](AcceptancePolicy::accept) once per
/// iteration with a reachable candidate; unreachable candidates never reach
/// the policy.
pub trait AcceptancePolicy {
    /// Returns `true` to make the candidate the new incumbent.
    fn accept<R: Rng>(&mut self, incumbent: Option<Score>, candidate: Score, rng: &mut R)
        -> bool;

    /// Descent counter bound for restart-style policies.
    fn restart_bound(&self) -> Option<usize> {
        None
    }
}

/// The built-in policies of [`Acceptance`].
///
/// The uniform draw used by the uphill and annealing policies is taken once,
/// when the acceptor is created, and reused for every decision of the run.
#[derive(Debug, Clone)]
pub struct Acceptor {
    acceptance: Acceptance,
    draw: f64,
}

impl Acceptor {
    pub fn new<R: Rng>(acceptance: Acceptance, rng: &mut R) -> Self {
        Self {
            acceptance,
            draw: rng.random_range(0.0..1.0),
        }
    }

    /// The run's fixed uniform draw in `[0, 1)`.
    pub fn draw(&self) -> f64 {
        self.draw
    }
}

impl AcceptancePolicy for Acceptor {
    fn accept<R: Rng>(
        &mut self,
        incumbent: Option<Score>,
        candidate: Score,
        _rng: &mut R,
    ) -> bool {
        if improves(incumbent, candidate) {
            return true;
        }
        self.acceptance
            .uphill_threshold()
            .is_some_and(|threshold| self.draw < threshold)
    }

    fn restart_bound(&self) -> Option<usize> {
        self.acceptance.restart_bound()
    }
}
