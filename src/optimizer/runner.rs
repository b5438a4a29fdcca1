//! Grid optimization loop.
//!
//! # Algorithm
//!
//! 1. Generate a fresh random grid
//! 2. Build its jump graph and label discovery depths from the start
//! 3. Score = negated goal depth; skip the iteration if the goal is unreached
//! 4. Ask the acceptance policy whether the candidate replaces the incumbent
//! 5. Repeat for the configured number of iterations
//!
//! The first generated candidate always seeds the incumbent, so a one-
//! iteration run returns exactly that candidate.

use super::config::OptimizerConfig;
use super::types::{improves, AcceptancePolicy, Acceptor, Candidate, Score};
use crate::grid::{Grid, GridSize, SizeAdjustment};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Grids generated ahead of evaluation at a time.
const EVAL_BATCH: usize = 64;

/// Result of an optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizerResult {
    /// The incumbent at the end of the run. `None` only if cancelled
    /// before the first iteration.
    pub incumbent: Option<Candidate>,

    /// Iterations executed.
    pub iterations: usize,

    /// Candidates that replaced the incumbent, the seeding one included.
    pub accepted_moves: usize,

    /// Accepted candidates that strictly improved the incumbent's score.
    pub improving_moves: usize,

    /// Candidates whose goal was never reached.
    pub unreachable: usize,

    /// Times the descent counter wrapped back to 0.
    pub restarts: usize,

    /// Clamp applied to the requested board size, if any.
    pub size_adjustment: Option<SizeAdjustment>,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Incumbent score after each iteration.
    pub score_history: Vec<Option<Score>>,
}

impl OptimizerResult {
    /// Score of the incumbent.
    pub fn score(&self) -> Option<Score> {
        self.incumbent.as_ref().and_then(|c| c.score)
    }

    /// Goal discovery depth of the incumbent.
    pub fn path_length(&self) -> Option<usize> {
        self.incumbent.as_ref().and_then(Candidate::path_length)
    }
}

/// Executes the grid optimizer.
pub struct OptimizerRunner;

impl OptimizerRunner {
    /// Runs the optimizer with the policy named by `config.acceptance`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rook_maze::optimizer::{OptimizerConfig, OptimizerRunner};
    ///
    /// let config = OptimizerConfig::default().with_iterations(50).with_seed(3);
    /// let result = OptimizerRunner::run(&config);
    /// assert_eq!(result.iterations, 50);
    /// assert!(result.incumbent.is_some());
    /// ```
    pub fn run(config: &OptimizerConfig) -> OptimizerResult {
        Self::run_with_cancel(config, None)
    }

    /// Runs with an optional cancellation token.
    pub fn run_with_cancel(
        config: &OptimizerConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> OptimizerResult {
        let mut rng = create_rng(config);
        let acceptor = Acceptor::new(config.acceptance, &mut rng);
        tracing::info!(
            policy = config.acceptance.name(),
            iterations = config.iterations,
            size = config.size,
            "starting grid optimization"
        );
        Self::drive(config, acceptor, &mut rng, cancel)
    }

    /// Runs with a caller-supplied acceptance policy.
    ///
    /// `config.acceptance` is ignored.
    pub fn run_with_policy<A: AcceptancePolicy>(
        config: &OptimizerConfig,
        policy: A,
        cancel: Option<Arc<AtomicBool>>,
    ) -> OptimizerResult {
        let mut rng = create_rng(config);
        Self::drive(config, policy, &mut rng, cancel)
    }

    fn drive<A: AcceptancePolicy>(
        config: &OptimizerConfig,
        mut policy: A,
        rng: &mut StdRng,
        cancel: Option<Arc<AtomicBool>>,
    ) -> OptimizerResult {
        config.validate().expect("invalid OptimizerConfig");

        let size = GridSize::new(config.size);
        if let Some(adjustment) = size.adjustment() {
            tracing::warn!("{adjustment}");
        }
        let n = size.get();

        let mut incumbent: Option<Candidate> = None;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut unreachable = 0usize;
        let mut restarts = 0usize;
        let mut cancelled = false;
        let mut descent = 0usize;
        let mut score_history = Vec::with_capacity(config.iterations);

        'outer: while iterations < config.iterations {
            let batch = EVAL_BATCH.min(config.iterations - iterations);
            let grids: Vec<Grid> = (0..batch).map(|_| Grid::generate(n, rng)).collect();
            let candidates = evaluate_batch(grids, config.parallel);

            for candidate in candidates {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        cancelled = true;
                        break 'outer;
                    }
                }

                if let Some(bound) = policy.restart_bound() {
                    if descent > bound {
                        descent = 0;
                        restarts += 1;
                        tracing::debug!(iteration = iterations, "descent restart");
                    }
                }

                if !candidate.is_reachable() {
                    unreachable += 1;
                }

                let incumbent_score = incumbent.as_ref().and_then(|c| c.score);
                let replace = match (&incumbent, candidate.score) {
                    (None, _) => true,
                    (Some(_), None) => false,
                    (Some(_), Some(score)) => policy.accept(incumbent_score, score, rng),
                };

                if replace {
                    accepted_moves += 1;
                    if let Some(score) = candidate.score {
                        if improves(incumbent_score, score) {
                            improving_moves += 1;
                        }
                    }
                    tracing::debug!(
                        iteration = iterations,
                        score = ?candidate.score,
                        "incumbent replaced"
                    );
                    incumbent = Some(candidate);
                }

                iterations += 1;
                descent += 1;
                score_history.push(incumbent.as_ref().and_then(|c| c.score));
            }
        }

        let result = OptimizerResult {
            incumbent,
            iterations,
            accepted_moves,
            improving_moves,
            unreachable,
            restarts,
            size_adjustment: size.adjustment(),
            cancelled,
            score_history,
        };
        tracing::info!(
            iterations = result.iterations,
            score = ?result.score(),
            accepted = result.accepted_moves,
            unreachable = result.unreachable,
            "grid optimization finished"
        );
        result
    }
}

fn create_rng(config: &OptimizerConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

/// Evaluates a batch of grids, preserving their order.
fn evaluate_batch(grids: Vec<Grid>, parallel: bool) -> Vec<Candidate> {
    if parallel {
        grids.into_par_iter().map(Candidate::evaluate).collect()
    } else {
        grids.into_iter().map(Candidate::evaluate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::Acceptance;
    use rand::Rng;

    #[test]
    fn test_single_iteration_returns_first_candidate() {
        let config = OptimizerConfig::default().with_iterations(1).with_seed(42);
        let result = OptimizerRunner::run(&config);

        // Replay the same stream: acceptor draw first, then one grid.
        let mut rng = StdRng::seed_from_u64(42);
        let _ = Acceptor::new(Acceptance::Descent, &mut rng);
        let expected = Candidate::evaluate(Grid::generate(5, &mut rng));

        assert_eq!(result.iterations, 1);
        assert_eq!(result.accepted_moves, 1);
        assert_eq!(result.incumbent, Some(expected));
    }

    #[test]
    fn test_descent_never_worse_than_first() {
        let config = OptimizerConfig::default().with_iterations(300).with_seed(7);
        let result = OptimizerRunner::run(&config);

        let first = result.score_history[0];
        assert!(result.score() >= first);
        for window in result.score_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "descent incumbent got worse: {:?} -> {:?}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_descent_finds_reachable_grid() {
        let config = OptimizerConfig::default().with_iterations(500).with_seed(11);
        let result = OptimizerRunner::run(&config);
        let incumbent = result.incumbent.expect("incumbent");
        assert!(incumbent.is_reachable());
        assert_eq!(incumbent.score, Some(-(incumbent.path_length().unwrap() as i64)));
        assert_eq!(incumbent.grid.weight(incumbent.grid.goal()), 0);
    }

    #[test]
    fn test_runs_exact_iteration_count() {
        let config = OptimizerConfig::default().with_iterations(130).with_seed(1);
        let result = OptimizerRunner::run(&config);
        assert_eq!(result.iterations, 130);
        assert_eq!(result.score_history.len(), 130);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_size_clamped_and_reported() {
        let config = OptimizerConfig::default()
            .with_size(42)
            .with_iterations(5)
            .with_seed(2);
        let result = OptimizerRunner::run(&config);
        assert_eq!(
            result.size_adjustment,
            Some(SizeAdjustment::ClampedToMax { requested: 42 })
        );
        assert_eq!(result.incumbent.unwrap().grid.size(), 10);
    }

    #[test]
    fn test_restarts_counted_without_losing_incumbent() {
        let config = OptimizerConfig::default()
            .with_iterations(100)
            .with_acceptance(Acceptance::RandomRestarts { restart_bound: 9 })
            .with_seed(5);
        let result = OptimizerRunner::run(&config);
        // Counter wraps when it reaches 10: at iterations 10, 20, ..., 90.
        assert_eq!(result.restarts, 9);
        assert_eq!(result.iterations, 100);
        for window in result.score_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_uphill_zero_tracks_latest_reachable() {
        // Every reachable candidate is accepted, so the incumbent is the last
        // reachable grid generated.
        let config = OptimizerConfig::default()
            .with_iterations(40)
            .with_acceptance(Acceptance::RandomUphill { uphill: 0.0 })
            .with_seed(13);
        let result = OptimizerRunner::run(&config);

        let mut rng = StdRng::seed_from_u64(13);
        let _ = Acceptor::new(Acceptance::Descent, &mut rng);
        let candidates: Vec<Candidate> = (0..40)
            .map(|_| Candidate::evaluate(Grid::generate(5, &mut rng)))
            .collect();
        let expected = candidates
            .iter()
            .skip(1)
            .rev()
            .find(|c| c.is_reachable())
            .unwrap_or(&candidates[0]);

        assert_eq!(result.incumbent.as_ref(), Some(expected));
        let seed_unreachable = usize::from(!candidates[0].is_reachable());
        assert_eq!(
            result.accepted_moves,
            40 - result.unreachable + seed_unreachable
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let base = OptimizerConfig::default()
            .with_size(7)
            .with_iterations(200)
            .with_acceptance(Acceptance::SimulatedAnnealing {
                initial_temperature: 100.0,
                decay_rate: 0.95,
            })
            .with_seed(99);
        let seq = OptimizerRunner::run(&base.clone().with_parallel(false));
        let par = OptimizerRunner::run(&base.with_parallel(true));
        assert_eq!(seq.incumbent, par.incumbent);
        assert_eq!(seq.score_history, par.score_history);
    }

    #[test]
    fn test_cancellation() {
        let config = OptimizerConfig::default().with_iterations(1000).with_seed(42);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = OptimizerRunner::run_with_cancel(&config, Some(cancel));
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert!(result.incumbent.is_none());
    }

    // ---- Custom policy: fresh Metropolis draw per decision ----

    struct Metropolis {
        temperature: f64,
    }

    impl AcceptancePolicy for Metropolis {
        fn accept<R: Rng>(
            &mut self,
            incumbent: Option<Score>,
            candidate: Score,
            rng: &mut R,
        ) -> bool {
            let Some(best) = incumbent else {
                return true;
            };
            let delta = (best - candidate) as f64;
            let accept =
                delta < 0.0 || rng.random_range(0.0..1.0) < (-delta / self.temperature).exp();
            self.temperature *= 0.99;
            accept
        }
    }

    #[test]
    fn test_custom_policy() {
        let config = OptimizerConfig::default().with_iterations(200).with_seed(21);
        let result =
            OptimizerRunner::run_with_policy(&config, Metropolis { temperature: 5.0 }, None);
        assert_eq!(result.iterations, 200);
        assert!(result.accepted_moves >= 1);
        assert!(result.incumbent.is_some());
    }
}
