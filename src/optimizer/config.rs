//! Optimizer configuration and acceptance policies.

use crate::grid::MIN_SIZE;

/// Rule deciding whether a freshly generated grid replaces the incumbent.
///
/// All policies accept a candidate whose score beats the incumbent's. The
/// uphill and annealing policies also accept worse candidates when a single
/// uniform draw, taken once per run, falls below their threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Acceptance {
    /// Accept only improvements.
    #[default]
    Descent,

    /// Accept only improvements, restarting the descent counter after
    /// `restart_bound` iterations. The incumbent survives restarts.
    RandomRestarts {
        /// Largest descent index before the counter wraps to 0.
        restart_bound: usize,
    },

    /// Also accept a worse candidate when the run's draw is below `1 - uphill`.
    RandomUphill {
        /// Uphill parameter in `[0, 1]`. Higher values accept fewer uphill moves.
        uphill: f64,
    },

    /// Also accept a worse candidate when the run's draw is below
    /// `1 - decay_rate / initial_temperature`.
    SimulatedAnnealing {
        /// Initial temperature, must be positive.
        initial_temperature: f64,
        /// Decay rate applied against the initial temperature.
        decay_rate: f64,
    },
}

impl Acceptance {
    /// Probability threshold for accepting a non-improving candidate.
    ///
    /// `None` for the pure improvement policies.
    pub fn uphill_threshold(&self) -> Option<f64> {
        match *self {
            Acceptance::Descent | Acceptance::RandomRestarts { .. } => None,
            Acceptance::RandomUphill { uphill } => Some(1.0 - uphill),
            Acceptance::SimulatedAnnealing {
                initial_temperature,
                decay_rate,
            } => Some(1.0 - decay_rate / initial_temperature),
        }
    }

    /// Descent counter bound, for the random-restart policy only.
    pub fn restart_bound(&self) -> Option<usize> {
        match *self {
            Acceptance::RandomRestarts { restart_bound } => Some(restart_bound),
            _ => None,
        }
    }

    /// Short policy name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Acceptance::Descent => "descent",
            Acceptance::RandomRestarts { .. } => "random-restarts",
            Acceptance::RandomUphill { .. } => "random-uphill",
            Acceptance::SimulatedAnnealing { .. } => "simulated-annealing",
        }
    }
}

/// Configuration of a grid optimization run.
///
/// # Examples
///
/// ```
/// use rook_maze::optimizer::{Acceptance, OptimizerConfig};
///
/// let config = OptimizerConfig::default()
///     .with_size(6)
///     .with_iterations(500)
///     .with_acceptance(Acceptance::SimulatedAnnealing {
///         initial_temperature: 100.0,
///         decay_rate: 0.95,
///     })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Requested board size. Clamped into `[5, 10]` at run start.
    pub size: usize,

    /// Number of grids to generate and evaluate.
    pub iterations: usize,

    /// Acceptance policy.
    pub acceptance: Acceptance,

    /// Whether to evaluate generated grids in parallel using rayon.
    ///
    /// Grids are still generated and accepted in order, so results do not
    /// depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            size: MIN_SIZE,
            iterations: 1000,
            acceptance: Acceptance::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl OptimizerConfig {
    pub fn with_size(mut self, n: usize) -> Self {
        self.size = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Out-of-range sizes are not an error; they are clamped when the run starts.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be positive".into());
        }
        match self.acceptance {
            Acceptance::Descent | Acceptance::RandomRestarts { .. } => {}
            Acceptance::RandomUphill { uphill } => {
                if !(0.0..=1.0).contains(&uphill) {
                    return Err(format!("uphill must be in [0, 1], got {uphill}"));
                }
            }
            Acceptance::SimulatedAnnealing {
                initial_temperature,
                decay_rate,
            } => {
                if !(initial_temperature.is_finite() && initial_temperature > 0.0) {
                    return Err(format!(
                        "initial_temperature must be positive, got {initial_temperature}"
                    ));
                }
                if !decay_rate.is_finite() {
                    return Err(format!("decay_rate must be finite, got {decay_rate}"));
                }
            }
        }
        Ok(())
    }
}
