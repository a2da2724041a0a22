//! Configuration of the iterative solvers

use ndarray::NdFloat;
use thiserror::Error;

/// Basic configuration shared by iterative optimization methods
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizerParams {
    /// Limit on the number of outer iterations
    pub max_iterations: usize,
    /// Limit on the total elapsed computation time, in seconds
    pub max_computation_time: f64,
    /// Print progress to stdout while running
    pub verbose: bool,
    /// Number of decimal digits in printed output
    pub precision: usize,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        OptimizerParams {
            max_iterations: 100,
            max_computation_time: f64::MAX,
            verbose: false,
            precision: 3,
        }
    }
}

/// Which proximal gradient scheme to run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProximalGradientMode {
    /// Plain forward-backward splitting (ISTA)
    Simple,
    /// Nesterov momentum (FISTA)
    Accelerated,
}

/// Upper model checked by the backtracking line search.
///
/// The sufficient decrease test accepts a trial point $`x`$ built from
/// $`y`$ with step $`\lambda`$ when
/// ```math
/// F(x) \leq f(y) + \langle x - y, \nabla f(y) \rangle + \frac{1}{2\lambda} \phi(\|x - y\|) + g(x)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SufficientDecrease {
    /// $`\phi(r) = r`$. The norm enters unsquared, which is looser than the
    /// quadratic model when $`\|x - y\| < 1`$ and tighter above it.
    Norm,
    /// $`\phi(r) = r^2`$, the quadratic model of Beck and Teboulle.
    SquaredNorm,
}

/// Parameters for [`proximal_gradient`](crate::prox::proximal_gradient)
#[derive(Clone, Debug, PartialEq)]
pub struct ProximalGradientParams<S = f64> {
    pub base: OptimizerParams,

    pub mode: ProximalGradientMode,

    /// Estimate of the Lipschitz constant of $`\nabla f`$. The initial
    /// step size is $`1/L`$. Without line search this must be a true upper
    /// bound for convergence to be guaranteed.
    pub lipschitz: S,

    /// Backtrack on the step size instead of using $`1/L`$ throughout
    pub linesearch: bool,

    /// Multiplicative step shrinkage for the line search, in $`(0, 1)`$
    pub beta: S,

    /// O'Donoghue and Candes's gradient based restart (accelerated mode only)
    pub adaptive_restart: bool,

    /// Number of step shrinkages allowed in a single line search
    pub max_linesearch_iterations: usize,

    /// Tolerance on the normalized subgradient residual, eq. (42) of
    /// Goldstein et al., "A Field Guide to Forward-Backward Splitting"
    pub epsilon: S,

    pub sufficient_decrease: SufficientDecrease,
}

impl<S: NdFloat> Default for ProximalGradientParams<S> {
    fn default() -> Self {
        ProximalGradientParams {
            base: OptimizerParams::default(),
            mode: ProximalGradientMode::Accelerated,
            lipschitz: S::one(),
            linesearch: true,
            beta: S::from(0.5).unwrap(),
            adaptive_restart: true,
            max_linesearch_iterations: 100,
            epsilon: S::from(1e-3).unwrap(),
            sufficient_decrease: SufficientDecrease::Norm,
        }
    }
}

/// Parameter values the solver cannot work with
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("Lipschitz estimate must be positive and finite, got {0}")]
    Lipschitz(f64),
    #[error("line search shrink factor must lie in (0, 1), got {0}")]
    ShrinkFactor(f64),
    #[error("residual tolerance must be non-negative, got {0}")]
    Tolerance(f64),
    #[error("time limit must be non-negative, got {0} seconds")]
    TimeLimit(f64),
}

impl<S: NdFloat> ProximalGradientParams<S> {
    /// Check the parameter ranges the solver assumes.
    ///
    /// The solver itself never calls this; an invalid configuration simply
    /// produces meaningless iterates.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let as_f64 = |v: S| v.to_f64().unwrap_or(std::f64::NAN);

        if !(self.lipschitz > S::zero() && self.lipschitz.is_finite()) {
            return Err(ParamsError::Lipschitz(as_f64(self.lipschitz)));
        }
        if !(self.beta > S::zero() && self.beta < S::one()) {
            return Err(ParamsError::ShrinkFactor(as_f64(self.beta)));
        }
        if !(self.epsilon >= S::zero()) {
            return Err(ParamsError::Tolerance(as_f64(self.epsilon)));
        }
        if !(self.base.max_computation_time >= 0.) {
            return Err(ParamsError::TimeLimit(self.base.max_computation_time));
        }
        Ok(())
    }
}
