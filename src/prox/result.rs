use std::fmt;

/// Why a proximal gradient run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProximalGradientStatus {
    /// The normalized fixed-point residual fell below `epsilon`
    ProxGradResidual,
    /// `max_iterations` iterations were completed without converging
    IterationLimit,
    /// Backtracking could not satisfy the sufficient decrease condition
    /// within `max_linesearch_iterations` shrinkages
    Linesearch,
    /// `max_computation_time` was exceeded
    ElapsedTime,
}

impl fmt::Display for ProximalGradientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ProximalGradientStatus::ProxGradResidual => "proximal fixed-point residual converged",
            ProximalGradientStatus::IterationLimit => "maximum number of iterations reached",
            ProximalGradientStatus::Linesearch => "line search failed to find sufficient decrease",
            ProximalGradientStatus::ElapsedTime => "maximum computation time exceeded",
        };
        f.write_str(msg)
    }
}

/// Output of [`proximal_gradient`](super::proximal_gradient)
///
/// The histories are parallel arrays with one entry per completed
/// iteration, each recorded at the *start* of that iteration.
#[derive(Clone, Debug)]
pub struct ProximalGradientResult<V, S> {
    /// Last accepted iterate
    pub x: V,
    /// Composite objective $`F(x) = f(x) + g(x)`$ at `x`
    pub f: S,
    /// Total computation time in seconds
    pub elapsed_time: f64,
    /// Elapsed time at the start of each iteration, in seconds
    pub time: Vec<f64>,
    /// Objective value at the start of each iteration
    pub objective_values: Vec<S>,
    /// Fixed-point residual computed in each iteration
    pub residuals: Vec<S>,
    pub status: ProximalGradientStatus,
}

impl<V, S> ProximalGradientResult<V, S> {
    /// Number of completed iterations
    pub fn iterations(&self) -> usize {
        self.objective_values.len()
    }
}

/// Snapshot of one completed iteration handed to the observer
#[derive(Debug)]
pub struct IterationReport<'a, V, S> {
    /// Zero-based iteration index
    pub iteration: usize,
    /// Elapsed time at the start of the iteration
    pub elapsed_time: f64,
    /// Iterate at the start of the iteration
    pub x: &'a V,
    /// Objective value at `x`
    pub f: S,
    /// Normalized fixed-point residual at the new iterate
    pub residual: S,
    /// Step shrinkages performed by the line search in this iteration
    pub linesearch_iters: usize,
    /// Composite step, new iterate minus `x`
    pub dx: &'a V,
    /// Decrease of the objective, `f` minus the new objective value
    pub df: S,
    /// Step size that produced the new iterate
    pub stepsize: S,
    /// Momentum parameter $`t`$ the extrapolation into this iteration used;
    /// always one in simple mode
    pub momentum: S,
}
