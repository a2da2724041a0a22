//! Proximal gradient method with optional FISTA acceleration

use ndarray::NdFloat;
use tracing::{debug, trace, warn};

use super::{IterationReport, ProximalGradientResult, ProximalGradientStatus};
use crate::params::{ProximalGradientMode, ProximalGradientParams, SufficientDecrease};
use crate::stopwatch::Stopwatch;
use crate::variable::Variable;

/// Added to the residual denominator so a zero gradient cannot divide by zero
const RESIDUAL_GUARD: f64 = 1e-6;

/// Proximal Gradient Method for Composite Minimization
///
/// Minimizes $`F(x) = f(x) + g(x)`$ where $`f`$ is smooth with a Lipschitz
/// gradient and $`g`$ has an inexpensive proximal operator, following
/// Section 4.2 of Parikh and Boyd [\[PB14\]](#references).
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// \hat y_i &= y_i - \lambda_i \nabla f(y_i) \\
/// x_{i+1} &= \mathrm{prox}_{\lambda_i g}(\hat y_i) \\
/// t_{i+1} &= \frac{1 + \sqrt{1 + 4 t_i^2}}{2} \\
/// y_{i+1} &= x_{i+1} + \frac{t_i - 1}{t_{i+1}} (x_{i+1} - x_i)
/// \end{aligned}
/// ```
/// with $`y_0 = x_0`$, $`t_0 = 1`$ and $`\lambda_0 = 1/L`$. In
/// [`Simple`](ProximalGradientMode::Simple) mode $`y_{i+1} = x_{i+1}`$.
/// With line search enabled, $`\lambda_i`$ is shrunk by `beta` until the
/// sufficient decrease condition of [`SufficientDecrease`] holds; the
/// step size is never increased again. Accelerated runs restart the
/// momentum whenever $`\langle x_{i+1} - x_i, y_i - x_{i+1} \rangle > 0`$
/// [\[OC15\]](#references).
///
/// Termination
/// -----------
/// Iteration stops when the normalized residual
/// ```math
/// r = \frac{\| \nabla f(x) + \tfrac{1}{\lambda}(\hat y - x) \|}
///          {\max(\|\nabla f(x)\|, \|\tfrac{1}{\lambda}(\hat y - x)\|) + 10^{-6}}
/// ```
/// drops below `epsilon` [\[GSB14\]](#references), when the time limit is
/// exceeded, when the line search fails, or after `max_iterations`
/// iterations. A failed line search discards its trial point and returns
/// the previous iterate.
///
/// Parameters
/// ----------
/// - __f:__         smooth term
/// - __grad_f:__    gradient of the smooth term
/// - __g:__         nonsmooth term
/// - __prox_g:__    proximal operator, `prox_g(y, s)` $`= \mathrm{arg}\!\min_z g(z) + \frac{1}{2s}\|z - y\|^2`$
/// - __x0:__        initial guess
/// - __params:__    see [`ProximalGradientParams`]
/// - __observer:__  optional function called with an [`IterationReport`]
///                   after each completed iteration
///
/// References
/// ----------
/// \[PB14\]: Parikh N, Boyd S, "Proximal Algorithms",
///           Foundations and Trends in Optimization 1(3), 2014
/// \[OC15\]: O'Donoghue B, Candes E, "Adaptive Restart for Accelerated
///           Gradient Schemes", Found. Comput. Math. 15, 2015
/// \[GSB14\]: Goldstein T, Studer C, Baraniuk R, "A Field Guide to
///           Forward-Backward Splitting with a FASTA Implementation", arxiv 1411.3406
pub fn proximal_gradient<V, S>(
    f: impl Fn(&V) -> S,
    grad_f: impl Fn(&V) -> V,
    g: impl Fn(&V) -> S,
    prox_g: impl Fn(&V, S) -> V,
    x0: &V,
    params: &ProximalGradientParams<S>,
    mut observer: Option<&mut dyn FnMut(&IterationReport<'_, V, S>)>,
) -> ProximalGradientResult<V, S>
where
    V: Variable<S>,
    S: NdFloat,
{
    let objective = |x: &V| f(x) + g(x);

    let two = S::from(2.).unwrap();
    let four = S::from(4.).unwrap();
    let guard = S::from(RESIDUAL_GUARD).unwrap();

    let mut x_prev = x0.clone();
    let mut f_x_prev = objective(&x_prev);
    let mut y = x0.clone();
    let mut lambda = S::one() / params.lipschitz;
    let mut t_prev = S::one();

    let mut status = ProximalGradientStatus::IterationLimit;
    let mut residual = S::nan();
    let mut time = Vec::new();
    let mut objective_values = Vec::new();
    let mut residuals = Vec::new();

    let verbose = params.base.verbose;
    let prec = params.base.precision;
    let iter_width = params.base.max_iterations.to_string().len();
    let value_width = prec + 7;
    if verbose {
        println!("Proximal gradient optimization:\n");
    }

    let watch = Stopwatch::start();
    'iterations: for iter in 0..params.base.max_iterations {
        let elapsed_time = watch.elapsed();

        // forward (gradient) step, then backward (proximal) step
        let grad_f_y = grad_f(&y);
        let mut hat_y = y.clone() - grad_f_y.clone() * lambda;
        let mut x = prox_g(&hat_y, lambda);
        let mut f_x = objective(&x);

        let mut linesearch_iters = 0;
        if params.linesearch {
            let f_y = f(&y);
            loop {
                let x_minus_y = x.clone() - y.clone();
                let dist2 = x_minus_y.dot(&x_minus_y);
                let model = match params.sufficient_decrease {
                    SufficientDecrease::Norm => dist2.sqrt(),
                    SufficientDecrease::SquaredNorm => dist2,
                };
                let bound = f_y + x_minus_y.dot(&grad_f_y) + model / (two * lambda) + g(&x);
                if f_x <= bound {
                    break;
                }
                if linesearch_iters == params.max_linesearch_iterations {
                    warn!(
                        iter,
                        linesearch_iters,
                        stepsize = %lambda,
                        "line search could not find sufficient decrease"
                    );
                    status = ProximalGradientStatus::Linesearch;
                    break 'iterations;
                }
                linesearch_iters += 1;
                lambda = lambda * params.beta;
                hat_y = y.clone() - grad_f_y.clone() * lambda;
                x = prox_g(&hat_y, lambda);
                f_x = objective(&x);
            }
        }

        let dx = x.clone() - x_prev.clone();
        let df = f_x_prev - f_x;

        // (hat_y - x) / lambda is a subgradient of g at x
        let grad_f_x = grad_f(&x);
        let subgrad_g_x = (hat_y - x.clone()) * (S::one() / lambda);
        let norm_grad = grad_f_x.norm();
        let norm_subgrad = subgrad_g_x.norm();
        residual = (grad_f_x + subgrad_g_x).norm() / (norm_grad.max(norm_subgrad) + guard);

        trace!(
            iter,
            elapsed_time,
            objective = %f_x_prev,
            residual = %residual,
            linesearch_iters,
            stepsize = %lambda,
            "proximal gradient iteration"
        );
        if verbose {
            println!(
                "Iter: {:>iw$}, time: {:.p$e}, F: {:>vw$.p$e}, res: {:.p$e}, ls iters: {}, |dx|: {:.p$e}, dF: {:>vw$.p$e}",
                iter,
                elapsed_time,
                f_x_prev,
                residual,
                linesearch_iters,
                dx.norm(),
                df,
                iw = iter_width,
                vw = value_width,
                p = prec,
            );
        }

        time.push(elapsed_time);
        objective_values.push(f_x_prev);
        residuals.push(residual);

        if let Some(observer) = observer.as_mut() {
            observer(&IterationReport {
                iteration: iter,
                elapsed_time,
                x: &x_prev,
                f: f_x_prev,
                residual,
                linesearch_iters,
                dx: &dx,
                df,
                stepsize: lambda,
                momentum: t_prev,
            });
        }

        let stop = if residual < params.epsilon {
            Some(ProximalGradientStatus::ProxGradResidual)
        } else if watch.elapsed() > params.base.max_computation_time {
            Some(ProximalGradientStatus::ElapsedTime)
        } else {
            None
        };
        if let Some(reason) = stop {
            status = reason;
            x_prev = x;
            f_x_prev = f_x;
            break;
        }

        y = match params.mode {
            ProximalGradientMode::Accelerated => {
                if params.adaptive_restart && dx.dot(&(y - x.clone())) > S::zero() {
                    t_prev = S::one();
                }
                let t = (S::one() + (S::one() + four * t_prev * t_prev).sqrt()) / two;
                let momentum = (t_prev - S::one()) / t;
                t_prev = t;
                x.clone() + dx * momentum
            }
            ProximalGradientMode::Simple => x.clone(),
        };
        x_prev = x;
        f_x_prev = f_x;
    }

    let elapsed_time = watch.elapsed();
    debug!(
        status = %status,
        iterations = objective_values.len(),
        objective = %f_x_prev,
        elapsed_time,
        "proximal gradient finished"
    );
    if verbose {
        println!("\n\nOptimization finished!");
        match status {
            ProximalGradientStatus::ProxGradResidual => println!(
                "Found minimizer! (Proximal fixed-point residual: {:.p$e})",
                residual,
                p = prec
            ),
            ProximalGradientStatus::IterationLimit => {
                println!("Algorithm exceeded maximum number of outer iterations")
            }
            ProximalGradientStatus::Linesearch => println!(
                "Linesearch was unable to find an update with adequate progress in the allotted number of iterations!"
            ),
            ProximalGradientStatus::ElapsedTime => println!(
                "Algorithm exceeded maximum allowed computation time: {:.p$e} > {:.p$e}",
                elapsed_time,
                params.base.max_computation_time,
                p = prec
            ),
        }
        println!("Final objective value: {:.p$e}", f_x_prev, p = prec);
        println!("Total elapsed computation time: {:.p$e} seconds\n", elapsed_time, p = prec);
    }

    ProximalGradientResult {
        x: x_prev,
        f: f_x_prev,
        elapsed_time,
        time,
        objective_values,
        residuals,
        status,
    }
}


#[allow(non_snake_case)]
#[cfg(all(rustc_nightly, test))]
mod benches {
    use super::*;
    use crate::linop::LeastSquares;
    use crate::prox::operators::{l1_norm, soft_threshold};
    use ndarray::prelude::*;
    use test::Bencher;

    #[bench]
    fn fista_lasso(bench: &mut Bencher) {
        let A = Array2::from_shape_fn((50, 20), |(i, j)| ((i * 7 + j * 3) % 11) as f64 - 5.);
        let b = Array1::from_shape_fn(50, |i| (i % 5) as f64);
        let ls = LeastSquares::new(&A, b.view());
        let params = ProximalGradientParams {
            lipschitz: 1e3,
            ..Default::default()
        };
        bench.iter(|| {
            proximal_gradient(
                |x: &Array1<f64>| ls.value(x),
                |x: &Array1<f64>| ls.gradient(x),
                |x: &Array1<f64>| 0.1 * l1_norm(x),
                |y: &Array1<f64>, s: f64| soft_threshold(y, s * 0.1),
                &Array1::zeros(20),
                &params,
                None,
            )
        });
    }
}
