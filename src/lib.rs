//! The `proximal-gradient` crate minimizes composite objectives
//! ```math
//! F(x) = f(x) + g(x)
//! ```
//! where _f_ is smooth with a Lipschitz continuous gradient and _g_ is
//! convex, possibly non-smooth, but has an inexpensive proximal operator.
//!
//! It provides:
//! - the proximal gradient method (ISTA) and its accelerated variant (FISTA)
//!   with backtracking line search and adaptive momentum restart
//!   ([`prox::proximal_gradient`])
//! - common proximal operators and projections for `ndarray` arrays
//!   ([`prox::operators`])
//! - a least-squares smooth term over abstract linear operators, with a
//!   power-iteration estimate of its Lipschitz constant ([`linop`])
//!
//! The solver is generic over the optimization variable: anything
//! implementing [`Variable`] can be used, including `f64`, `f32` and owned
//! `ndarray` arrays of any dimension.
//!
//! ```
//! use ndarray::{array, Array1};
//! use proximal_gradient::params::ProximalGradientParams;
//! use proximal_gradient::prox::operators::{l1_norm, soft_threshold};
//! use proximal_gradient::prox::{proximal_gradient, ProximalGradientStatus};
//!
//! // minimize 1/2 |x - b|^2 + |x|_1
//! let b = array![3., -0.5, -2.];
//! let params = ProximalGradientParams {
//!     epsilon: 1e-8,
//!     ..Default::default()
//! };
//! let res = proximal_gradient(
//!     |x: &Array1<f64>| (x - &b).mapv(|d| d * d).sum() / 2.,
//!     |x: &Array1<f64>| x - &b,
//!     |x: &Array1<f64>| l1_norm(x),
//!     |y: &Array1<f64>, s: f64| soft_threshold(y, s),
//!     &Array1::zeros(3),
//!     &params,
//!     None,
//! );
//! assert_eq!(res.status, ProximalGradientStatus::ProxGradResidual);
//! assert!((res.x[0] - 2.).abs() < 1e-6);
//! ```
//!
//! Progress is reported through `tracing` events; set
//! `params.base.verbose` for a plain text trace on stdout.

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

pub mod linop;
pub mod params;
pub mod prox;
pub mod stopwatch;
pub mod variable;

pub use variable::{InnerProduct, Variable};
