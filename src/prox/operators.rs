//! Proximal operators and indicator functions for common nonsmooth terms
//!
//! A projection onto a closed convex set is the proximal operator of the
//! set's indicator function for every step size, so the projections below
//! can be passed directly as `prox_g` with the step ignored.

use ndarray::prelude::*;
use ndarray::{Data, NdFloat};

/// Scalar soft thresholding, the proximal operator of $`\tau |x|`$
#[inline]
pub fn shrink<S: NdFloat>(v: S, threshold: S) -> S {
    if v > threshold {
        v - threshold
    } else if v < -threshold {
        v + threshold
    } else {
        S::zero()
    }
}

/// Elementwise soft thresholding, the proximal operator of $`\tau \|x\|_1`$
///
/// For $`g(x) = \mu \|x\|_1`$ use `|y, s| soft_threshold(y, s * mu)`.
pub fn soft_threshold<S, T, D>(v: &ArrayBase<T, D>, threshold: S) -> Array<S, D>
where
    S: NdFloat,
    T: Data<Elem = S>,
    D: Dimension,
{
    v.mapv(|vi| shrink(vi, threshold))
}

/// $`\|x\|_1`$
pub fn l1_norm<S, T, D>(x: &ArrayBase<T, D>) -> S
where
    S: NdFloat,
    T: Data<Elem = S>,
    D: Dimension,
{
    x.fold(S::zero(), |acc, &xi| acc + xi.abs())
}

/// Projection onto the nonnegative orthant
pub fn project_nonnegative<S, T, D>(v: &ArrayBase<T, D>) -> Array<S, D>
where
    S: NdFloat,
    T: Data<Elem = S>,
    D: Dimension,
{
    v.mapv(|vi| vi.max(S::zero()))
}

/// Projection onto the box $`\{x : l \leq x_i \leq u\}`$
pub fn project_box<S, T, D>(v: &ArrayBase<T, D>, lower: S, upper: S) -> Array<S, D>
where
    S: NdFloat,
    T: Data<Elem = S>,
    D: Dimension,
{
    debug_assert!(lower <= upper);
    v.mapv(|vi| vi.max(lower).min(upper))
}

/// Projection onto the Euclidean ball $`\{x : \|x\|_2 \leq r\}`$
pub fn project_l2_ball<S, T, D>(v: &ArrayBase<T, D>, radius: S) -> Array<S, D>
where
    S: NdFloat,
    T: Data<Elem = S>,
    D: Dimension,
{
    let norm = v.fold(S::zero(), |acc, &vi| acc + vi * vi).sqrt();
    if norm <= radius {
        v.to_owned()
    } else {
        v.mapv(|vi| vi * (radius / norm))
    }
}

/// Indicator of the nonnegative orthant: zero inside, infinity outside
pub fn indicator_nonnegative<S, T, D>(x: &ArrayBase<T, D>) -> S
where
    S: NdFloat,
    T: Data<Elem = S>,
    D: Dimension,
{
    if x.iter().all(|&xi| xi >= S::zero()) {
        S::zero()
    } else {
        S::infinity()
    }
}

/// Indicator of the box $`\{x : l \leq x_i \leq u\}`$
pub fn indicator_box<S, T, D>(x: &ArrayBase<T, D>, lower: S, upper: S) -> S
where
    S: NdFloat,
    T: Data<Elem = S>,
    D: Dimension,
{
    if x.iter().all(|&xi| xi >= lower && xi <= upper) {
        S::zero()
    } else {
        S::infinity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn shrink_scalar() {
        assert_eq!(shrink(3., 1.), 2.);
        assert_eq!(shrink(-3., 1.), -2.);
        assert_eq!(shrink(0.5, 1.), 0.);
        assert_eq!(shrink(-1.0f32, 1.), 0.);
    }

    #[test]
    fn soft_threshold_solves_prox_problem() {
        // prox of tau*|x|_1 minimizes tau*|z|_1 + 1/2 |z - v|^2, which has
        // the subgradient optimality condition v - z in tau * sign(z)
        let v = array![[2.5f64, -0.3], [-4., 1.]];
        let tau = 1f64;
        let z = soft_threshold(&v, tau);
        assert_eq!(z, array![[1.5, 0.], [-3., 0.]]);
        for (&vi, &zi) in v.iter().zip(z.iter()) {
            if zi != 0. {
                assert_abs_diff_eq!(vi - zi, tau * zi.signum());
            } else {
                assert!(vi.abs() <= tau);
            }
        }
        assert_eq!(l1_norm(&z), 4.5);
        assert_abs_diff_eq!(l1_norm(&v.view()), 7.8, epsilon = 1e-12);
    }

    #[test]
    fn projections() {
        let v = array![-1., 0.5, 3.];
        assert_eq!(project_nonnegative(&v), array![0., 0.5, 3.]);
        assert_eq!(project_box(&v, 0., 1.), array![0., 0.5, 1.]);

        let ball = project_l2_ball(&array![3., 4.], 1.);
        assert_abs_diff_eq!(ball, array![0.6, 0.8], epsilon = 1e-12);
        let inside = array![0.1, -0.2];
        assert_eq!(project_l2_ball(&inside, 1.), inside);
    }

    #[test]
    fn indicators() {
        assert_eq!(indicator_nonnegative(&array![0., 1.]), 0.);
        assert_eq!(indicator_nonnegative(&array![0., -1e-9]), std::f64::INFINITY);
        assert_eq!(indicator_box(&array![0.2, 0.9], 0., 1.), 0.);
        assert_eq!(indicator_box(&array![1.5], 0., 1.), std::f64::INFINITY);
    }
}
