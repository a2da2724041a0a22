//! Linear operators, adjoints and the least-squares smooth term
//! building upon ndarray_linalg::operator
//!
//! The least-squares objective $`f(x) = \frac12 \|Ax - b\|_2^2`$ is the
//! smooth term of many composite problems (LASSO, nonnegative least
//! squares, box-constrained regression). Its gradient
//! $`A^H(Ax - b)`$ is Lipschitz with constant $`\sigma_1(A)^2`$, the
//! largest singular value of $`A`$ squared, which [`power_iteration`]
//! estimates without factorizing $`A`$.

use ndarray::prelude::*;
use ndarray::{Data, NdFloat};
pub use ndarray_linalg::diagonal::Diagonal;
pub use ndarray_linalg::operator::LinearOperator;
use ndarray_linalg::Scalar;
use num_traits::Float;

pub trait Adjoint<'a> {
    type Output;
    fn adj(&'a self) -> Self::Output;
}

impl<'a, A, S> Adjoint<'a> for ArrayBase<S, Ix2>
where
    A: 'a + Float,
    S: Data<Elem = A>,
{
    type Output = ArrayView<'a, A, Ix2>;

    fn adj(&'a self) -> Self::Output {
        self.t()
    }
}

// real diagonals are self-adjoint
impl<'a, A, Sa> Adjoint<'a> for Diagonal<Sa>
where
    A: 'a + Float,
    Sa: 'a + Data<Elem = A>,
{
    type Output = &'a Diagonal<Sa>;

    fn adj(&'a self) -> Self::Output {
        self
    }
}

/// $`f(x) = \frac12 \|Ax - b\|_2^2`$ for a linear operator $`A`$
pub struct LeastSquares<'a, R, S> {
    op: &'a R,
    target: ArrayView1<'a, S>,
}

impl<'a, R, S> LeastSquares<'a, R, S>
where
    S: NdFloat + Scalar,
    R: LinearOperator<Elem = S>,
{
    pub fn new(op: &'a R, target: ArrayView1<'a, S>) -> Self {
        LeastSquares { op, target }
    }

    /// $`Ax - b`$
    pub fn residual(&self, x: &Array1<S>) -> Array1<S> {
        self.op.apply(x) - &self.target
    }

    pub fn value(&self, x: &Array1<S>) -> S {
        let r = self.residual(x);
        r.dot(&r) / S::from(2.).unwrap()
    }

    /// $`A^H(Ax - b)`$
    pub fn gradient<Q>(&self, x: &Array1<S>) -> Array1<S>
    where
        R: Adjoint<'a, Output = Q>,
        Q: LinearOperator<Elem = S>,
    {
        self.op.adj().apply(&self.residual(x))
    }
}

/// Estimate $`\|A^HA\|_2 = \sigma_1(A)^2`$ by power iteration
///
/// Returns the Rayleigh quotient of $`A^HA`$ at the last normalized
/// iterate, which approaches the largest eigenvalue from below. `x0` should
/// not be orthogonal to the leading right singular vector; a vector of ones
/// is usually fine. Returns zero if the iterate vanishes.
pub fn power_iteration<'a, S, R, Q>(op: &'a R, x0: ArrayView1<S>, maxiter: usize) -> S
where
    S: NdFloat + Scalar,
    R: LinearOperator<Elem = S> + Adjoint<'a, Output = Q>,
    Q: LinearOperator<Elem = S>,
{
    let mut v = x0.to_owned();
    let mut estimate = S::zero();
    for _iter in 0..maxiter {
        let norm = Float::sqrt(v.dot(&v));
        if norm == S::zero() {
            return S::zero();
        }
        v.mapv_inplace(|vi| vi / norm);
        let w = op.adj().apply(&op.apply(&v));
        estimate = v.dot(&w);
        v = w;
    }
    estimate
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray_linalg::diagonal::AsDiagonal;

    #[test]
    fn ndarray_adj() {
        let A = array![[1., 2.], [3., 4.]];
        let B = array![[1., 3.], [2., 4.]];
        assert!(A.adj() == B);
        assert!(A.adj().adj() == A);
    }

    #[test]
    fn diagonal_adj() {
        let d = array![1., 2., 3., 4.];
        let D = d.as_diagonal();
        assert!(D.adj().apply(&array![1., 1., 1., 1.]) == d);
    }

    #[test]
    fn least_squares_value_and_gradient() {
        let A = array![[1., 2.], [0., 1.], [1., 0.]];
        let b = array![1., 1., 1.];
        let ls = LeastSquares::new(&A, b.view());
        let x = array![1., -1.];

        // Ax - b = [-2, -2, 0]
        assert_eq!(ls.residual(&x), array![-2., -2., 0.]);
        assert_abs_diff_eq!(ls.value(&x), 4.);
        assert_abs_diff_eq!(ls.gradient(&x), array![-2., -6.]);
    }

    #[test]
    fn least_squares_gradient_matches_finite_differences() {
        let A = array![[2., -1., 0.5], [0.3, 1., 1.], [0., 0.5, -2.], [1., 1., 1.]];
        let b = array![0.5, -1., 2., 0.];
        let ls = LeastSquares::new(&A, b.view());
        let x = array![0.2, -0.7, 1.3];
        let grad = ls.gradient(&x);
        let h = 1e-6;
        for i in 0..3 {
            let mut xp = x.clone();
            let mut xm = x.clone();
            xp[i] += h;
            xm[i] -= h;
            let fd = (ls.value(&xp) - ls.value(&xm)) / (2. * h);
            assert_abs_diff_eq!(grad[i], fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn power_iteration_finds_largest_squared_singular_value() {
        let A = array![[1., 0., 0.], [0., -2., 0.], [0., 0., 3.]];
        let L = power_iteration(&A, Array1::<f64>::ones(3).view(), 100);
        assert_abs_diff_eq!(L, 9., epsilon = 1e-8);

        let Z = Array2::<f64>::zeros((2, 2));
        assert_eq!(power_iteration(&Z, Array1::<f64>::ones(2).view(), 10), 0.);
    }
}
