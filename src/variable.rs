//! Vector-space algebra consumed by the proximal gradient solver
//!
//! The solver never looks inside an iterate. All it needs is addition,
//! subtraction, scaling by a real scalar and an inner product, so any type
//! providing those can be optimized over: plain `f32`/`f64`, owned
//! `ndarray` arrays of any dimension, or a caller-defined type.

use std::ops::{Add, Mul, Sub};

use ndarray::{Array, Dimension, LinalgScalar};
use num_traits::Float;

/// Real inner product $`\langle a, b \rangle`$
pub trait InnerProduct<S> {
    fn dot(&self, other: &Self) -> S;
}

/// An element of a real inner-product space with scalar field `S`.
///
/// Implemented automatically for every type with the required operators;
/// scalars multiply on the right, i.e. `v * c`.
pub trait Variable<S>:
    Clone + Add<Output = Self> + Sub<Output = Self> + Mul<S, Output = Self> + InnerProduct<S>
{
    /// Euclidean norm induced by the inner product
    fn norm(&self) -> S
    where
        S: Float,
    {
        self.dot(self).sqrt()
    }
}

impl<S, V> Variable<S> for V where
    V: Clone + Add<Output = V> + Sub<Output = V> + Mul<S, Output = V> + InnerProduct<S>
{
}

impl InnerProduct<f64> for f64 {
    #[inline]
    fn dot(&self, other: &f64) -> f64 {
        self * other
    }
}

impl InnerProduct<f32> for f32 {
    #[inline]
    fn dot(&self, other: &f32) -> f32 {
        self * other
    }
}

/// Frobenius inner product, i.e. the sum of elementwise products.
/// Both arrays must have the same shape.
impl<A, D> InnerProduct<A> for Array<A, D>
where
    A: LinalgScalar,
    D: Dimension,
{
    fn dot(&self, other: &Self) -> A {
        debug_assert_eq!(self.shape(), other.shape());
        self.iter()
            .zip(other.iter())
            .fold(A::zero(), |acc, (&a, &b)| acc + a * b)
    }
}
