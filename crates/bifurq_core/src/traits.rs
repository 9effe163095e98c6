use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Numeric type a map can be iterated over.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A one-dimensional discrete-time system x_{n+1} = f(x_n).
pub trait DynamicalSystem<T: Scalar> {
    fn apply(&self, x: T) -> T;
}

/// Advances a state through a system one iteration at a time.
pub trait Steppable<T: Scalar> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, state: &mut T);

    /// Iterations performed so far.
    fn iterations(&self) -> usize;
}
