//! The logistic map x_{n+1} = r * x_n * (1 - x_n).

use crate::traits::{DynamicalSystem, Scalar};

/// Logistic map with a fixed growth coefficient `r`.
///
/// No domain checks are made: coefficients outside [0, 4] or states outside
/// [0, 1] are iterated as-is and may diverge to infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticMap<T: Scalar> {
    pub coefficient: T,
}

impl<T: Scalar> LogisticMap<T> {
    pub fn new(coefficient: T) -> Self {
        Self { coefficient }
    }
}

impl<T: Scalar> DynamicalSystem<T> for LogisticMap<T> {
    #[inline]
    fn apply(&self, x: T) -> T {
        // Evaluated as (r * x) * (1 - x).
        self.coefficient * x * (T::one() - x)
    }
}

#[cfg(test)]
mod tests {
    use super::LogisticMap;
    use crate::traits::DynamicalSystem;

    #[test]
    fn apply_matches_closed_form() {
        let map = LogisticMap::new(3.56_f64);
        let x = 0.6_f64;
        assert_eq!(map.apply(x), 3.56 * 0.6 * (1.0 - 0.6));
    }

    #[test]
    fn fixed_point_is_preserved() {
        // x* = 1 - 1/r is invariant for r = 2.
        let map = LogisticMap::new(2.0_f64);
        assert_eq!(map.apply(0.5), 0.5);
    }

    #[test]
    fn apply_works_in_single_precision() {
        let map = LogisticMap::new(4.0_f32);
        assert_eq!(map.apply(0.5_f32), 1.0);
    }

    #[test]
    fn out_of_domain_values_are_not_clamped() {
        let map = LogisticMap::new(5.0_f64);
        let x = map.apply(1.5);
        assert!(x < 0.0);
    }
}
