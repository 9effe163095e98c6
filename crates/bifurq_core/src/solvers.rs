use crate::traits::{DynamicalSystem, Scalar, Steppable};
use std::marker::PhantomData;

/// Discrete Map Stepper
/// Replaces the state with f(state) and counts the iterations.
pub struct DiscreteMap<T: Scalar> {
    iterations: usize,
    _scalar: PhantomData<T>,
}

impl<T: Scalar> DiscreteMap<T> {
    pub fn new() -> Self {
        Self {
            iterations: 0,
            _scalar: PhantomData,
        }
    }
}

impl<T: Scalar> Default for DiscreteMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> Steppable<T> for DiscreteMap<T> {
    fn step(&mut self, system: &impl DynamicalSystem<T>, state: &mut T) {
        *state = system.apply(*state);
        self.iterations += 1;
    }

    fn iterations(&self) -> usize {
        self.iterations
    }
}

#[cfg(test)]
mod tests {
    use super::DiscreteMap;
    use crate::logistic::LogisticMap;
    use crate::traits::Steppable;

    #[test]
    fn discrete_map_advances_state_and_counter() {
        let system = LogisticMap::new(2.0_f64);
        let mut stepper = DiscreteMap::<f64>::new();
        let mut state = 0.25;

        stepper.step(&system, &mut state);
        assert_eq!(stepper.iterations(), 1);
        assert_eq!(state, 2.0 * 0.25 * 0.75);

        stepper.step(&system, &mut state);
        assert_eq!(stepper.iterations(), 2);
        assert_eq!(state, 0.5);
    }
}
