//! Forward Euler stepper.
//!
//! Advances each component with the slope at the start of the step:
//!
//! ```text
//! y_{n+1}[i] = y_n[i] + h * f_i(x_n, y_n)
//! ```

use odestep_core::{DerivativeSystem, Stepper, StepperError};

/// Explicit (forward) Euler stepping strategy.
///
/// One derivative evaluation per component per step; first-order accurate.
#[derive(Debug, Clone)]
pub struct Euler<S> {
    system: S,
}

impl<S: DerivativeSystem> Euler<S> {
    /// Wraps a derivative system in an Euler stepper.
    #[must_use]
    pub fn new(system: S) -> Self {
        Self { system }
    }

    /// Consumes the stepper and returns the wrapped system.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.system
    }
}

impl<S: DerivativeSystem> Stepper for Euler<S> {
    type System = S;

    fn system(&self) -> &S {
        &self.system
    }

    fn increment(
        &mut self,
        index: usize,
        x: f64,
        y: &[f64],
        _h: f64,
    ) -> Result<f64, StepperError<Self>> {
        self.system.evaluate(index, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use odestep_core::{DerivativeFn, System};

    fn velocity(_x: f64, y: &[f64]) -> f64 {
        y[1]
    }

    fn decay(x: f64, _y: &[f64]) -> f64 {
        -0.01 * (-0.8 * x).exp()
    }

    #[test]
    fn increment_is_the_derivative() {
        let mut stepper = Euler::new(System::new(vec![velocity as DerivativeFn, decay]));

        let y = [0.0, 0.5];
        assert_relative_eq!(stepper.increment(0, 0.0, &y, 0.1).unwrap(), 0.5);
        assert_relative_eq!(stepper.increment(1, 0.0, &y, 0.1).unwrap(), -0.01);
    }

    #[test]
    fn increment_ignores_step_size() {
        let mut stepper = Euler::new(System::new(vec![decay as DerivativeFn]));

        let small = stepper.increment(0, 1.0, &[0.0], 0.001).unwrap();
        let large = stepper.increment(0, 1.0, &[0.0], 10.0).unwrap();

        assert_eq!(small, large);
    }

    #[test]
    fn borrows_system() {
        let system = System::new(vec![velocity as DerivativeFn, decay]);
        let stepper = Euler::new(&system);

        assert_eq!(stepper.dimension(), 2);
        assert_eq!(stepper.into_inner().functions().len(), 2);
    }
}
