use crate::DerivativeSystem;

/// A fixed-step stepping strategy over a [`DerivativeSystem`].
///
/// A stepper wraps a derivative system and, for one state component at a
/// time, computes the slope used to advance that component:
///
/// ```text
/// y[index] += h * stepper.increment(index, x, y, h)
/// ```
///
/// The driver calls `increment` once per component per step, in ascending
/// index order. Steppers hold no state across calls beyond scratch space,
/// which is why `increment` takes `&mut self`.
pub trait Stepper {
    /// The derivative system this stepper advances.
    type System: DerivativeSystem;

    /// Returns the wrapped derivative system.
    fn system(&self) -> &Self::System;

    /// Returns the number of state components the stepper advances.
    fn dimension(&self) -> usize {
        self.system().len()
    }

    /// Computes the slope used to advance component `index` by one step `h`.
    ///
    /// # Errors
    ///
    /// Returns the system's error if a derivative evaluation fails.
    fn increment(
        &mut self,
        index: usize,
        x: f64,
        y: &[f64],
        h: f64,
    ) -> Result<f64, <Self::System as DerivativeSystem>::Error>;
}

/// Type alias for the error returned by a [`Stepper`].
///
/// This is a convenience for accessing the wrapped system's error type without
/// writing out the fully qualified syntax.
pub type StepperError<S> = <<S as Stepper>::System as DerivativeSystem>::Error;

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{DerivativeFn, System};

    /// Midpoint rule, used to check the trait shape with a third strategy.
    struct Midpoint {
        system: System<DerivativeFn>,
        scratch: Vec<f64>,
    }

    impl Stepper for Midpoint {
        type System = System<DerivativeFn>;

        fn system(&self) -> &Self::System {
            &self.system
        }

        fn increment(
            &mut self,
            index: usize,
            x: f64,
            y: &[f64],
            h: f64,
        ) -> Result<f64, StepperError<Self>> {
            let k1 = self.system.evaluate(index, x, y)?;
            self.scratch.clear();
            self.scratch.extend(y.iter().map(|v| v + k1 * h / 2.0));
            self.system.evaluate(index, x + h / 2.0, &self.scratch)
        }
    }

    fn linear(x: f64, _y: &[f64]) -> f64 {
        2.0 * x
    }

    #[test]
    fn dimension_defaults_to_system_len() {
        let stepper = Midpoint {
            system: System::new(vec![linear as DerivativeFn, linear, linear]),
            scratch: Vec::new(),
        };

        assert_eq!(stepper.dimension(), 3);
    }

    #[test]
    fn custom_stepper_computes_increment() {
        let mut stepper = Midpoint {
            system: System::new(vec![linear as DerivativeFn]),
            scratch: Vec::new(),
        };

        // Slope of 2x sampled at the midpoint of [1, 1.5].
        let slope = stepper.increment(0, 1.0, &[0.0], 0.5).expect("infallible");
        assert!((slope - 2.5).abs() < 1e-12);
    }
}
