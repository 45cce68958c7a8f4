//! Classical fourth-order Runge–Kutta stepper.
//!
//! Stages are built per derivative function. When advancing component `i`,
//! each stage slope of `f_i` is broadcast across the *whole* state vector to
//! form the next stage state:
//!
//! ```text
//! k1 = f_i(x,         y)
//! k2 = f_i(x + h/2,   y + k1·h/2)
//! k3 = f_i(x + h/2,   y + k2·h/2)
//! k4 = f_i(x + h,     y + k3·h)
//!
//! increment = (k1 + 2·k2 + 2·k3 + k4) / 6
//! ```
//!
//! Here `y + k·h/2` adds the same scalar to every component. This is the
//! single-equation RK4 formula applied to each function in turn, not the
//! vector form that evaluates every function at every stage. For a scalar
//! equation the two coincide.

use odestep_core::{DerivativeSystem, Stepper, StepperError};

/// Classical fourth-order Runge–Kutta stepping strategy.
///
/// Four derivative evaluations per component per step. The stepper keeps a
/// scratch buffer for the stage state; it is overwritten on every stage and
/// carries nothing between calls.
#[derive(Debug, Clone)]
pub struct RungeKutta<S> {
    system: S,
    stage: Vec<f64>,
}

impl<S: DerivativeSystem> RungeKutta<S> {
    /// Wraps a derivative system in a Runge–Kutta stepper.
    #[must_use]
    pub fn new(system: S) -> Self {
        let stage = Vec::with_capacity(system.len());
        Self { system, stage }
    }

    /// Consumes the stepper and returns the wrapped system.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.system
    }

    /// Evaluates function `index` at `x` with `shift` added to every component of `y`.
    fn stage_slope(
        &mut self,
        index: usize,
        x: f64,
        y: &[f64],
        shift: f64,
    ) -> Result<f64, S::Error> {
        self.stage.clear();
        self.stage.extend(y.iter().map(|value| value + shift));
        self.system.evaluate(index, x, &self.stage)
    }
}

impl<S: DerivativeSystem> Stepper for RungeKutta<S> {
    type System = S;

    fn system(&self) -> &S {
        &self.system
    }

    fn increment(
        &mut self,
        index: usize,
        x: f64,
        y: &[f64],
        h: f64,
    ) -> Result<f64, StepperError<Self>> {
        let half = h / 2.0;

        let k1 = self.system.evaluate(index, x, y)?;
        let k2 = self.stage_slope(index, x + half, y, k1 * h / 2.0)?;
        let k3 = self.stage_slope(index, x + half, y, k2 * h / 2.0)?;
        let k4 = self.stage_slope(index, x + h, y, k3 * h)?;

        Ok((k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0)
    }
}
