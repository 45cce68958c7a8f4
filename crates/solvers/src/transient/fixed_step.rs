//! Fixed-step integration driver.
//!
//! The driver owns the running state `(x, y)` and advances it with a
//! [`Stepper`] until `x` reaches the end of the [`Domain`]:
//!
//! ```text
//! while x < end:
//!     observe(x, y)
//!     for i in 0..n:
//!         y[i] = y[i] + h * stepper.increment(i, x, y, h)
//!     x = x + h
//! ```
//!
//! # Sequential component updates
//!
//! Components are advanced one at a time, in ascending index order, on a
//! single shared state vector. When component `i` is advanced, components
//! `0..i` already hold their values for the *end* of the current step while
//! components `i..n` still hold their values from the start. The update is
//! therefore Gauss–Seidel-like rather than a simultaneous vector step: a
//! derivative that reads a lower-indexed component sees its freshly updated
//! value. Systems with no such cross-coupling, including every scalar
//! equation, are unaffected.
//!
//! # Termination
//!
//! The loop stops as soon as `x >= end`. When `h` does not divide the domain
//! evenly the final `x` overshoots `end`; the overshoot is kept. Floating-point
//! accumulation of `x` can also add one iteration, e.g. ten steps of `0.1`
//! reach `0.9999999999999999`, which is still inside `[0, 1)`.
//!
//! A positive step smaller than half the float spacing at `x` cannot move `x`
//! at all (e.g. `h = 0.5` at `x = 1e16`). The driver checks that every step
//! advances `x` and fails with [`Error::StepTooSmall`] instead of looping
//! forever. The check happens at the top of each iteration, so events already
//! emitted for earlier iterations stand.
//!
//! # Observer Events
//!
//! The driver emits one [`Event`] per iteration, before the state is touched.
//! The action type [`Action`] is uninhabited: observers record, they do not
//! steer.

mod action;
mod domain;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use domain::Domain;
pub use error::Error;
pub use event::Event;
pub use solution::Solution;

use odestep_core::{Observer, Stepper};

/// Integrates from `initial` across `domain` with fixed step `step`.
///
/// # Algorithm
///
/// 1. Validate the step size and the state dimension.
/// 2. Start at `x = domain.start()` with `y = initial`.
/// 3. While [`domain.contains(x)`][Domain::contains]:
///    - Check that `x + step` moves past `x`.
///    - Emit an [`Event`] with the current `(x, y)`.
///    - For each component `i` in ascending order, compute the stepper's
///      increment from the current `y` and apply `y[i] += step * increment`.
///    - Advance `x += step`.
/// 4. Return the final `(x, y)` and the iteration count.
///
/// # Errors
///
/// - [`Error::InvalidStepSize`] if `step` is not finite and strictly positive.
/// - [`Error::DimensionMismatch`] if `initial` does not have one component per
///   derivative function.
/// - [`Error::StepTooSmall`] if `x + step` rounds back to `x`.
/// - [`Error::Derivative`] if a derivative function fails; the run is aborted.
///   The derivative's own error is the variant's `source` and can be
///   recovered with `downcast_ref`.
///
/// Step size and dimension are validated before the first event is emitted.
pub fn run<St, Obs>(
    stepper: &mut St,
    initial: &[f64],
    step: f64,
    domain: Domain,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    St: Stepper,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidStepSize(step));
    }

    let expected = stepper.dimension();
    if initial.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: initial.len(),
        });
    }

    let mut x = domain.start();
    let mut y = initial.to_vec();
    let mut steps = 0;

    while domain.contains(x) {
        let next = x + step;
        if next <= x {
            return Err(Error::StepTooSmall { x, step });
        }

        let event = Event {
            iteration: steps,
            x,
            y: &y,
        };
        // `Action` is uninhabited, so `None` is the only possible answer.
        let None = observer.observe(&event);

        // Each component sees the components before it already advanced.
        for index in 0..y.len() {
            let increment = stepper
                .increment(index, x, &y, step)
                .map_err(|err| Error::derivative(index, x, err))?;
            y[index] += step * increment;
        }

        x = next;
        steps += 1;
    }

    Ok(Solution { x, y, steps })
}

/// Integrates without observation.
///
/// This is a convenience wrapper around [`run`] that discards events.
///
/// # Errors
///
/// Returns the same errors as [`run`].
pub fn run_unobserved<St: Stepper>(
    stepper: &mut St,
    initial: &[f64],
    step: f64,
    domain: Domain,
) -> Result<Solution, Error> {
    run(stepper, initial, step, domain, ())
}
