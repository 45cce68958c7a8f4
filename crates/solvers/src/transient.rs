//! Explicit fixed-step integration of ODE systems.
//!
//! A [`Stepper`] decides how far each state component moves in one step; the
//! [`fixed_step`] driver owns the loop that applies it across the domain.
//!
//! # Steppers
//!
//! - [`Euler`] — explicit (forward) Euler, first order, one evaluation per
//!   component per step
//! - [`RungeKutta`] — classical fourth-order Runge–Kutta, four evaluations per
//!   component per step
//!
//! Custom strategies plug into the same driver by implementing [`Stepper`].
//!
//! [`Stepper`]: odestep_core::Stepper

mod euler;
mod runge_kutta;

pub mod fixed_step;

pub use euler::Euler;
pub use runge_kutta::RungeKutta;
