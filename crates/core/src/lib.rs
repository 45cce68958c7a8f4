//! Core traits and types for odestep.
//!
//! This crate defines the shared abstractions that the fixed-step solvers and
//! the reusable observers build on:
//!
//! - [`Derivative`] — one scalar derivative function `dyᵢ/dx = f(x, y)`
//! - [`DerivativeSystem`] — an ordered, index-addressed set of derivative
//!   functions, with [`System`] as the standard `Vec`-backed implementation
//! - [`Stepper`] — a stepping strategy that computes the slope used to advance
//!   one state component by one step
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod stepper;
mod system;

pub use observer::Observer;
pub use stepper::{Stepper, StepperError};
pub use system::{Derivative, DerivativeFn, DerivativeSystem, Fallible, System};
