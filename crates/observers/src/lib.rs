//! Reusable observers for odestep solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers emitting state-carrying events.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers ([`HasState`])
//! - [`Trajectory`] — records the `(x, y)` samples of a run for later analysis
//!   or plotting
//!
//! [`Observer`]: odestep_core::Observer
//! [`HasState`]: traits::HasState

pub mod traits;

mod trajectory;

pub use trajectory::Trajectory;
