//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event types, enabling observers
//! to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasState`] — events that carry an independent variable and a state
//!   vector
//!
//! # Example
//!
//! ```rust
//! use odestep_core::Observer;
//! use odestep_observers::traits::HasState;
//!
//! /// Tracks the largest magnitude reached by any component.
//! struct PeakMagnitude(f64);
//!
//! impl<E: HasState, A> Observer<E, A> for PeakMagnitude {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         for value in event.y() {
//!             self.0 = self.0.max(value.abs());
//!         }
//!         None
//!     }
//! }
//! ```

use odestep_solvers::transient::fixed_step;

/// An event that carries a point `(x, y)` of a trajectory.
pub trait HasState {
    /// Returns the independent variable for this event.
    fn x(&self) -> f64;

    /// Returns the state vector for this event.
    fn y(&self) -> &[f64];
}

// --- HasState for fixed_step::Event ---

impl HasState for fixed_step::Event<'_> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> &[f64] {
        self.y
    }
}
