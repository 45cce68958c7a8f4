//! Fixed-step solvers for systems of first-order ODEs.
//!
//! A caller describes the system as an ordered set of derivative functions
//! (see [`odestep_core::System`]), wraps it in a stepping strategy, and hands
//! the stepper to the fixed-step driver:
//!
//! ```
//! use odestep_core::System;
//! use odestep_solvers::transient::{Euler, fixed_step};
//!
//! // y' = -y, y(0) = 1
//! let system = System::new(vec![|_x: f64, y: &[f64]| -y[0]]);
//! let mut stepper = Euler::new(system);
//!
//! let solution = fixed_step::run_unobserved(
//!     &mut stepper,
//!     &[1.0],
//!     0.25,
//!     fixed_step::Domain::default(),
//! )
//! .expect("step size and dimension are valid");
//!
//! assert_eq!(solution.x, 1.0);
//! assert_eq!(solution.steps, 4);
//! ```
//!
//! # Modules
//!
//! - [`transient`] — explicit steppers ([`Euler`], [`RungeKutta`]) and the
//!   [`fixed_step`] integration driver
//!
//! [`Euler`]: transient::Euler
//! [`RungeKutta`]: transient::RungeKutta
//! [`fixed_step`]: transient::fixed_step

pub mod transient;
