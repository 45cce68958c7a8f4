//! Trajectory recording observer.
//!
//! See [`Trajectory`] for usage.

use odestep_core::Observer;
use odestep_solvers::transient::fixed_step::Solution;

use crate::traits::HasState;

/// An observer that records every `(x, y)` point a solver reports.
///
/// The fixed-step driver reports the state at the *start* of each iteration,
/// so the end point of a run never reaches the observer. Call
/// [`finish`][Trajectory::finish] with the returned [`Solution`] to append it.
///
/// Record data by either:
///
/// - **Direct path** — Pass `&mut Trajectory` as the solver observer. Works
///   for any event type implementing [`HasState`].
/// - **Closure path** — Wrap `&mut Trajectory` in a closure and call
///   [`record`][Trajectory::record] manually, e.g. to record only some
///   iterations.
///
/// # Example
///
/// ```
/// use odestep_core::System;
/// use odestep_observers::Trajectory;
/// use odestep_solvers::transient::{Euler, fixed_step};
///
/// let system = System::new(vec![|x: f64, _y: &[f64]| -0.01 * (-0.8 * x).exp()]);
/// let mut stepper = Euler::new(system);
///
/// let mut trajectory = Trajectory::new();
/// let solution = fixed_step::run(
///     &mut stepper,
///     &[0.5],
///     0.5,
///     fixed_step::Domain::default(),
///     &mut trajectory,
/// )?;
/// trajectory.finish(&solution);
///
/// assert_eq!(trajectory.xs(), &[0.0, 0.5, 1.0]);
/// # Ok::<(), fixed_step::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    xs: Vec<f64>,
    states: Vec<Vec<f64>>,
}

impl Trajectory {
    /// Creates an empty trajectory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a single point.
    pub fn record(&mut self, x: f64, y: &[f64]) {
        self.xs.push(x);
        self.states.push(y.to_vec());
    }

    /// Appends the final point of a completed run.
    pub fn finish(&mut self, solution: &Solution) {
        self.record(solution.x, &solution.y);
    }

    /// Returns the number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` if no points have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the recorded values of the independent variable.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the recorded state vectors.
    #[must_use]
    pub fn states(&self) -> &[Vec<f64>] {
        &self.states
    }

    /// Returns the recorded values of state component `index`.
    ///
    /// Returns `None` if any recorded state has no component `index`.
    #[must_use]
    pub fn component(&self, index: usize) -> Option<Vec<f64>> {
        self.states
            .iter()
            .map(|y| y.get(index).copied())
            .collect()
    }

    /// Iterates over the recorded `(x, y)` points in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, &[f64])> {
        self.xs
            .iter()
            .zip(&self.states)
            .map(|(x, y)| (*x, y.as_slice()))
    }
}

impl<E, A> Observer<E, A> for Trajectory
where
    E: HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.x(), event.y());
        None
    }
}

/// Allows `&mut Trajectory` to be passed to solvers that take an observer by
/// value, so the trajectory can be read after the run completes.
impl<E, A> Observer<E, A> for &mut Trajectory
where
    E: HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use odestep_core::{DerivativeFn, System};
    use odestep_solvers::transient::{RungeKutta, fixed_step};

    struct Point {
        x: f64,
        y: Vec<f64>,
    }

    impl HasState for Point {
        fn x(&self) -> f64 {
            self.x
        }

        fn y(&self) -> &[f64] {
            &self.y
        }
    }

    // Helper to call observe without needing to specify the action type at each call site.
    fn feed(trajectory: &mut Trajectory, x: f64, y: &[f64]) {
        let point = Point { x, y: y.to_vec() };
        let _: Option<()> = trajectory.observe(&point);
    }

    #[test]
    fn records_points_in_order() {
        let mut trajectory = Trajectory::new();
        feed(&mut trajectory, 0.0, &[1.0, 2.0]);
        feed(&mut trajectory, 0.5, &[3.0, 4.0]);

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.xs(), &[0.0, 0.5]);
        assert_eq!(trajectory.states(), &[vec![1.0, 2.0], vec![3.0, 4.0]]);

        let points: Vec<_> = trajectory.points().collect();
        assert_eq!(points, vec![(0.0, &[1.0, 2.0][..]), (0.5, &[3.0, 4.0][..])]);
    }

    #[test]
    fn component_extracts_a_column() {
        let mut trajectory = Trajectory::new();
        feed(&mut trajectory, 0.0, &[1.0, 2.0]);
        feed(&mut trajectory, 1.0, &[3.0, 4.0]);

        assert_eq!(trajectory.component(0), Some(vec![1.0, 3.0]));
        assert_eq!(trajectory.component(1), Some(vec![2.0, 4.0]));
        assert_eq!(trajectory.component(2), None);
    }

    #[test]
    fn empty_trajectory() {
        let trajectory = Trajectory::new();

        assert!(trajectory.is_empty());
        assert_eq!(trajectory.component(0), Some(Vec::new()));
        assert_eq!(trajectory.points().count(), 0);
    }

    #[test]
    fn records_fixed_step_run_with_final_point() {
        fn decay(x: f64, _y: &[f64]) -> f64 {
            -0.01 * (-0.8 * x).exp()
        }

        let mut stepper = RungeKutta::new(System::new(vec![decay as DerivativeFn]));
        let mut trajectory = Trajectory::new();

        let solution = fixed_step::run(
            &mut stepper,
            &[0.0],
            1.0,
            fixed_step::Domain::default(),
            &mut trajectory,
        )
        .expect("should integrate");
        trajectory.finish(&solution);

        assert_eq!(trajectory.xs(), &[0.0, 1.0]);
        let y = trajectory.component(0).expect("scalar state");
        assert_relative_eq!(y[0], 0.0);
        assert_relative_eq!(y[1], -0.006_884, epsilon = 1e-3);
    }

    #[test]
    fn empty_domain_records_only_the_final_point() {
        let mut stepper = RungeKutta::new(System::new(vec![|_x: f64, y: &[f64]| y[0]]));
        let mut trajectory = Trajectory::new();

        let solution = fixed_step::run(
            &mut stepper,
            &[1.0],
            0.1,
            fixed_step::Domain::new(2.0, 2.0),
            &mut trajectory,
        )
        .expect("empty domain is not an error");
        trajectory.finish(&solution);

        assert_eq!(trajectory.xs(), &[2.0]);
        assert_eq!(trajectory.states(), &[vec![1.0]]);
    }
}
