/// The result of a fixed-step integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Independent variable at termination.
    ///
    /// The first value reached that is not less than the domain end; it can
    /// overshoot the end when the step does not divide the domain evenly.
    pub x: f64,

    /// State vector at termination.
    pub y: Vec<f64>,

    /// Number of iterations performed.
    pub steps: usize,
}

impl Solution {
    /// Splits the solution into its final `(x, y)` pair.
    #[must_use]
    pub fn into_parts(self) -> (f64, Vec<f64>) {
        (self.x, self.y)
    }
}
