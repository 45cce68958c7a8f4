use std::cmp::Ordering;

/// The integration domain `[start, end)`.
///
/// The driver starts at `start` and iterates while `x < end`. A domain with
/// `start >= end` is empty: the run performs no iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    start: f64,
    end: f64,
}

impl Domain {
    /// Creates a domain from its bounds.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns the starting value of the independent variable.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the exclusive upper bound of the independent variable.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `true` if `x` lies in `[start, end)` as far as the driver is
    /// concerned.
    ///
    /// Only the upper bound is tested: the driver starts at `start` and only
    /// moves forward. `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x < self.end
    }

    /// Returns `true` if a run over this domain performs no iterations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !matches!(self.start.partial_cmp(&self.end), Some(Ordering::Less))
    }
}

/// The unit domain `[0, 1)`.
impl Default for Domain {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl From<(f64, f64)> for Domain {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}
