use std::error::Error as StdError;

/// Errors that can occur during fixed-step integration.
///
/// Validation errors are reported before the first iteration. A derivative
/// failure aborts the run; no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and positive, got {0}")]
    InvalidStepSize(f64),

    #[error("initial state has {actual} components but the system has {expected} functions")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("step size {step} does not advance x = {x}")]
    StepTooSmall { x: f64, step: f64 },

    #[error("derivative {index} failed at x = {x}: {source}")]
    Derivative {
        index: usize,
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(
        index: usize,
        x: f64,
        err: E,
    ) -> Self {
        Self::Derivative {
            index,
            x,
            source: Box::new(err),
        }
    }
}
