use std::convert::Infallible;

/// A single scalar derivative function `dyᵢ/dx = f(x, y)`.
///
/// The function receives the independent variable and the *full* state vector
/// and returns the derivative of exactly one state component. Which component
/// it describes is decided by its position in a [`DerivativeSystem`].
///
/// Any `Fn(f64, &[f64]) -> f64` is an infallible derivative. Wrap a closure
/// returning `Result` in [`Fallible`] to report errors instead.
pub trait Derivative {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn evaluate(&self, x: f64, y: &[f64]) -> Result<f64, Self::Error>;
}

impl<F> Derivative for F
where
    F: Fn(f64, &[f64]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64, y: &[f64]) -> Result<f64, Self::Error> {
        Ok(self(x, y))
    }
}

/// Function pointer type for plain derivative functions.
///
/// Handy for building a [`System`] out of several named functions, which
/// otherwise have distinct types:
///
/// ```
/// use odestep_core::{DerivativeFn, DerivativeSystem, System};
///
/// fn velocity(_x: f64, y: &[f64]) -> f64 {
///     y[1]
/// }
///
/// fn gravity(_x: f64, _y: &[f64]) -> f64 {
///     -9.81
/// }
///
/// let system: System<DerivativeFn> = System::new(vec![velocity as DerivativeFn, gravity]);
/// assert_eq!(system.len(), 2);
/// ```
pub type DerivativeFn = fn(f64, &[f64]) -> f64;

/// Adapts a closure returning `Result<f64, E>` into a [`Derivative`].
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Derivative for Fallible<F>
where
    F: Fn(f64, &[f64]) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, x: f64, y: &[f64]) -> Result<f64, Self::Error> {
        (self.0)(x, y)
    }
}

/// An ordered collection of derivative functions describing an ODE system.
///
/// The function at position `i` computes the derivative of state component
/// `i`, so a system of `n` functions integrates a state vector of length `n`.
/// Callers are responsible for keeping that positional correspondence.
pub trait DerivativeSystem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of derivative functions (the state dimension).
    fn len(&self) -> usize;

    /// Returns `true` if the system has no derivative functions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluates the derivative function at `index` with `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative function fails.
    fn evaluate(&self, index: usize, x: f64, y: &[f64]) -> Result<f64, Self::Error>;
}

impl<S: DerivativeSystem + ?Sized> DerivativeSystem for &S {
    type Error = S::Error;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn evaluate(&self, index: usize, x: f64, y: &[f64]) -> Result<f64, Self::Error> {
        (**self).evaluate(index, x, y)
    }
}

/// A [`DerivativeSystem`] backed by a `Vec` of derivative functions.
///
/// The system is read-only once built; evaluation only forwards to the
/// function at the requested index.
#[derive(Debug, Clone)]
pub struct System<D> {
    functions: Vec<D>,
}

impl<D: Derivative> System<D> {
    /// Creates a system from an ordered list of derivative functions.
    #[must_use]
    pub fn new(functions: Vec<D>) -> Self {
        Self { functions }
    }

    /// Returns the derivative functions in order.
    #[must_use]
    pub fn functions(&self) -> &[D] {
        &self.functions
    }
}

impl<D: Derivative> FromIterator<D> for System<D> {
    fn from_iter<T: IntoIterator<Item = D>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<D: Derivative> DerivativeSystem for System<D> {
    type Error = D::Error;

    fn len(&self) -> usize {
        self.functions.len()
    }

    /// Evaluates the derivative function at `index` with `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    fn evaluate(&self, index: usize, x: f64, y: &[f64]) -> Result<f64, Self::Error> {
        self.functions[index].evaluate(x, y)
    }
}
