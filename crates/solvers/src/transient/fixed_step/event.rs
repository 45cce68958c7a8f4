/// Event emitted by the fixed-step driver once per iteration.
///
/// The event is emitted at the top of the iteration, before any component is
/// advanced, so `(x, y)` is the state the iteration starts from. A run over an
/// empty domain emits no events.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Zero-based iteration number.
    pub iteration: usize,

    /// Independent variable at the start of the iteration.
    pub x: f64,

    /// State vector at the start of the iteration.
    pub y: &'a [f64],
}
