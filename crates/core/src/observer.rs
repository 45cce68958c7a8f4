/// Receives the events a solver emits while it runs.
///
/// An integrator reports its state through `observe` once per iteration, so
/// callers can record trajectories or print progress without the solver
/// knowing about either.
///
/// A returned `Some(action)` is a solver-specific request; `None` means carry
/// on. Solvers that take no requests declare an uninhabited action type, and
/// `None` is then the only value an observer can return.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that ignores everything.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<Obs>(mut observer: Obs, events: &[u32]) -> Vec<&'static str>
    where
        Obs: Observer<u32, &'static str>,
    {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |event: &u32| {
                seen.push(*event);
                None
            },
            &[1, 2, 3],
        );

        assert_eq!(seen, vec![1, 2, 3]);
        assert!(actions.is_empty());
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }
}
