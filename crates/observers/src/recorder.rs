use valley_core::Observer;

/// Records a copy of every event it observes and never acts.
///
/// Pass `&mut recorder` to a solver to keep the recorder afterwards.
///
/// ```
/// use valley_observers::Recorder;
/// use valley_solvers::optimization::brent;
///
/// let f = |x: f64| (x - 1.0).powi(2);
/// let mut recorder = Recorder::<brent::Event<f64>>::new();
///
/// let solution = brent::minimize(&f, [0.0, 0.5, 3.0], &brent::Config::default(), &mut recorder)
///     .unwrap();
///
/// assert_eq!(recorder.events().len(), solution.iters);
/// ```
#[derive(Debug, Clone)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Recorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone, A> Observer<E, A> for Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

impl<E: Clone, A> Observer<E, A> for &mut Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
