//! Multi-subscriber state observation.

type Observer<S> = Box<dyn FnMut(&S) + Send>;

/// Handle returned by [`ObserverRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of state observers.
///
/// Observers run synchronously, in registration order, on whatever context
/// calls [`notify`](Self::notify).
pub struct ObserverRegistry<S> {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer<S>)>,
}

impl<S> ObserverRegistry<S> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            observers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, state: &S) {
        for (_, observer) in self.observers.iter_mut() {
            observer(state);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<S> Default for ObserverRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
