//! # Change Listeners
//!
//! A small publish-on-change registry shared by the state holders.
//! Listeners are called synchronously, in subscription order, from inside
//! the mutating call.

use std::fmt;

/// Handle returned by `subscribe`, used to remove a listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<E> = Box<dyn FnMut(&E) + Send>;

/// Ordered list of change callbacks for events of type `E`.
pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(ListenerId, Callback<E>)>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Registers a callback and returns its handle.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&E) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a callback. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Delivers `event` to every registered callback.
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn emits_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::<u32>::new();

        let first = Arc::clone(&seen);
        listeners.subscribe(move |v| first.lock().unwrap().push(("first", *v)));
        let second = Arc::clone(&seen);
        listeners.subscribe(move |v| second.lock().unwrap().push(("second", *v)));

        listeners.emit(&7);

        assert_eq!(*seen.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Arc::new(Mutex::new(0));
        let mut listeners = Listeners::<()>::new();
        let counter = Arc::clone(&count);
        let id = listeners.subscribe(move |_| *counter.lock().unwrap() += 1);

        listeners.emit(&());
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&());

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(listeners.is_empty());
    }
}
