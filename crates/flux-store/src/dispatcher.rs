//! Detached dispatch and state handles
//!
//! A [`Dispatcher`] or [`StateReader`] can be handed to action creators,
//! subscribers or other components without passing the store itself.
//! Both are cheap to clone and keep the underlying store alive.
//!
//! Capturing either handle in a subscriber of the same store creates an `Rc`
//! cycle (store, subscriber list, handle, store). Such a store is only freed
//! once the subscriber is removed with its [`Unsubscribe`](crate::Unsubscribe).

use crate::store::Store;

/// Dispatches actions into a store
pub struct Dispatcher<S, A> {
    store: Store<S, A>,
}

impl<S, A> Clone for Dispatcher<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: 'static, A: 'static> Dispatcher<S, A> {
    pub(crate) fn new(store: Store<S, A>) -> Self {
        Self { store }
    }

    /// Dispatch an action, returning it once subscribers have been notified
    pub fn dispatch(&self, action: A) -> A
    where
        S: Clone,
    {
        self.store.dispatch(action)
    }

    /// Dispatch the default ("empty") action
    pub fn dispatch_default(&self) -> A
    where
        S: Clone,
        A: Default,
    {
        self.store.dispatch_default()
    }
}

/// Read-only access to a store's current state
pub struct StateReader<S, A> {
    store: Store<S, A>,
}

impl<S, A> Clone for StateReader<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: 'static, A: 'static> StateReader<S, A> {
    pub(crate) fn new(store: Store<S, A>) -> Self {
        Self { store }
    }

    pub fn get_state(&self) -> Option<S>
    where
        S: Clone,
    {
        self.store.get_state()
    }

    pub fn with_state_ref<R>(&self, f: impl FnOnce(Option<&S>) -> R) -> R {
        self.store.with_state_ref(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatcher_outlives_store_handle() {
        let dispatcher = {
            let store = Store::with_state(|s: Option<u32>, n: &u32| s.unwrap_or(0) + n, 1);
            store.dispatcher()
        };

        assert_eq!(dispatcher.dispatch(2), 2);
        assert_eq!(dispatcher.clone().dispatch_default(), 0);
    }

    #[test]
    fn test_state_reader_sees_dispatches() {
        let store = Store::with_state(|s: Option<u32>, n: &u32| s.unwrap_or(0) + n, 1);
        let reader = store.state_reader();

        store.dispatch(4);
        assert_eq!(reader.get_state(), Some(5));
        assert_eq!(reader.with_state_ref(|s| s.copied()), Some(5));
    }
}
