use std::cell::RefCell;
use std::rc::Rc;

use crate::dispatcher::{Dispatcher, StateReader};
use crate::error::{Result, StoreError};
use crate::reducer::{combined_reducer, Reducer, ReducerMap, Tree};
use crate::subscription::{Subscriber, SubscriberList, Unsubscribe};

struct Shared<S, A> {
    state: RefCell<Option<S>>,
    reducer: RefCell<Reducer<S, A>>,
    subscribers: SubscriberList<A>,
}

/// Store - holds the current state and runs the dispatch loop
///
/// The Store follows the Redux pattern:
/// - A single reducer turns (state, action) into the next state
/// - State is replaced wholesale on every dispatch
/// - Subscribers are notified synchronously, in subscription order
///
/// `Store` is a handle: cloning it yields another handle to the same
/// instance. Instances created separately never share anything.
///
/// # Example
/// ```rust
/// use flux_store::Store;
///
/// let store = Store::with_state(
///     |state: Option<i32>, delta: &i32| state.unwrap_or(0) + delta,
///     1,
/// );
/// store.dispatch(2);
/// assert_eq!(store.get_state(), Some(3));
/// ```
pub struct Store<S, A> {
    shared: Rc<Shared<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<S: 'static, A: 'static> Store<S, A> {
    /// Create a store without an initial state
    ///
    /// The reducer receives `None` on the first dispatch and is expected to
    /// fall back to its own default.
    pub fn new<F>(reducer: F) -> Self
    where
        F: Fn(Option<S>, &A) -> S + 'static,
    {
        Self::from_parts(Rc::new(reducer), None, Vec::new())
    }

    /// Create a store with an initial state
    pub fn with_state<F>(reducer: F, state: S) -> Self
    where
        F: Fn(Option<S>, &A) -> S + 'static,
    {
        Self::from_parts(Rc::new(reducer), Some(state), Vec::new())
    }

    /// Start building a store with optional state and subscribers
    pub fn builder() -> StoreBuilder<S, A> {
        StoreBuilder::new()
    }

    pub(crate) fn from_parts(
        reducer: Reducer<S, A>,
        state: Option<S>,
        subscribers: Vec<Subscriber<A>>,
    ) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(state),
                reducer: RefCell::new(reducer),
                subscribers: Rc::new(RefCell::new(subscribers)),
            }),
        }
    }

    /// Get a copy of the current state
    pub fn get_state(&self) -> Option<S>
    where
        S: Clone,
    {
        self.shared.state.borrow().clone()
    }

    /// Borrow the current state for the duration of `f`
    ///
    /// `f` must not dispatch or replace the state on this store.
    pub fn with_state_ref<R>(&self, f: impl FnOnce(Option<&S>) -> R) -> R {
        f(self.shared.state.borrow().as_ref())
    }

    /// Replace entire state without running the reducer or notifying subscribers
    pub fn replace_state(&self, state: S) {
        log::debug!("Store: state replaced");
        self.shared.state.replace(Some(state));
    }

    /// Run an action through the reducer, then notify subscribers
    ///
    /// Subscribers see a snapshot of the subscriber list taken after the
    /// state was updated; subscribing or unsubscribing from inside a
    /// notification only affects later dispatches.
    ///
    /// The reducer gets a copy of the current state, which stays readable
    /// through the store until the reducer returns. If the reducer panics
    /// the state is left untouched.
    ///
    /// Returns the processed action.
    pub fn dispatch(&self, action: A) -> A
    where
        S: Clone,
    {
        let reducer = self.shared.reducer.borrow().clone();

        let current = self.shared.state.borrow().clone();
        let next = reducer(current, &action);
        self.shared.state.replace(Some(next));

        self.notify(&action);
        action
    }

    /// Dispatch the default ("empty") action
    pub fn dispatch_default(&self) -> A
    where
        S: Clone,
        A: Default,
    {
        self.dispatch(A::default())
    }

    fn notify(&self, action: &A) {
        let snapshot: Vec<Subscriber<A>> = self.shared.subscribers.borrow().clone();
        log::trace!("Store: notifying {} subscriber(s)", snapshot.len());

        for subscriber in &snapshot {
            subscriber(action);
        }
    }

    /// Add a subscriber to the end of the list
    pub fn subscribe<F>(&self, subscriber: F) -> Unsubscribe<A>
    where
        F: Fn(&A) + 'static,
    {
        self.subscribe_rc(Rc::new(subscriber))
    }

    /// Add an already shared subscriber
    ///
    /// The same `Rc` may be subscribed more than once; each subscription is
    /// notified separately.
    pub fn subscribe_rc(&self, subscriber: Subscriber<A>) -> Unsubscribe<A> {
        let mut subscribers = self.shared.subscribers.borrow_mut();
        subscribers.push(Rc::clone(&subscriber));
        log::debug!("Store: subscribed listener ({} total)", subscribers.len());
        drop(subscribers);

        Unsubscribe::new(&self.shared.subscribers, subscriber)
    }

    /// Number of subscribers notified by the next dispatch
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }

    /// The current reducer
    pub fn reducer(&self) -> Reducer<S, A> {
        self.shared.reducer.borrow().clone()
    }

    /// Swap the reducer used by later dispatches
    pub fn replace_reducer<F>(&self, reducer: F)
    where
        F: Fn(Option<S>, &A) -> S + 'static,
    {
        self.replace_reducer_rc(Rc::new(reducer));
    }

    pub fn replace_reducer_rc(&self, reducer: Reducer<S, A>) {
        log::debug!("Store: reducer replaced");
        self.shared.reducer.replace(reducer);
    }

    /// Get a detached dispatch handle
    ///
    /// The handle keeps the store alive. A subscriber that captures it forms
    /// a reference cycle through the subscriber list, so the store is never
    /// dropped until that subscriber is unsubscribed.
    pub fn dispatcher(&self) -> Dispatcher<S, A> {
        Dispatcher::new(self.clone())
    }

    /// Get a detached read-only state handle
    pub fn state_reader(&self) -> StateReader<S, A> {
        StateReader::new(self.clone())
    }

    /// Start a new, independent store seeded from this one
    ///
    /// The builder carries the current reducer, a copy of the current state
    /// and the current subscribers. Override any of them before `build()`.
    pub fn fork(&self) -> StoreBuilder<S, A>
    where
        S: Clone,
    {
        StoreBuilder {
            reducer: Some(self.reducer()),
            state: self.get_state(),
            subscribers: self.shared.subscribers.borrow().clone(),
        }
    }

    /// Whether both handles point at the same instance
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.shared, &b.shared)
    }
}

impl<S: std::fmt::Debug, A> std::fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.shared.state.borrow())
            .field("subscribers", &self.shared.subscribers.borrow().len())
            .finish()
    }
}

/// Builder for [`Store`] with optional initial state and subscribers
pub struct StoreBuilder<S, A> {
    reducer: Option<Reducer<S, A>>,
    state: Option<S>,
    subscribers: Vec<Subscriber<A>>,
}

impl<S, A> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self {
            reducer: None,
            state: None,
            subscribers: Vec::new(),
        }
    }
}

impl<S: 'static, A: 'static> StoreBuilder<S, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reducer<F>(self, reducer: F) -> Self
    where
        F: Fn(Option<S>, &A) -> S + 'static,
    {
        self.reducer_rc(Rc::new(reducer))
    }

    pub fn reducer_rc(mut self, reducer: Reducer<S, A>) -> Self {
        self.reducer = Some(reducer);
        self
    }

    pub fn state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// Start without a state, even when forked from a store that has one
    pub fn without_state(mut self) -> Self {
        self.state = None;
        self
    }

    /// Append one subscriber
    pub fn subscriber<F>(mut self, subscriber: F) -> Self
    where
        F: Fn(&A) + 'static,
    {
        self.subscribers.push(Rc::new(subscriber));
        self
    }

    /// Replace the initial subscriber list
    pub fn subscribers<I>(mut self, subscribers: I) -> Self
    where
        I: IntoIterator<Item = Subscriber<A>>,
    {
        self.subscribers = subscribers.into_iter().collect();
        self
    }

    /// Build the store
    ///
    /// Fails with [`StoreError::InvalidArgument`] when no reducer was set.
    pub fn build(self) -> Result<Store<S, A>> {
        let reducer = self
            .reducer
            .ok_or_else(|| StoreError::invalid_argument("the `reducer` param is mandatory"))?;

        Ok(Store::from_parts(reducer, self.state, self.subscribers))
    }
}

impl<V: 'static, A: 'static> StoreBuilder<Tree<V>, A> {
    /// Use the combination of per-slice reducers as the reducer
    pub fn reducers(self, reducers: ReducerMap<V, A>) -> Self {
        self.reducer_rc(combined_reducer(reducers))
    }
}
