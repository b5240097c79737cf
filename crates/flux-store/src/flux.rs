//! Flux aggregator with thunk support
//!
//! [`Flux`] layers two things on top of a [`Store`]:
//! - actions may be thunks, functions that receive the dispatcher and a
//!   state reader and dispatch further actions themselves
//! - action creators can be wrapped so that calling them dispatches their result
//!
//! A `Flux` over a [`Tree`] can be built straight from a [`ReducerMap`], in
//! which case the slice reducers are combined automatically.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dispatcher::StateReader;
use crate::reducer::{combined_reducer, map_values, ReducerMap, Tree};
use crate::store::Store;
use crate::subscription::Unsubscribe;

/// Deferred action: runs with the dispatcher and a state reader
pub type Thunk<S, A> = Box<dyn FnOnce(&FluxDispatcher<S, A>, &StateReader<S, A>)>;

/// Action creator producing something a [`Flux`] can dispatch
pub type ActionCreator<P, S, A> = Rc<dyn Fn(P) -> FluxAction<S, A>>;

/// Wrapped action creator: dispatches instead of returning
pub type BoundActionCreator<P> = Rc<dyn Fn(P)>;

/// Either a plain action or a thunk
pub enum FluxAction<S, A> {
    Action(A),
    Thunk(Thunk<S, A>),
}

impl<S, A> FluxAction<S, A> {
    pub fn thunk<F>(f: F) -> Self
    where
        F: FnOnce(&FluxDispatcher<S, A>, &StateReader<S, A>) + 'static,
    {
        Self::Thunk(Box::new(f))
    }

    pub fn is_thunk(&self) -> bool {
        matches!(self, Self::Thunk(_))
    }
}

impl<S, A> From<A> for FluxAction<S, A> {
    fn from(action: A) -> Self {
        Self::Action(action)
    }
}

impl<S, A: std::fmt::Debug> std::fmt::Debug for FluxAction<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Self::Thunk(_) => f.write_str("Thunk"),
        }
    }
}

/// Detached dispatcher that understands thunks
pub struct FluxDispatcher<S, A> {
    store: Store<S, A>,
}

impl<S, A> Clone for FluxDispatcher<S, A> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: 'static, A: 'static> FluxDispatcher<S, A> {
    /// Dispatch a plain action or run a thunk
    ///
    /// Thunks run immediately and skip the reducer and subscribers; only the
    /// plain actions they dispatch reach those. Returns the plain action, or
    /// `None` for a thunk.
    pub fn dispatch(&self, action: impl Into<FluxAction<S, A>>) -> Option<A>
    where
        S: Clone,
    {
        match action.into() {
            FluxAction::Action(action) => Some(self.store.dispatch(action)),
            FluxAction::Thunk(thunk) => {
                log::trace!("Flux: running thunk");
                thunk(self, &self.store.state_reader());
                None
            }
        }
    }

    /// Run a thunk and hand back whatever it returns
    pub fn run<R>(&self, thunk: impl FnOnce(&FluxDispatcher<S, A>, &StateReader<S, A>) -> R) -> R {
        log::trace!("Flux: running thunk");
        thunk(self, &self.store.state_reader())
    }
}

/// Store with thunk dispatch and action-creator wrapping
pub struct Flux<S, A> {
    store: Store<S, A>,
}

impl<S: 'static, A: 'static> Flux<S, A> {
    /// Create without an initial state
    pub fn new<F>(reducer: F) -> Self
    where
        F: Fn(Option<S>, &A) -> S + 'static,
    {
        Self::from_store(Store::new(reducer))
    }

    pub fn with_state<F>(reducer: F, state: S) -> Self
    where
        F: Fn(Option<S>, &A) -> S + 'static,
    {
        Self::from_store(Store::with_state(reducer, state))
    }

    /// Wrap an existing store; the store handle stays usable
    pub fn from_store(store: Store<S, A>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Store<S, A> {
        &self.store
    }

    pub fn dispatch(&self, action: impl Into<FluxAction<S, A>>) -> Option<A>
    where
        S: Clone,
    {
        self.get_dispatcher().dispatch(action)
    }

    pub fn run<R>(&self, thunk: impl FnOnce(&FluxDispatcher<S, A>, &StateReader<S, A>) -> R) -> R {
        self.get_dispatcher().run(thunk)
    }

    /// Get a dispatcher that can be passed around without this `Flux`
    ///
    /// As with [`Store::dispatcher`], a subscriber holding the returned
    /// dispatcher keeps this instance alive until it is unsubscribed.
    pub fn get_dispatcher(&self) -> FluxDispatcher<S, A> {
        FluxDispatcher {
            store: self.store.clone(),
        }
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

    pub fn replace_state(&self, state: S) {
        self.store.replace_state(state);
    }

    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe<A>
    where
        F: Fn(&A) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Bind action creators to this instance
    ///
    /// Each returned function calls its creator with the given arguments and
    /// dispatches the result.
    pub fn wrap<P: 'static>(
        &self,
        creators: &BTreeMap<String, ActionCreator<P, S, A>>,
    ) -> BTreeMap<String, BoundActionCreator<P>>
    where
        S: Clone,
    {
        map_values(creators, |creator, name| {
            let creator = Rc::clone(creator);
            let dispatcher = self.get_dispatcher();
            let name = name.clone();

            Rc::new(move |args: P| {
                log::trace!("Flux: dispatching from `{}`", name);
                dispatcher.dispatch(creator(args));
            }) as BoundActionCreator<P>
        })
    }
}

impl<V: 'static, A: 'static> Flux<Tree<V>, A> {
    /// Combine per-slice reducers, starting from an empty tree
    pub fn from_reducers(reducers: ReducerMap<V, A>) -> Self {
        Self::from_reducers_with_state(reducers, Tree::new())
    }

    pub fn from_reducers_with_state(reducers: ReducerMap<V, A>, state: Tree<V>) -> Self {
        Self::from_store(Store::from_parts(
            combined_reducer(reducers),
            Some(state),
            Vec::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{slice, SliceReducer};
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    enum Action {
        IncrementCounter,
        DecrementCounter,
        Sum(i64),
        ResetSum,
    }

    type TreeAction = FluxAction<Tree<i64>, Action>;

    fn counter() -> SliceReducer<i64, Action> {
        slice(|state: Option<i64>, action: &Action| {
            let state = state.unwrap_or(0);
            match action {
                Action::IncrementCounter => state + 1,
                Action::DecrementCounter => state - 1,
                _ => state,
            }
        })
    }

    fn sum() -> SliceReducer<i64, Action> {
        slice(|state: Option<i64>, action: &Action| {
            let state = state.unwrap_or(0);
            match action {
                Action::Sum(result) => state + result,
                Action::ResetSum => 0,
                _ => state,
            }
        })
    }

    fn flux() -> Flux<Tree<i64>, Action> {
        Flux::from_reducers(
            [
                ("counter".to_string(), counter()),
                ("sum".to_string(), sum()),
            ]
            .into(),
        )
    }

    fn slice_of(flux: &Flux<Tree<i64>, Action>, key: &str) -> Option<i64> {
        flux.with_state_ref(|tree| tree.and_then(|t| t.get(key).copied()))
    }

    #[test]
    fn test_from_reducers_starts_empty() {
        let flux = flux();
        assert_eq!(flux.get_state(), Some(Tree::new()));

        flux.dispatch(Action::Sum(0));
        assert_eq!(slice_of(&flux, "counter"), Some(0));
        assert_eq!(slice_of(&flux, "sum"), Some(0));
    }

    #[test]
    fn test_plain_dispatch_reduces_and_notifies() {
        let flux = flux();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            flux.subscribe(move |action: &Action| seen.borrow_mut().push(action.clone()));
        }

        assert_eq!(flux.dispatch(Action::Sum(5)), Some(Action::Sum(5)));
        flux.dispatch(Action::IncrementCounter);

        assert_eq!(slice_of(&flux, "sum"), Some(5));
        assert_eq!(slice_of(&flux, "counter"), Some(1));
        assert_eq!(*seen.borrow(), vec![Action::Sum(5), Action::IncrementCounter]);
    }

    #[test]
    fn test_thunk_receives_dispatch_and_state() {
        let flux = flux();
        let notified = Rc::new(Cell::new(0));
        {
            let notified = Rc::clone(&notified);
            flux.subscribe(move |_: &Action| notified.set(notified.get() + 1));
        }
        flux.dispatch(Action::Sum(3));
        assert_eq!(notified.get(), 1);

        let observed = Rc::new(Cell::new(None));
        let result = {
            let observed = Rc::clone(&observed);
            flux.dispatch(TreeAction::thunk(move |dispatch, get_state| {
                let sum = get_state.with_state_ref(|t| t.and_then(|t| t.get("sum").copied()));
                observed.set(sum);
                dispatch.dispatch(Action::ResetSum);
            }))
        };

        assert_eq!(result, None);
        assert_eq!(observed.get(), Some(3));
        assert_eq!(slice_of(&flux, "sum"), Some(0));
        // Only the nested plain dispatch notifies
        assert_eq!(notified.get(), 2);
    }

    #[test]
    fn test_thunk_without_dispatch_does_not_notify() {
        let flux = flux();
        let notified = Rc::new(Cell::new(false));
        {
            let notified = Rc::clone(&notified);
            flux.subscribe(move |_: &Action| notified.set(true));
        }

        flux.dispatch(TreeAction::thunk(|_, _| {}));
        assert!(!notified.get());
        assert_eq!(flux.get_state(), Some(Tree::new()));
    }

    #[test]
    fn test_nested_thunks() {
        let flux = flux();

        flux.dispatch(TreeAction::thunk(|dispatch, _| {
            dispatch.dispatch(TreeAction::thunk(|dispatch, _| {
                dispatch.dispatch(Action::IncrementCounter);
            }));
            dispatch.dispatch(Action::IncrementCounter);
        }));

        assert_eq!(slice_of(&flux, "counter"), Some(2));
    }

    #[test]
    fn test_run_returns_thunk_result() {
        let flux = flux();
        flux.dispatch(Action::Sum(7));

        let doubled = flux.run(|dispatch, get_state| {
            let sum = get_state
                .with_state_ref(|t| t.and_then(|t| t.get("sum").copied()))
                .unwrap_or(0);
            dispatch.dispatch(Action::Sum(sum));
            sum * 2
        });

        assert_eq!(doubled, 14);
        assert_eq!(slice_of(&flux, "sum"), Some(14));
    }

    #[test]
    fn test_detached_dispatcher() {
        let flux = flux();
        let dispatcher = flux.get_dispatcher();
        let detached = move |action: Action| dispatcher.dispatch(action);

        detached(Action::IncrementCounter);
        detached(Action::IncrementCounter);
        detached(Action::DecrementCounter);

        assert_eq!(slice_of(&flux, "counter"), Some(1));
    }

    #[test]
    fn test_wrap_dispatches_creator_result() {
        let flux = flux();
        let mut creators: BTreeMap<String, ActionCreator<i64, Tree<i64>, Action>> = BTreeMap::new();
        creators.insert("sum".into(), Rc::new(|n: i64| TreeAction::Action(Action::Sum(n))));
        creators.insert(
            "sum_twice".into(),
            Rc::new(|n: i64| {
                TreeAction::thunk(move |dispatch, _| {
                    dispatch.dispatch(Action::Sum(n));
                    dispatch.dispatch(Action::Sum(n));
                })
            }),
        );

        let actions = flux.wrap(&creators);
        assert_eq!(actions.keys().collect::<Vec<_>>(), vec!["sum", "sum_twice"]);

        actions["sum"](2);
        actions["sum_twice"](4);
        assert_eq!(slice_of(&flux, "sum"), Some(10));
    }

    #[test]
    fn test_plain_reducer_flux() {
        let flux = Flux::new(|state: Option<i64>, action: &Action| {
            let state = state.unwrap_or(100);
            match action {
                Action::DecrementCounter => state - 1,
                _ => state,
            }
        });

        assert_eq!(flux.get_state(), None);
        flux.dispatch(Action::DecrementCounter);
        assert_eq!(flux.get_state(), Some(99));

        flux.replace_state(5);
        assert_eq!(flux.get_state(), Some(5));
    }

    #[test]
    fn test_from_store_shares_instance() {
        let store = Store::with_state(|s: Option<i64>, n: &i64| s.unwrap_or(0) + n, 0);
        let flux = Flux::from_store(store.clone());

        flux.dispatch(3_i64);
        assert_eq!(store.get_state(), Some(3));
        assert!(Store::ptr_eq(flux.store(), &store));
    }

    #[test]
    fn test_flux_action_debug() {
        let plain: FluxAction<(), Action> = Action::ResetSum.into();
        let thunk: FluxAction<(), Action> = FluxAction::thunk(|_, _| {});

        assert_eq!(format!("{:?}", plain), "Action(ResetSum)");
        assert_eq!(format!("{:?}", thunk), "Thunk");
        assert!(thunk.is_thunk());
    }
}
