//! flux-store
//!
//! A small, single-threaded, unidirectional state container.
//!
//! This crate provides:
//! - [`Store`]: current state, a reducer and an ordered subscriber list
//! - [`combine_reducers`] / [`map_values`]: build one reducer from per-slice reducers
//! - [`Flux`]: a store that also dispatches thunks and wraps action creators
//! - [`wrap`] / [`wrap_action_creators`]: bind a dispatch handle into action creators
//!
//! # Example
//!
//! ```rust
//! use flux_store::{slice, Flux, FluxAction, Tree};
//!
//! #[derive(Debug, Clone)]
//! enum Action {
//!     Increment,
//! }
//!
//! let flux: Flux<Tree<i64>, Action> = Flux::from_reducers(
//!     [(
//!         "counter".to_string(),
//!         slice(|state: Option<i64>, action: &Action| match action {
//!             Action::Increment => state.unwrap_or(0) + 1,
//!         }),
//!     )]
//!     .into(),
//! );
//!
//! flux.dispatch(Action::Increment);
//! let thunk: FluxAction<Tree<i64>, Action> = FluxAction::thunk(|dispatch, _| {
//!     dispatch.dispatch(Action::Increment);
//! });
//! flux.dispatch(thunk);
//!
//! assert_eq!(flux.get_state().unwrap()["counter"], 2);
//! ```

pub mod dispatcher;
pub mod error;
pub mod flux;
pub mod reducer;
pub mod store;
pub mod subscription;
pub mod wrap;

pub use dispatcher::{Dispatcher, StateReader};
pub use error::{Result, StoreError};
pub use flux::{ActionCreator, BoundActionCreator, Flux, FluxAction, FluxDispatcher, Thunk};
pub use reducer::{
    combine_reducers, combined_reducer, map_values, slice, Reducer, ReducerMap, SliceReducer, Tree,
};
pub use store::{Store, StoreBuilder};
pub use subscription::{Subscriber, Unsubscribe};
pub use wrap::{wrap, wrap_action_creators, ActionMethod, Bound, TrailingDispatchCreator};
