//! Actions module
//!
//! The root [`Action`] enum plus the action creators for each state slice.
//! Creators come in the three shapes flux-store can bind:
//! - `counter`: arguments first, dispatcher last (`wrap_action_creators`)
//! - `sum`: dispatcher first, payload second (`wrap`)
//! - `lifecycle`: return a dispatchable value (`Flux::wrap`)

use flux_store::{FluxAction, FluxDispatcher, Tree};

pub mod counter;
pub mod lifecycle;
pub mod sum;

/// Root action enum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Action {
    /// No-op, what an empty dispatch sends
    #[default]
    None,
    IncrementCounter,
    DecrementCounter,
    /// Add the given value to the running sum
    Sum(i64),
    ResetSum,
}

/// Dispatcher handed to action creators
pub type AppDispatcher = FluxDispatcher<Tree<i64>, Action>;

/// Anything the app's flux can dispatch
pub type AppAction = FluxAction<Tree<i64>, Action>;
