//! Application state
//!
//! The state is a flux-store tree with one `i64` per slice.

use flux_store::Tree;

use crate::reducers::{COUNTER_KEY, SUM_KEY};

pub type AppState = Tree<i64>;

/// Build the starting tree
pub fn initial_state(counter: i64, sum: i64) -> AppState {
    [(COUNTER_KEY.to_string(), counter), (SUM_KEY.to_string(), sum)].into()
}

/// Read one slice, treating a missing slice as zero
pub fn slice_value(state: &AppState, key: &str) -> i64 {
    state.get(key).copied().unwrap_or(0)
}
