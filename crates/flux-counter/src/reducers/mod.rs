use flux_store::{slice, ReducerMap};

use crate::actions::Action;

pub mod counter_reducer;
pub mod sum_reducer;

pub const COUNTER_KEY: &str = "counter";
pub const SUM_KEY: &str = "sum";

/// Root reducer map - one slice reducer per state key
pub fn reducer_map() -> ReducerMap<i64, Action> {
    let mut reducers = ReducerMap::new();
    reducers.insert(COUNTER_KEY.to_string(), slice(counter_reducer::reduce));
    reducers.insert(SUM_KEY.to_string(), slice(sum_reducer::reduce));
    reducers
}
