//! Sum actions
//!
//! Methods take the dispatcher first and the payload second, and are bound
//! with `wrap`.

use std::collections::BTreeMap;

use flux_store::ActionMethod;

use super::{Action, AppDispatcher};

pub type SumMethod = ActionMethod<AppDispatcher, i64, Option<Action>>;

pub fn sum(dispatch: &AppDispatcher, result: i64) -> Option<Action> {
    dispatch.dispatch(Action::Sum(result))
}

pub fn methods() -> BTreeMap<String, SumMethod> {
    let mut methods = BTreeMap::new();
    methods.insert("sum".to_string(), ActionMethod::with_payload(sum));
    methods
}
