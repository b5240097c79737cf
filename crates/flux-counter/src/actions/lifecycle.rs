//! Actions bound with `Flux::wrap`: creators return what should be dispatched

use std::collections::BTreeMap;
use std::rc::Rc;

use flux_store::ActionCreator;

use super::{Action, AppAction};
use crate::state::AppState;

pub type LifecycleCreator = ActionCreator<(), AppState, Action>;

pub fn reset(_: ()) -> AppAction {
    Action::ResetSum.into()
}

pub fn noop(_: ()) -> AppAction {
    Action::default().into()
}

pub fn creators() -> BTreeMap<String, LifecycleCreator> {
    let mut creators: BTreeMap<String, LifecycleCreator> = BTreeMap::new();
    creators.insert("reset".into(), Rc::new(reset));
    creators.insert("noop".into(), Rc::new(noop));
    creators
}
