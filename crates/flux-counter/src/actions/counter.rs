//! Counter actions
//!
//! Creators take their arguments first and the dispatcher last, and are
//! bound with `wrap_action_creators`.

use std::collections::BTreeMap;
use std::rc::Rc;

use flux_store::TrailingDispatchCreator;

use super::{Action, AppAction, AppDispatcher};
use crate::reducers::COUNTER_KEY;

pub type CounterCreator = TrailingDispatchCreator<(), AppDispatcher, Option<Action>>;

pub fn increment(_: (), dispatch: &AppDispatcher) -> Option<Action> {
    dispatch.dispatch(Action::IncrementCounter)
}

pub fn decrement(_: (), dispatch: &AppDispatcher) -> Option<Action> {
    dispatch.dispatch(Action::DecrementCounter)
}

/// Largest counter `double` will act on
pub const MAX_DOUBLE_COUNTER: i64 = 10_000;

/// Double the counter by dispatching one increment per current unit
///
/// Negative counters and counters above [`MAX_DOUBLE_COUNTER`] are left alone.
pub fn double(_: (), dispatch: &AppDispatcher) -> Option<Action> {
    dispatch.dispatch(AppAction::thunk(|dispatch, get_state| {
        let current = get_state
            .with_state_ref(|tree| tree.and_then(|t| t.get(COUNTER_KEY).copied()))
            .unwrap_or(0);

        if current > MAX_DOUBLE_COUNTER {
            log::warn!(
                "Not doubling counter {}, limit is {}",
                current,
                MAX_DOUBLE_COUNTER
            );
            return;
        }

        log::debug!("Doubling counter from {}", current);
        for _ in 0..current.max(0) {
            dispatch.dispatch(Action::IncrementCounter);
        }
    }))
}

pub fn creators() -> BTreeMap<String, CounterCreator> {
    let mut creators: BTreeMap<String, CounterCreator> = BTreeMap::new();
    creators.insert("increment".into(), Rc::new(increment));
    creators.insert("decrement".into(), Rc::new(decrement));
    creators.insert("double".into(), Rc::new(double));
    creators
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::reducer_map;
    use crate::state::{initial_state, slice_value};
    use flux_store::Flux;

    #[test]
    fn test_double_above_limit_is_noop() {
        let flux = Flux::from_reducers_with_state(
            reducer_map(),
            initial_state(MAX_DOUBLE_COUNTER + 1, 0),
        );

        assert_eq!(double((), &flux.get_dispatcher()), None);
        let state = flux.get_state().unwrap_or_default();
        assert_eq!(slice_value(&state, COUNTER_KEY), MAX_DOUBLE_COUNTER + 1);
    }

    #[test]
    fn test_increment_returns_dispatched_action() {
        let flux = Flux::from_reducers_with_state(reducer_map(), initial_state(1, 0));

        assert_eq!(increment((), &flux.get_dispatcher()), Some(Action::IncrementCounter));
        let state = flux.get_state().unwrap_or_default();
        assert_eq!(slice_value(&state, COUNTER_KEY), 2);
    }
}
