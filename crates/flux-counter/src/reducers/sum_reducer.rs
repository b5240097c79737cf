use crate::actions::Action;

const INITIAL_STATE: i64 = 0;

/// Reducer for the running sum slice
pub fn reduce(state: Option<i64>, action: &Action) -> i64 {
    let state = state.unwrap_or(INITIAL_STATE);

    match action {
        Action::Sum(result) => state.saturating_add(*result),
        Action::ResetSum => 0,
        _ => state,
    }
}
