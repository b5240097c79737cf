use crate::actions::Action;

const INITIAL_STATE: i64 = 0;

/// Reducer for the counter slice
pub fn reduce(state: Option<i64>, action: &Action) -> i64 {
    let state = state.unwrap_or(INITIAL_STATE);

    match action {
        Action::IncrementCounter => state.saturating_add(1),
        Action::DecrementCounter => state.saturating_sub(1),
        _ => {
            // Unhandled actions - no state change
            state
        }
    }
}
