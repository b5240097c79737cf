//! Counter application wiring
//!
//! Builds the flux from the reducer map, binds every action creator and maps
//! command-line steps onto the bound creators.

use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::{ensure, Context, Result};
use flux_store::{wrap, wrap_action_creators, Bound, BoundActionCreator, Flux, Unsubscribe};

use crate::actions::{counter, lifecycle, sum, Action};
use crate::reducers::{reducer_map, COUNTER_KEY};
use crate::state::{initial_state, slice_value, AppState};
use crate::step::Step;

pub struct CounterApp {
    flux: Flux<AppState, Action>,
    counter_actions: BTreeMap<String, Bound<(), Option<Action>>>,
    sum_actions: BTreeMap<String, Bound<i64, Option<Action>>>,
    lifecycle_actions: BTreeMap<String, BoundActionCreator<()>>,
}

impl CounterApp {
    pub fn new(initial_counter: i64, initial_sum: i64) -> Result<Self> {
        let flux = Flux::from_reducers_with_state(
            reducer_map(),
            initial_state(initial_counter, initial_sum),
        );

        flux.subscribe(|action: &Action| {
            log::debug!("Action: {:?}", action);
        });

        let counter_actions = wrap_action_creators(&counter::creators(), flux.get_dispatcher());
        let sum_actions =
            wrap(&sum::methods(), flux.get_dispatcher()).context("Failed to bind sum actions")?;
        let lifecycle_actions = flux.wrap(&lifecycle::creators());

        Ok(Self {
            flux,
            counter_actions,
            sum_actions,
            lifecycle_actions,
        })
    }

    /// Print every notified action to stdout
    pub fn trace(&self) -> Unsubscribe<Action> {
        self.flux.subscribe(|action: &Action| println!("-> {:?}", action))
    }

    pub fn apply(&self, step: Step) -> Result<()> {
        log::info!("Applying step {}", step);

        match step {
            Step::Increment => {
                call(&self.counter_actions, "increment")?(());
            }
            Step::Decrement => {
                call(&self.counter_actions, "decrement")?(());
            }
            Step::Double => {
                let current = slice_value(&self.state(), COUNTER_KEY);
                ensure!(
                    current <= counter::MAX_DOUBLE_COUNTER,
                    "Cannot double counter {}, the limit is {}",
                    current,
                    counter::MAX_DOUBLE_COUNTER
                );
                call(&self.counter_actions, "double")?(());
            }
            Step::Sum(n) => {
                call(&self.sum_actions, "sum")?(n);
            }
            Step::Reset => call(&self.lifecycle_actions, "reset")?(()),
            Step::Noop => call(&self.lifecycle_actions, "noop")?(()),
        }

        Ok(())
    }

    pub fn apply_all(&self, steps: impl IntoIterator<Item = Step>) -> Result<()> {
        steps.into_iter().try_for_each(|step| self.apply(step))
    }

    pub fn state(&self) -> AppState {
        self.flux.get_state().unwrap_or_default()
    }
}

/// Look up a bound action by name
fn call<'a, F: ?Sized>(actions: &'a BTreeMap<String, Rc<F>>, name: &str) -> Result<&'a F> {
    actions
        .get(name)
        .map(|action| &**action)
        .with_context(|| format!("No bound action named `{}`", name))
}
