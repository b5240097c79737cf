//! Binding a dispatch handle into action creators
//!
//! Two calling conventions are supported:
//! - [`wrap_action_creators`]: creators take their arguments first and the
//!   dispatch handle last, `fn(args, &dispatch) -> R`
//! - [`wrap`]: methods take the dispatch handle first and a payload second,
//!   `fn(&dispatch, payload) -> R`
//!
//! In both cases the result is a map of closures that only need the
//! remaining arguments. `dispatch` can be any cloneable handle, typically a
//! [`Dispatcher`](crate::Dispatcher) or [`FluxDispatcher`](crate::FluxDispatcher).

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::error::{Result, StoreError};
use crate::reducer::map_values;

/// Creator taking its arguments followed by the dispatch handle
pub type TrailingDispatchCreator<P, D, R> = Rc<dyn Fn(P, &D) -> R>;

/// Creator or method with the dispatch handle already bound
pub type Bound<P, R> = Rc<dyn Fn(P) -> R>;

/// Bind `dispatch` as the last argument of every creator
///
/// The wrapped creator's result is returned as-is; dispatching is left to
/// the creator.
pub fn wrap_action_creators<P, D, R>(
    creators: &BTreeMap<String, TrailingDispatchCreator<P, D, R>>,
    dispatch: D,
) -> BTreeMap<String, Bound<P, R>>
where
    P: 'static,
    D: Clone + 'static,
    R: 'static,
{
    map_values(creators, |creator, _| {
        let creator = Rc::clone(creator);
        let dispatch = dispatch.clone();
        Rc::new(move |args: P| creator(args, &dispatch)) as Bound<P, R>
    })
}

/// A method taking the dispatch handle first
///
/// The variant records how many parameters the method declares; only
/// methods with a payload parameter can be bound by [`wrap`].
pub enum ActionMethod<D, P, R> {
    /// `fn(&dispatch) -> R`
    Bare(Rc<dyn Fn(&D) -> R>),
    /// `fn(&dispatch, payload) -> R`
    WithPayload(Rc<dyn Fn(&D, P) -> R>),
}

impl<D, P, R> ActionMethod<D, P, R> {
    pub fn bare<F>(f: F) -> Self
    where
        F: Fn(&D) -> R + 'static,
    {
        Self::Bare(Rc::new(f))
    }

    pub fn with_payload<F>(f: F) -> Self
    where
        F: Fn(&D, P) -> R + 'static,
    {
        Self::WithPayload(Rc::new(f))
    }

    /// Number of declared parameters, the dispatch handle included
    pub fn arity(&self) -> usize {
        match self {
            Self::Bare(_) => 1,
            Self::WithPayload(_) => 2,
        }
    }
}

impl<D, P, R> Clone for ActionMethod<D, P, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Bare(f) => Self::Bare(Rc::clone(f)),
            Self::WithPayload(f) => Self::WithPayload(Rc::clone(f)),
        }
    }
}

/// Minimum number of parameters a method must declare to be wrapped
const MIN_METHOD_ARITY: usize = 2;

/// Bind `dispatch` as the first argument of every method
///
/// Fails with [`StoreError::InvalidArgument`] if any method declares fewer
/// than two parameters; nothing is returned in that case.
pub fn wrap<D, P, R>(
    methods: &BTreeMap<String, ActionMethod<D, P, R>>,
    dispatch: D,
) -> Result<BTreeMap<String, Bound<P, R>>>
where
    D: Clone + 'static,
    P: 'static,
    R: 'static,
{
    let mut wrapped = BTreeMap::new();

    for (name, method) in methods {
        let method = match method {
            ActionMethod::WithPayload(f) => Rc::clone(f),
            ActionMethod::Bare(_) => {
                return Err(StoreError::invalid_argument(format!(
                    "methods to be wrapped must take at least {} arguments, `{}` takes {}. \
                     The expected signature is `fn(dispatch, payload)`",
                    MIN_METHOD_ARITY,
                    name,
                    method.arity()
                )));
            }
        };

        let dispatch = dispatch.clone();
        let bound: Bound<P, R> = Rc::new(move |payload: P| method(&dispatch, payload));
        wrapped.insert(name.clone(), bound);
    }

    log::debug!("Wrapped {} method(s)", wrapped.len());
    Ok(wrapped)
}
