//! Reducers and reducer composition
//!
//! A reducer is a pure function producing the next state from the current
//! state and an action. The current state is `None` until the first dispatch
//! when the store was created without one, so every reducer supplies its own
//! default.
//!
//! Nested state is modelled as a [`Tree`]: one slice per key, each slice owned
//! by its own [`SliceReducer`]. [`combine_reducers`] turns a [`ReducerMap`] into
//! a single reducer over the whole tree.

use std::collections::BTreeMap;
use std::rc::Rc;

/// Transition function over the whole state
pub type Reducer<S, A> = Rc<dyn Fn(Option<S>, &A) -> S>;

/// Composite state: one value per slice key
pub type Tree<V> = BTreeMap<String, V>;

/// Transition function over a single slice of a [`Tree`]
pub type SliceReducer<V, A> = Rc<dyn Fn(Option<V>, &A) -> V>;

/// Slice key to slice reducer
pub type ReducerMap<V, A> = BTreeMap<String, SliceReducer<V, A>>;

/// Build a new map with the same keys, each value replaced by `f(value, key)`
pub fn map_values<K, V, U, F>(map: &BTreeMap<K, V>, mut f: F) -> BTreeMap<K, U>
where
    K: Ord + Clone,
    F: FnMut(&V, &K) -> U,
{
    map.iter()
        .map(|(key, value)| (key.clone(), f(value, key)))
        .collect()
}

/// Combine per-slice reducers into one reducer over a [`Tree`]
///
/// The returned reducer treats an absent tree as empty, hands every slice
/// reducer its own slice (or `None` when the slice is missing) together with
/// the shared action, and builds a fresh tree from the results. Only keys
/// present in `reducers` appear in the output.
pub fn combine_reducers<V, A>(reducers: ReducerMap<V, A>) -> impl Fn(Option<Tree<V>>, &A) -> Tree<V>
where
    V: 'static,
    A: 'static,
{
    move |tree: Option<Tree<V>>, action: &A| {
        let mut tree = tree.unwrap_or_default();
        map_values(&reducers, |reduce, key| reduce(tree.remove(key), action))
    }
}

/// [`combine_reducers`] in the shared form a store holds
pub fn combined_reducer<V, A>(reducers: ReducerMap<V, A>) -> Reducer<Tree<V>, A>
where
    V: 'static,
    A: 'static,
{
    Rc::new(combine_reducers(reducers))
}

/// Wrap a closure as a [`SliceReducer`]
pub fn slice<V, A, F>(f: F) -> SliceReducer<V, A>
where
    F: Fn(Option<V>, &A) -> V + 'static,
{
    Rc::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    enum TestAction {
        Add(i64),
        Nothing,
    }

    fn adder() -> SliceReducer<i64, TestAction> {
        slice(|state: Option<i64>, action: &TestAction| {
            let state = state.unwrap_or(0);
            match action {
                TestAction::Add(n) => state + n,
                TestAction::Nothing => state,
            }
        })
    }

    fn doubler() -> SliceReducer<i64, TestAction> {
        slice(|state: Option<i64>, action: &TestAction| {
            let state = state.unwrap_or(1);
            match action {
                TestAction::Add(_) => state * 2,
                TestAction::Nothing => state,
            }
        })
    }

    fn tree(entries: &[(&str, i64)]) -> Tree<i64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_map_values_keeps_keys() {
        let input = tree(&[("a", 1), ("b", 2)]);
        let output = map_values(&input, |value, key| format!("{}={}", key, value));

        assert_eq!(output.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(output["a"], "a=1");
        assert_eq!(output["b"], "b=2");
    }

    #[test]
    fn test_map_values_empty() {
        let input: Tree<i64> = Tree::new();
        assert!(map_values(&input, |v, _| *v).is_empty());
    }

    #[test]
    fn test_combine_applies_each_slice() {
        let reducers: ReducerMap<i64, TestAction> =
            [("a".to_string(), adder()), ("b".to_string(), doubler())].into();
        let reduce = combine_reducers(reducers);

        let next = reduce(Some(tree(&[("a", 3), ("b", 5)])), &TestAction::Add(4));
        assert_eq!(next, tree(&[("a", 7), ("b", 10)]));
    }

    #[test]
    fn test_combine_absent_tree_uses_slice_defaults() {
        let reducers: ReducerMap<i64, TestAction> =
            [("a".to_string(), adder()), ("b".to_string(), doubler())].into();
        let reduce = combine_reducers(reducers);

        assert_eq!(reduce(None, &TestAction::Nothing), tree(&[("a", 0), ("b", 1)]));
    }

    #[test]
    fn test_combine_drops_unknown_slices() {
        let reducers: ReducerMap<i64, TestAction> = [("a".to_string(), adder())].into();
        let reduce = combine_reducers(reducers);

        let next = reduce(Some(tree(&[("a", 1), ("stale", 99)])), &TestAction::Add(1));
        assert_eq!(next, tree(&[("a", 2)]));
    }

    #[test]
    fn test_combine_fills_missing_slice() {
        let reducers: ReducerMap<i64, TestAction> =
            [("a".to_string(), adder()), ("b".to_string(), doubler())].into();
        let reduce = combined_reducer(reducers);

        let next = reduce(Some(tree(&[("a", 2)])), &TestAction::Add(1));
        assert_eq!(next, tree(&[("a", 3), ("b", 2)]));
    }
}
