//! Extremum reducers over a derived value.
//!
//! The selector returns `None` for elements that carry no value; those are
//! skipped. Comparison is strict, so the earliest of several equal extrema
//! is the one kept, and incomparable pairs never replace the current one.

use std::cmp::Ordering;

/// Largest selected value, or `None` if nothing was selected.
///
/// ```
/// use dotjoin_operators::max_by;
///
/// let ages = [Some(30), None, Some(41), Some(41)];
/// assert_eq!(max_by(|age: &Option<i32>| *age, ages), Some(41));
/// ```
pub fn max_by<T, V, F, I>(selector: F, collection: I) -> Option<V>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Option<V>,
    V: PartialOrd,
{
    extremum(selector, collection, Ordering::Greater)
}

/// Smallest selected value, or `None` if nothing was selected.
pub fn min_by<T, V, F, I>(selector: F, collection: I) -> Option<V>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Option<V>,
    V: PartialOrd,
{
    extremum(selector, collection, Ordering::Less)
}

fn extremum<T, V, F, I>(mut selector: F, collection: I, wanted: Ordering) -> Option<V>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Option<V>,
    V: PartialOrd,
{
    let mut best: Option<V> = None;
    for item in collection {
        let Some(candidate) = selector(&item) else {
            continue;
        };
        let replace = match &best {
            None => true,
            Some(current) => candidate.partial_cmp(current) == Some(wanted),
        };
        if replace {
            best = Some(candidate);
        }
    }
    best
}
