//! Array helpers.
//!
//! Plain-slice functions plus [`compact_node`], which works on a graph
//! array the same way [`compact`] works on a `Vec`.

use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;
use objkit_value::{Graph, NodeId};
use serde_json::Value;

use crate::error::UtilError;

/// Values with a notion of "falsy": `false`, zero, `NaN`, the empty string,
/// `None` and JSON `null`.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

/// Split `items` into consecutive chunks of `size`; the last chunk may be
/// shorter.
///
/// # Examples
///
/// ```
/// use objkit_util::arrays::chunk;
///
/// assert_eq!(chunk(&[1, 2, 3, 4, 5], 2).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(&[1, 2], 0).is_err());
/// ```
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, UtilError> {
    if size == 0 {
        return Err(UtilError::InvalidChunkSize);
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Drop falsy values.
///
/// # Examples
///
/// ```
/// use objkit_util::arrays::compact;
///
/// assert_eq!(compact(vec![0, 1, 2, 0, 3]), vec![1, 2, 3]);
/// assert_eq!(compact(vec![Some("a"), None, Some("")]), vec![Some("a")]);
/// ```
pub fn compact<T: Truthy>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().filter(Truthy::is_truthy).collect()
}

/// New graph array holding the truthy elements of `array`.
///
/// Anything that is not an array compacts to an empty array.
pub fn compact_node(graph: &mut Graph, array: NodeId) -> NodeId {
    let kept: Vec<NodeId> = graph
        .as_array(array)
        .unwrap_or_default()
        .iter()
        .copied()
        .filter(|&id| graph.is_truthy(id))
        .collect();
    graph.array_from(kept)
}

/// Flatten one level of nesting.
pub fn flatten<T: Clone>(items: &[Vec<T>]) -> Vec<T> {
    items.iter().flatten().cloned().collect()
}

/// Remove duplicates, keeping the first occurrence of each value.
pub fn uniq<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Elements of `items` that do not appear in `exclude`, in order.
pub fn difference<T: Eq + Hash + Clone>(items: &[T], exclude: &[T]) -> Vec<T> {
    let exclude: HashSet<&T> = exclude.iter().collect();
    items
        .iter()
        .filter(|item| !exclude.contains(item))
        .cloned()
        .collect()
}

/// Distinct elements of `items` that also appear in `other`, in `items` order.
pub fn intersection<T: Eq + Hash + Clone>(items: &[T], other: &[T]) -> Vec<T> {
    let other: HashSet<&T> = other.iter().collect();
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| other.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}

/// Group elements by a key, keys in first-seen order.
///
/// # Examples
///
/// ```
/// use objkit_util::arrays::group_by;
///
/// let groups = group_by(&[1, 2, 3, 4, 5], |n| n % 2 == 0);
/// assert_eq!(groups[&false], vec![1, 3, 5]);
/// assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![false, true]);
/// ```
pub fn group_by<T, K, F>(items: &[T], mut key_fn: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key_fn(item)).or_default().push(item.clone());
    }
    groups
}
