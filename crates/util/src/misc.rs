//! Odds and ends: timing, JSON validation, version comparison, map
//! memoization, record reordering.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::time::Instant;

use once_cell::sync::Lazy;

use kitbag_values::{PropertyKey, Value};

static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

/// Milliseconds elapsed on a monotonic clock. Differences between two
/// readings are immune to wall-clock adjustments.
pub fn process_millis() -> f64 {
    PROCESS_START.elapsed().as_secs_f64() * 1000.0
}

/// True when the text parses as JSON.
///
/// # Examples
///
/// ```
/// use kitbag_util::misc::is_valid_json;
///
/// assert!(is_valid_json(r#"{"do":456,"re":"xyz","mi":null}"#));
/// assert!(!is_valid_json(r#"{do":456,"re":"xyz","mi":null}"#));
/// ```
pub fn is_valid_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}

/// Compare dotted version-like strings segment by segment.
///
/// Segments compare numerically when both sides parse as numbers, else
/// lexicographically; a missing segment sorts before any present one.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use kitbag_util::misc::compare_dotted_values;
///
/// assert_eq!(compare_dotted_values("1.0", "2.0"), Ordering::Less);
/// assert_eq!(compare_dotted_values("1.0.10", "1.0.9"), Ordering::Greater);
/// assert_eq!(compare_dotted_values("33.22.11", "33.22.11"), Ordering::Equal);
/// ```
pub fn compare_dotted_values(a: &str, b: &str) -> Ordering {
    let left: Vec<&str> = a.split('.').collect();
    let right: Vec<&str> = b.split('.').collect();

    for index in 0..left.len().max(right.len()) {
        let ordering = match (left.get(index), right.get(index)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(nx), Ok(ny)) => nx.partial_cmp(&ny).unwrap_or(Ordering::Equal),
                _ => x.cmp(y),
            },
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Fetch the value under `key`, computing and storing it first when absent.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use kitbag_util::misc::get_or_set;
///
/// let mut map = HashMap::new();
/// map.insert("a", 1);
/// assert_eq!(*get_or_set(&mut map, "a", || 2), 1);
/// assert_eq!(*get_or_set(&mut map, "b", || 3), 3);
/// assert_eq!(map["b"], 3);
/// ```
pub fn get_or_set<'m, K, V>(
    map: &'m mut HashMap<K, V>,
    key: K,
    make: impl FnOnce() -> V,
) -> &'m mut V
where
    K: Eq + Hash,
{
    map.entry(key).or_insert_with(make)
}

/// [`get_or_set`] for ordered maps.
pub fn get_or_set_btree<'m, K, V>(
    map: &'m mut BTreeMap<K, V>,
    key: K,
    make: impl FnOnce() -> V,
) -> &'m mut V
where
    K: Ord,
{
    map.entry(key).or_insert_with(make)
}

/// A new record with the same class tag and properties, reordered by key:
/// string keys sorted lexicographically, symbol keys after them by id.
/// Property values are carried over by reference, not copied. Non-record
/// inputs come back unchanged.
pub fn sort_object_entries(value: &Value) -> Value {
    sort_object_entries_by(value, |(a, _), (b, _)| key_order(a, b))
}

/// Like [`sort_object_entries`], with a caller-supplied entry comparator.
///
/// # Examples
///
/// ```
/// use kitbag_util::misc::sort_object_entries;
/// use kitbag_values::Value;
///
/// let sample = Value::record_from([
///     ("b", Value::from(1.0)),
///     ("c", Value::from(-2.0)),
///     ("a", Value::from(5.0)),
/// ]);
/// let sorted = sort_object_entries(&sample);
/// let json = serde_json::to_string(&sorted.to_json().unwrap()).unwrap();
/// assert_eq!(json, r#"{"a":5,"b":1,"c":-2}"#);
/// ```
pub fn sort_object_entries_by(
    value: &Value,
    mut compare: impl FnMut(&(PropertyKey, Value), &(PropertyKey, Value)) -> Ordering,
) -> Value {
    let Some(cell) = value.as_record() else {
        return value.clone();
    };
    let source = cell.borrow();
    let mut entries: Vec<(PropertyKey, Value)> = source
        .properties
        .iter()
        .map(|(key, child)| (key.clone(), child.clone()))
        .collect();
    entries.sort_by(&mut compare);

    let sorted = match source.class.as_deref() {
        Some(class) => Value::record_with_class(class),
        None => Value::record(),
    };
    {
        let target = sorted.as_record().expect("just constructed a record");
        let mut inner = target.borrow_mut();
        for (key, child) in entries {
            inner.properties.insert(key, child);
        }
    }
    sorted
}

fn key_order(a: &PropertyKey, b: &PropertyKey) -> Ordering {
    match (a, b) {
        (PropertyKey::Str(x), PropertyKey::Str(y)) => x.cmp(y),
        (PropertyKey::Str(_), PropertyKey::Sym(_)) => Ordering::Less,
        (PropertyKey::Sym(_), PropertyKey::Str(_)) => Ordering::Greater,
        (PropertyKey::Sym(x), PropertyKey::Sym(y)) => x.id().cmp(&y.id()),
    }
}

/// Call `action` with each count from `times - 1` down to 0.
///
/// # Examples
///
/// ```
/// use kitbag_util::misc::repeat;
///
/// let mut s = String::new();
/// repeat(5, |n| s.push_str(&n.to_string()));
/// assert_eq!(s, "43210");
/// ```
pub fn repeat(times: usize, mut action: impl FnMut(usize)) {
    for n in (0..times).rev() {
        action(n);
    }
}
