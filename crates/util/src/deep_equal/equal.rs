use std::collections::HashSet;

use indexmap::IndexMap;
use kitbag_values::{same_value_zero, ElementKind, NumericBuffer, PropertyKey, Value};

/// Adjustments to the structural comparison.
#[derive(Default)]
pub struct EqualityOptions<'a> {
    /// Consulted first for every pair. `Some(verdict)` settles that pair
    /// outright; `None` means "no opinion", falling through to the
    /// structural rules. The third argument is the property key being
    /// descended through, when there is one.
    pub compare: Option<&'a dyn Fn(&Value, &Value, Option<&PropertyKey>) -> Option<bool>>,
    /// Property keys whose values (and presence) are skipped entirely.
    pub keys_to_ignore: HashSet<PropertyKey>,
    /// Require equal nominal class tags, not merely compatible shapes.
    pub must_be_same_class: bool,
}

impl<'a> EqualityOptions<'a> {
    /// Options that skip the given property keys.
    pub fn ignoring<K: Into<PropertyKey>>(keys: impl IntoIterator<Item = K>) -> EqualityOptions<'a> {
        EqualityOptions {
            keys_to_ignore: keys.into_iter().map(Into::into).collect(),
            ..EqualityOptions::default()
        }
    }
}

/// Deep structural equality.
///
/// Numbers compare by same-value identity (`NaN` equals `NaN`, `+0` equals
/// `-0`); containers compare recursively. Total on cyclic inputs: a pair
/// of values already being compared further up the descent is taken as
/// equal, which gives coinductive equality on cyclic graphs.
///
/// # Examples
///
/// ```
/// use kitbag_util::deep_equal::is_equal;
/// use kitbag_values::Value;
///
/// let a = Value::record_from([("a", Value::from(5.0))]);
/// let b = Value::record_from([("a", Value::from(5.0))]);
/// assert!(is_equal(&a, &b));
/// assert!(is_equal(&Value::number(f64::NAN), &Value::number(f64::NAN)));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    is_equal_with(a, b, &EqualityOptions::default())
}

/// Deep structural equality with adjustments.
pub fn is_equal_with(a: &Value, b: &Value, options: &EqualityOptions) -> bool {
    Equator {
        options,
        in_progress: HashSet::new(),
    }
    .eq_values(a, b, None)
}

struct Equator<'a, 'o> {
    options: &'o EqualityOptions<'a>,
    // identity pairs currently being compared further up the descent
    in_progress: HashSet<(usize, usize)>,
}

impl Equator<'_, '_> {
    fn eq_values(&mut self, a: &Value, b: &Value, key: Option<&PropertyKey>) -> bool {
        if let Some(compare) = self.options.compare {
            if let Some(verdict) = compare(a, b, key) {
                return verdict;
            }
        }
        if let Some(key) = key {
            if self.options.keys_to_ignore.contains(key) {
                return true;
            }
        }
        if a.same_value(b) {
            return true;
        }
        if a.kind() != b.kind() {
            return false;
        }
        if !a.kind().is_reference() {
            // A primitive or function pair that failed the identity check.
            return false;
        }
        if self.options.must_be_same_class && a.class_of() != b.class_of() {
            return false;
        }

        let pair = (
            a.identity().expect("reference kinds have an identity"),
            b.identity().expect("reference kinds have an identity"),
        );
        if !self.in_progress.insert(pair) {
            return true;
        }
        let verdict = self.eq_structures(a, b);
        self.in_progress.remove(&pair);
        verdict
    }

    fn eq_structures(&mut self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Record(cell_a), Value::Record(cell_b)) => {
                let ra = cell_a.borrow();
                let rb = cell_b.borrow();
                self.eq_property_tables(&ra.properties, &rb.properties)
            }
            (Value::Array(cell_a), Value::Array(cell_b)) => {
                let aa = cell_a.borrow();
                let ab = cell_b.borrow();
                if aa.elements.len() != ab.elements.len() {
                    return false;
                }
                for (slot_a, slot_b) in aa.elements.iter().zip(ab.elements.iter()) {
                    match (slot_a, slot_b) {
                        (None, None) => {}
                        // A hole is not an explicit undefined.
                        (None, Some(_)) | (Some(_), None) => return false,
                        (Some(va), Some(vb)) => {
                            if !self.eq_values(va, vb, None) {
                                return false;
                            }
                        }
                    }
                }
                self.eq_property_tables(&aa.properties, &ab.properties)
            }
            (Value::Map(cell_a), Value::Map(cell_b)) => {
                let ma = cell_a.borrow();
                let mb = cell_b.borrow();
                if ma.len() != mb.len() {
                    return false;
                }
                for ((ka, va), (kb, vb)) in ma.entries().iter().zip(mb.entries().iter()) {
                    if !self.eq_values(ka, kb, None) || !self.eq_values(va, vb, None) {
                        return false;
                    }
                }
                true
            }
            (Value::Set(cell_a), Value::Set(cell_b)) => {
                let sa = cell_a.borrow();
                let sb = cell_b.borrow();
                if sa.len() != sb.len() {
                    return false;
                }
                for (va, vb) in sa.values().iter().zip(sb.values().iter()) {
                    if !self.eq_values(va, vb, None) {
                        return false;
                    }
                }
                true
            }
            (Value::Date(da), Value::Date(db)) => da.time() == db.time(),
            (Value::Pattern(pa), Value::Pattern(pb)) => pa == pb,
            (Value::Buffer(cell_a), Value::Buffer(cell_b)) => {
                eq_buffers(&cell_a.borrow(), &cell_b.borrow())
            }
            _ => false,
        }
    }

    fn eq_property_tables(
        &mut self,
        a: &IndexMap<PropertyKey, Value>,
        b: &IndexMap<PropertyKey, Value>,
    ) -> bool {
        for (key, va) in a.iter() {
            if self.options.keys_to_ignore.contains(key) {
                continue;
            }
            match b.get(key) {
                Some(vb) => {
                    if !self.eq_values(va, vb, Some(key)) {
                        return false;
                    }
                }
                None => return false,
            }
        }
        // every extra key in b must be in the ignore set
        for key in b.keys() {
            if !a.contains_key(key) && !self.options.keys_to_ignore.contains(key) {
                return false;
            }
        }
        true
    }
}

fn eq_buffers(a: &NumericBuffer, b: &NumericBuffer) -> bool {
    if a.kind() != b.kind() || a.len() != b.len() {
        return false;
    }
    match a.kind() {
        // Same-value element comparison: NaN payloads and zero signs are
        // representation details, not values.
        ElementKind::F32 | ElementKind::F64 => (0..a.len()).all(|index| {
            match (a.get(index), b.get(index)) {
                (Some(x), Some(y)) => same_value_zero(x, y),
                _ => false,
            }
        }),
        // Integer elements have one byte representation each.
        _ => a.bytes() == b.bytes(),
    }
}
