use crate::value::Value;

/// Backing store for a keyed container: arbitrary-value keys, insertion
/// order preserved, key lookup by same-value identity (`NaN` keys match,
/// `+0` and `-0` collapse, reference kinds match by identity).
#[derive(Debug, Default)]
pub struct MapObject {
    entries: Vec<(Value, Value)>,
}

impl MapObject {
    pub fn new() -> MapObject {
        MapObject::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the value stored under a key.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.same_value(key))
            .map(|(_, v)| v)
    }

    /// True when the key is present.
    pub fn has(&self, key: &Value) -> bool {
        self.entries.iter().any(|(k, _)| k.same_value(key))
    }

    /// Insert or replace an entry. Replacing keeps the original position.
    pub fn set(&mut self, key: Value, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| k.same_value(&key)) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Remove an entry; returns whether the key was present.
    pub fn delete(&mut self, key: &Value) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| !k.same_value(key));
        self.entries.len() != before
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    /// Append an entry without a key lookup.
    ///
    /// Callers must only use this when the key is known to be absent, e.g.
    /// when rebuilding a map whose keys were unique to begin with.
    pub fn push_entry(&mut self, key: Value, value: Value) {
        self.entries.push((key, value));
    }
}

/// Backing store for a unique-element container: insertion-ordered, with
/// element uniqueness by same-value identity.
#[derive(Debug, Default)]
pub struct SetObject {
    values: Vec<Value>,
}

impl SetObject {
    pub fn new() -> SetObject {
        SetObject::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when an element with the same value identity is present.
    pub fn has(&self, value: &Value) -> bool {
        self.values.iter().any(|v| v.same_value(value))
    }

    /// Add an element; duplicates (by same-value identity) are ignored.
    pub fn add(&mut self, value: Value) {
        if !self.has(&value) {
            self.values.push(value);
        }
    }

    /// Remove an element; returns whether it was present.
    pub fn delete(&mut self, value: &Value) -> bool {
        let before = self.values.len();
        self.values.retain(|v| !v.same_value(value));
        self.values.len() != before
    }

    /// Elements in insertion order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}
