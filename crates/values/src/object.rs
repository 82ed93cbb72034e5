use std::rc::Rc;

use indexmap::IndexMap;

use crate::key::PropertyKey;
use crate::value::Value;

/// A keyed record: an optional nominal class tag plus an insertion-ordered
/// table of string/symbol properties.
///
/// The class tag is what distinguishes `Point { x, y }` from a bare
/// `{ x, y }`; structural algorithms ignore it unless asked not to.
#[derive(Debug, Default)]
pub struct Record {
    pub class: Option<Rc<str>>,
    pub properties: IndexMap<PropertyKey, Value>,
}

impl Record {
    /// An empty record with no class tag.
    pub fn new() -> Record {
        Record::default()
    }

    /// An empty record carrying a nominal class tag.
    pub fn with_class(class: &str) -> Record {
        Record {
            class: Some(Rc::from(class)),
            properties: IndexMap::new(),
        }
    }

    /// Look up a property by key.
    pub fn get(&self, key: &PropertyKey) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Insert or replace a property, preserving insertion order for new keys.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: Value) {
        self.properties.insert(key.into(), value);
    }
}

/// An indexed sequence: dense-or-sparse element slots plus, like a record,
/// any number of extra named properties.
///
/// A `None` slot is a hole (an index that was never assigned) and is
/// distinct from a slot holding `Value::Undefined`.
#[derive(Debug, Default)]
pub struct ArrayObject {
    pub elements: Vec<Option<Value>>,
    pub properties: IndexMap<PropertyKey, Value>,
}

impl ArrayObject {
    /// An empty array.
    pub fn new() -> ArrayObject {
        ArrayObject::default()
    }

    /// A dense array over the given values.
    pub fn from_values(values: Vec<Value>) -> ArrayObject {
        ArrayObject {
            elements: values.into_iter().map(Some).collect(),
            properties: IndexMap::new(),
        }
    }

    /// Number of element slots, holes included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the array has no element slots.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append a value.
    pub fn push(&mut self, value: Value) {
        self.elements.push(Some(value));
    }

    /// Append a hole (an unassigned index).
    pub fn push_hole(&mut self) {
        self.elements.push(None);
    }

    /// The value at an index; `None` for holes and out-of-range indexes.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index).and_then(|slot| slot.as_ref())
    }

    /// Assign the value at an index, growing the array with holes as needed.
    pub fn set(&mut self, index: usize, value: Value) {
        if index >= self.elements.len() {
            self.elements.resize(index + 1, None);
        }
        self.elements[index] = Some(value);
    }
}
