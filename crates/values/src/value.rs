use std::cell::RefCell;
use std::rc::Rc;

use num_bigint::BigInt;

use crate::buffer::{ElementKind, NumericBuffer};
use crate::containers::{MapObject, SetObject};
use crate::date::DateObject;
use crate::key::{PropertyKey, Symbol};
use crate::object::{ArrayObject, Record};
use crate::pattern::{Pattern, PatternError};

/// An opaque callable handle. Functions are never copied structurally and
/// compare by identity only; the name is informational.
#[derive(Debug)]
pub struct NativeFunction {
    pub name: Option<String>,
}

/// The coarse runtime kind of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    BigInt,
    Str,
    Symbol,
    Function,
    Record,
    Array,
    Map,
    Set,
    Date,
    Pattern,
    Buffer,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::BigInt => "bigint",
            Kind::Str => "string",
            Kind::Symbol => "symbol",
            Kind::Function => "function",
            Kind::Record => "record",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Set => "set",
            Kind::Date => "date",
            Kind::Pattern => "pattern",
            Kind::Buffer => "buffer",
        }
    }

    /// True for the mutable, identity-carrying kinds.
    pub fn is_reference(self) -> bool {
        matches!(
            self,
            Kind::Record
                | Kind::Array
                | Kind::Map
                | Kind::Set
                | Kind::Date
                | Kind::Pattern
                | Kind::Buffer
        )
    }

    /// True for the immutable value-compared kinds (everything that is
    /// neither a reference kind nor a function).
    pub fn is_primitive(self) -> bool {
        !self.is_reference() && self != Kind::Function
    }
}

/// Same-value identity for numbers: `NaN` matches `NaN`, and `+0`
/// matches `-0`.
pub fn same_value_zero(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// A dynamically typed value.
///
/// `Clone` on a `Value` copies the *handle*: primitives are copied by
/// value, reference kinds share the underlying object. Deep copying is a
/// separate algorithm, deliberately not conflated with `Clone`.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(Rc<BigInt>),
    Str(Rc<str>),
    Symbol(Symbol),
    Function(Rc<NativeFunction>),
    Record(Rc<RefCell<Record>>),
    Array(Rc<RefCell<ArrayObject>>),
    Map(Rc<RefCell<MapObject>>),
    Set(Rc<RefCell<SetObject>>),
    Date(Rc<DateObject>),
    Pattern(Rc<Pattern>),
    Buffer(Rc<RefCell<NumericBuffer>>),
}

impl Value {
    // ------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------

    pub fn number(n: f64) -> Value {
        Value::Number(n)
    }

    pub fn str(s: impl AsRef<str>) -> Value {
        Value::Str(Rc::from(s.as_ref()))
    }

    pub fn bigint(n: impl Into<BigInt>) -> Value {
        Value::BigInt(Rc::new(n.into()))
    }

    pub fn symbol(description: Option<&str>) -> Value {
        Value::Symbol(Symbol::new(description))
    }

    pub fn function(name: Option<&str>) -> Value {
        Value::Function(Rc::new(NativeFunction {
            name: name.map(str::to_string),
        }))
    }

    /// An empty record with no class tag.
    pub fn record() -> Value {
        Value::Record(Rc::new(RefCell::new(Record::new())))
    }

    /// An empty record carrying a nominal class tag.
    pub fn record_with_class(class: &str) -> Value {
        Value::Record(Rc::new(RefCell::new(Record::with_class(class))))
    }

    /// A record built from key/value pairs, in order.
    pub fn record_from<K>(entries: impl IntoIterator<Item = (K, Value)>) -> Value
    where
        K: Into<PropertyKey>,
    {
        let record = Value::record();
        {
            let cell = record.as_record().expect("just constructed a record");
            let mut inner = cell.borrow_mut();
            for (key, value) in entries {
                inner.insert(key, value);
            }
        }
        record
    }

    /// A dense array over the given values.
    pub fn array(values: Vec<Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(ArrayObject::from_values(values))))
    }

    pub fn array_empty() -> Value {
        Value::Array(Rc::new(RefCell::new(ArrayObject::new())))
    }

    pub fn map() -> Value {
        Value::Map(Rc::new(RefCell::new(MapObject::new())))
    }

    /// A keyed container built from entries, in order.
    pub fn map_from(entries: impl IntoIterator<Item = (Value, Value)>) -> Value {
        let map = Value::map();
        {
            let cell = map.as_map().expect("just constructed a map");
            let mut inner = cell.borrow_mut();
            for (key, value) in entries {
                inner.set(key, value);
            }
        }
        map
    }

    pub fn set() -> Value {
        Value::Set(Rc::new(RefCell::new(SetObject::new())))
    }

    /// A unique-element container built from the given elements, in order.
    pub fn set_from(values: impl IntoIterator<Item = Value>) -> Value {
        let set = Value::set();
        {
            let cell = set.as_set().expect("just constructed a set");
            let mut inner = cell.borrow_mut();
            for value in values {
                inner.add(value);
            }
        }
        set
    }

    /// A calendar instant at the given epoch milliseconds.
    pub fn date(millis: i64) -> Value {
        Value::Date(Rc::new(DateObject::new(millis)))
    }

    /// A compiled pattern.
    pub fn pattern(source: &str, flags: &str) -> Result<Value, PatternError> {
        Ok(Value::Pattern(Rc::new(Pattern::new(source, flags)?)))
    }

    pub fn buffer(buffer: NumericBuffer) -> Value {
        Value::Buffer(Rc::new(RefCell::new(buffer)))
    }

    /// A numeric buffer of the given kind built from `f64` element values.
    pub fn buffer_from(kind: ElementKind, values: &[f64]) -> Value {
        Value::buffer(NumericBuffer::from_f64s(kind, values))
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::Str(_) => Kind::Str,
            Value::Symbol(_) => Kind::Symbol,
            Value::Function(_) => Kind::Function,
            Value::Record(_) => Kind::Record,
            Value::Array(_) => Kind::Array,
            Value::Map(_) => Kind::Map,
            Value::Set(_) => Kind::Set,
            Value::Date(_) => Kind::Date,
            Value::Pattern(_) => Kind::Pattern,
            Value::Buffer(_) => Kind::Buffer,
        }
    }

    /// The nominal class tag, when the value carries one: a record's class,
    /// or the conventional name of a built-in reference kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use kitbag_values::Value;
    ///
    /// assert_eq!(Value::date(0).class_of().as_deref(), Some("Date"));
    /// assert_eq!(Value::record_with_class("Point").class_of().as_deref(), Some("Point"));
    /// assert_eq!(Value::record().class_of(), None);
    /// assert_eq!(Value::number(3.0).class_of(), None);
    /// ```
    pub fn class_of(&self) -> Option<String> {
        match self {
            Value::Record(cell) => cell.borrow().class.as_ref().map(|tag| tag.to_string()),
            Value::Array(_) => Some("Array".to_string()),
            Value::Map(_) => Some("Map".to_string()),
            Value::Set(_) => Some("Set".to_string()),
            Value::Date(_) => Some("Date".to_string()),
            Value::Pattern(_) => Some("RegExp".to_string()),
            Value::Buffer(cell) => Some(cell.borrow().kind().class_name().to_string()),
            _ => None,
        }
    }

    /// Like [`Value::class_of`], but falls back to `no-class:<kind>` for
    /// values with no nominal tag.
    pub fn class_of_or_kind(&self) -> String {
        self.class_of()
            .unwrap_or_else(|| format!("no-class:{}", self.kind().name()))
    }

    /// A stable address identifying the underlying object, for the
    /// reference kinds and functions. Primitives have no identity.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Function(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Record(rc) => Some(Rc::as_ptr(rc) as *const () as usize),
            Value::Array(rc) => Some(Rc::as_ptr(rc) as *const () as usize),
            Value::Map(rc) => Some(Rc::as_ptr(rc) as *const () as usize),
            Value::Set(rc) => Some(Rc::as_ptr(rc) as *const () as usize),
            Value::Date(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Pattern(rc) => Some(Rc::as_ptr(rc) as usize),
            Value::Buffer(rc) => Some(Rc::as_ptr(rc) as *const () as usize),
            _ => None,
        }
    }

    /// Same-value identity: primitives by value (with `NaN` matching `NaN`
    /// and `+0` matching `-0`), functions and reference kinds by identity.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => same_value_zero(*a, *b),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            _ => match (self.identity(), other.identity()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Rc<RefCell<Record>>> {
        match self {
            Value::Record(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Rc<RefCell<ArrayObject>>> {
        match self {
            Value::Array(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Rc<RefCell<MapObject>>> {
        match self {
            Value::Map(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&Rc<RefCell<SetObject>>> {
        match self {
            Value::Set(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&Rc<DateObject>> {
        match self {
            Value::Date(date) => Some(date),
            _ => None,
        }
    }

    pub fn as_pattern(&self) -> Option<&Rc<Pattern>> {
        match self {
            Value::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    pub fn as_buffer(&self) -> Option<&Rc<RefCell<NumericBuffer>>> {
        match self {
            Value::Buffer(cell) => Some(cell),
            _ => None,
        }
    }

    /// Look up a named property on a record or array.
    pub fn get_property(&self, key: &PropertyKey) -> Option<Value> {
        match self {
            Value::Record(cell) => cell.borrow().get(key).cloned(),
            Value::Array(cell) => cell.borrow().properties.get(key).cloned(),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Value {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::str(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::str(s)
    }
}
