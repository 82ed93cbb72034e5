use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A process-unique token, usable as a property key or a standalone value.
///
/// Every call to [`Symbol::new`] produces a distinct symbol; two symbols are
/// equal only if they are the same token, regardless of description.
///
/// # Examples
///
/// ```
/// use kitbag_values::Symbol;
///
/// let a = Symbol::new(Some("color"));
/// let b = Symbol::new(Some("color"));
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Symbol {
    inner: Rc<SymbolData>,
}

#[derive(Debug)]
struct SymbolData {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Create a fresh symbol with an optional description.
    pub fn new(description: Option<&str>) -> Symbol {
        Symbol {
            inner: Rc::new(SymbolData {
                id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
                description: description.map(str::to_string),
            }),
        }
    }

    /// The unique id of this symbol.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// The description the symbol was created with, if any.
    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Symbol) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.description {
            Some(description) => write!(f, "Symbol({description})"),
            None => write!(f, "Symbol()"),
        }
    }
}

/// A record or array property key: a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Str(String),
    Sym(Symbol),
}

impl PropertyKey {
    /// The string form of the key, or `None` for symbol keys.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::Str(s) => Some(s),
            PropertyKey::Sym(_) => None,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> PropertyKey {
        PropertyKey::Str(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> PropertyKey {
        PropertyKey::Str(s)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(symbol: Symbol) -> PropertyKey {
        PropertyKey::Sym(symbol)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Str(s) => f.write_str(s),
            PropertyKey::Sym(symbol) => write!(f, "{symbol}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_unique() {
        let a = Symbol::new(Some("tag"));
        let b = Symbol::new(Some("tag"));
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.description(), Some("tag"));
    }

    #[test]
    fn test_property_key_from_str() {
        let key = PropertyKey::from("name");
        assert_eq!(key.as_str(), Some("name"));
    }

    #[test]
    fn test_symbol_keys_do_not_collide_with_strings() {
        let sym = Symbol::new(Some("name"));
        let by_symbol = PropertyKey::from(sym);
        let by_string = PropertyKey::from("name");
        assert_ne!(by_symbol, by_string);
        assert_eq!(by_symbol.as_str(), None);
    }
}
