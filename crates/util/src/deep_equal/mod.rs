//! Deep structural equality over arbitrary value graphs.
//!
//! [`is_equal`] compares two values by simultaneous descent: primitives by
//! value, containers element-by-element and key-by-key. Behavior is
//! adjustable through [`EqualityOptions`]: a per-pair override comparator,
//! a set of property keys to skip, and nominal-class strictness.

mod equal;

pub use equal::{is_equal, is_equal_with, EqualityOptions};
