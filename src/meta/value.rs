//! Values: enum variants lifted into a form the const evaluator can compare.
//!
//! A [`Value`] remembers which enum it came from (`key`), its discriminant
//! (`repr`) and its variant name. Two values are equal only when both the
//! enum and the discriminant match, so `Animal::Cat` and `Plant::Cat` stay
//! distinct even when they share a discriminant.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::tag::Tag;
use super::value_list;

/// A compile-time enum value.
#[derive(Clone, Copy)]
pub struct Value {
    key: u64,
    repr: i128,
    name: &'static str,
}

impl Value {
    /// The gap placeholder. Never a valid flag.
    pub const NULL: Value = Value { key: 0, repr: 0, name: "null" };

    #[inline]
    pub const fn new(key: u64, repr: i128, name: &'static str) -> Self {
        Self { key, repr, name }
    }

    /// A value of primitive type `T`, keyed the same way as `T`'s tag.
    #[inline]
    pub const fn of<T: Tag>(repr: i128, name: &'static str) -> Self {
        Self::new(T::KEY, repr, name)
    }

    /// Identity of the value's type.
    #[inline]
    pub const fn key(self) -> u64 {
        self.key
    }

    /// Discriminant.
    #[inline]
    pub const fn repr(self) -> i128 {
        self.repr
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.key == 0
    }

    /// Whether both values come from the same type.
    #[inline]
    pub const fn same_type(self, other: Value) -> bool {
        self.key == other.key
    }

    /// `==` usable in const context.
    #[inline]
    pub const fn eq(self, other: Value) -> bool {
        self.key == other.key && self.repr == other.repr
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Value::eq(*self, *other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.repr.hash(state);
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("Value::NULL");
        }
        write!(f, "Value({} = {})", self.name, self.repr)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A field-less enum whose variants can be used as flags.
///
/// Derive it with `#[derive(Enumerant)]`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a flag option",
    label = "not an enumerant",
    note = "add `#[derive(Enumerant)]` to the enum"
)]
pub trait Enumerant: Copy + Eq + 'static {
    /// The enum's name, without its module path.
    const TYPE_NAME: &'static str;

    /// FNV-1a 64 of the enum's full path.
    const KEY: u64;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// `VARIANTS` as values.
    const VALUES: &'static [Value];

    /// Smallest discriminant.
    const MIN_REPR: i128 = match value_list::min_of(Self::VALUES) {
        Some(v) => v.repr(),
        None => 0,
    };

    /// Largest discriminant.
    const MAX_REPR: i128 = match value_list::max_of(Self::VALUES) {
        Some(v) => v.repr(),
        None => 0,
    };

    fn value(self) -> Value;

    #[inline]
    fn repr(self) -> i128 {
        self.value().repr()
    }

    #[inline]
    fn name(self) -> &'static str {
        self.value().name()
    }

    /// The variant with discriminant `repr`.
    fn from_repr(repr: i128) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.repr() == repr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: Value = Value::of::<i32>(1, "1");
    const ALSO_ONE: Value = Value::of::<i32>(1, "one");
    const CHAR_ONE: Value = Value::of::<char>(1, "'\\u{1}'");

    #[test]
    fn equality_ignores_the_name() {
        assert_eq!(ONE, ALSO_ONE);
    }

    #[test]
    fn values_of_different_types_differ() {
        assert_ne!(ONE, CHAR_ONE);
        assert!(!ONE.same_type(CHAR_ONE));
        assert!(ONE.same_type(ALSO_ONE));
    }

    #[test]
    fn null_is_its_own_type() {
        assert!(Value::NULL.is_null());
        assert!(!ONE.is_null());
        assert_ne!(Value::NULL, Value::of::<i32>(0, "0"));
    }

    #[test]
    fn display_uses_the_name() {
        assert_eq!(format!("{ONE}"), "1");
        assert_eq!(format!("{:?}", Value::NULL), "Value::NULL");
        assert_eq!(format!("{ONE:?}"), "Value(1 = 1)");
    }
}
