//! Value lists: fixed-capacity arrays of [`Value`] with `const fn` queries.
//!
//! The free functions work on any `&[Value]`, which is what the flag-set
//! macros hand to `const` assertions. [`ValueList`] wraps an array so lists
//! can be filtered and concatenated in const context.

use super::value::Value;

pub use super::type_list::NOT_FOUND;

/// Position of `value` in `values`, [`NOT_FOUND`] when absent.
pub const fn index_of(values: &[Value], value: Value) -> usize {
    let mut i = 0;
    while i < values.len() {
        if values[i].eq(value) {
            return i;
        }
        i += 1;
    }
    NOT_FOUND
}

/// True when no value occurs twice.
pub const fn is_set(values: &[Value]) -> bool {
    let mut i = 0;
    while i < values.len() {
        if index_of(values, values[i]) != i {
            return false;
        }
        i += 1;
    }
    true
}

/// Like [`is_set`], but null gaps may repeat.
pub const fn is_set_ignoring_null(values: &[Value]) -> bool {
    let mut i = 0;
    while i < values.len() {
        if !values[i].is_null() && index_of(values, values[i]) != i {
            return false;
        }
        i += 1;
    }
    true
}

/// True when the list is non-empty and every value has the first one's type.
pub const fn is_same_type(values: &[Value]) -> bool {
    if values.is_empty() {
        return false;
    }
    let mut i = 1;
    while i < values.len() {
        if !values[i].same_type(values[0]) {
            return false;
        }
        i += 1;
    }
    true
}

/// Key of the type shared by every value.
pub const fn common_type(values: &[Value]) -> Option<u64> {
    if is_same_type(values) { Some(values[0].key()) } else { None }
}

/// Value with the smallest discriminant, `None` for mixed or empty lists.
pub const fn min_of(values: &[Value]) -> Option<Value> {
    if !is_same_type(values) {
        return None;
    }
    let mut best = values[0];
    let mut i = 1;
    while i < values.len() {
        if values[i].repr() < best.repr() {
            best = values[i];
        }
        i += 1;
    }
    Some(best)
}

/// Value with the largest discriminant, `None` for mixed or empty lists.
pub const fn max_of(values: &[Value]) -> Option<Value> {
    if !is_same_type(values) {
        return None;
    }
    let mut best = values[0];
    let mut i = 1;
    while i < values.len() {
        if values[i].repr() > best.repr() {
            best = values[i];
        }
        i += 1;
    }
    Some(best)
}

/// Ordered list of up to `N` values.
#[derive(Clone, Copy)]
pub struct ValueList<const N: usize> {
    items: [Value; N],
    len: usize,
}

impl<const N: usize> ValueList<N> {
    /// A full list.
    pub const fn new(items: [Value; N]) -> Self {
        Self { items, len: N }
    }

    /// A list holding a copy of `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is longer than `N`.
    pub const fn from_slice(values: &[Value]) -> Self {
        assert!(values.len() <= N, "value list capacity exceeded");
        let mut items = [Value::NULL; N];
        let mut i = 0;
        while i < values.len() {
            items[i] = values[i];
            i += 1;
        }
        Self { items, len: values.len() }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[Value] {
        self.items.split_at(self.len).0
    }

    pub const fn index_of(&self, value: Value) -> usize {
        index_of(self.as_slice(), value)
    }

    pub const fn at_index(&self, index: usize) -> Option<Value> {
        if index < self.len { Some(self.items[index]) } else { None }
    }

    pub const fn contains(&self, value: Value) -> bool {
        self.index_of(value) != NOT_FOUND
    }

    pub const fn is_set(&self) -> bool {
        is_set(self.as_slice())
    }

    pub const fn is_same_type(&self) -> bool {
        is_same_type(self.as_slice())
    }

    pub const fn common_type(&self) -> Option<u64> {
        common_type(self.as_slice())
    }

    pub const fn min(&self) -> Option<Value> {
        min_of(self.as_slice())
    }

    pub const fn max(&self) -> Option<Value> {
        max_of(self.as_slice())
    }

    /// The list with every occurrence of `value` removed.
    pub const fn filter(&self, value: Value) -> Self {
        let mut out = Self { items: [Value::NULL; N], len: 0 };
        let mut i = 0;
        while i < self.len {
            if !self.items[i].eq(value) {
                out.items[out.len] = self.items[i];
                out.len += 1;
            }
            i += 1;
        }
        out
    }

    /// `self` followed by `other`, in a list of capacity `O`.
    ///
    /// # Panics
    ///
    /// Panics if the two lengths add up to more than `O`.
    pub const fn concat<const M: usize, const O: usize>(&self, other: &ValueList<M>) -> ValueList<O> {
        assert!(self.len + other.len <= O, "value list capacity exceeded");
        let mut out = ValueList { items: [Value::NULL; O], len: 0 };
        let mut i = 0;
        while i < self.len {
            out.items[out.len] = self.items[i];
            out.len += 1;
            i += 1;
        }
        let mut j = 0;
        while j < other.len {
            out.items[out.len] = other.items[j];
            out.len += 1;
            j += 1;
        }
        out
    }

    /// Values in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Value> + '_ {
        self.as_slice().iter().copied()
    }
}

impl<const N: usize, const M: usize> PartialEq<ValueList<M>> for ValueList<N> {
    fn eq(&self, other: &ValueList<M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> core::fmt::Debug for ValueList<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Static checks
// =============================================================================

const INT_1: Value = Value::of::<i32>(1, "1");
const INT_2: Value = Value::of::<i32>(2, "2");
const INT_3: Value = Value::of::<i32>(3, "3");
const CHAR_A: Value = Value::of::<char>('a' as i128, "a");

const _: () = {
    let list = ValueList::new([INT_1, INT_2, INT_3]);
    assert!(list.index_of(INT_1) == 0);
    assert!(list.index_of(INT_2) == 1);
    assert!(list.index_of(INT_3) == 2);
    assert!(ValueList::new([Value::of::<i32>(0, "0"), INT_2, INT_3]).index_of(INT_1) == NOT_FOUND);
    assert!(ValueList::<0>::new([]).index_of(INT_1) == NOT_FOUND);

    assert!(list.is_same_type());
    assert!(!ValueList::new([INT_1, CHAR_A, INT_3]).is_same_type());
    assert!(ValueList::<0>::new([]).common_type().is_none());
    assert!(ValueList::new([INT_1, CHAR_A, INT_3]).common_type().is_none());
    assert!(matches!(list.common_type(), Some(k) if k == INT_1.key()));

    assert!(matches!(list.min(), Some(v) if v.repr() == 1));
    assert!(matches!(list.max(), Some(v) if v.repr() == 3));

    assert!(list.is_set());
    assert!(!ValueList::new([INT_1, INT_2, INT_2]).is_set());
    assert!(is_set_ignoring_null(&[INT_1, Value::NULL, INT_2, Value::NULL]));
    assert!(!is_set(&[INT_1, Value::NULL, INT_2, Value::NULL]));

    let filtered = ValueList::new([INT_1, INT_2, INT_3, INT_2]).filter(INT_2);
    assert!(filtered.len() == 2);
    assert!(filtered.index_of(INT_1) == 0);
    assert!(filtered.index_of(INT_3) == 1);
    assert!(!filtered.contains(INT_2));
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_keeps_order() {
        let left = ValueList::new([INT_1]);
        let right = ValueList::new([CHAR_A, INT_3]);
        let joined: ValueList<4> = left.concat(&right);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined, ValueList::new([INT_1, CHAR_A, INT_3]));
        assert_eq!(joined.at_index(1), Some(CHAR_A));
        assert_eq!(joined.at_index(3), None);
    }

    #[test]
    fn iter_visits_in_order() {
        let list = ValueList::new([INT_3, INT_1, INT_2]);
        let reprs: Vec<i128> = list.iter().map(Value::repr).collect();
        assert_eq!(reprs, vec![3, 1, 2]);
    }

    #[test]
    fn from_slice_tracks_length() {
        let list = ValueList::<8>::from_slice(&[INT_1, INT_2]);
        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.as_slice(), &[INT_1, INT_2]);
    }

    #[test]
    #[should_panic(expected = "value list capacity exceeded")]
    fn from_slice_rejects_overflow() {
        let _ = ValueList::<1>::from_slice(&[INT_1, INT_2]);
    }
}
