use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::impl_generic_type_name;
use crate::inspect::{Inspect, ValueRef};
use crate::value::{MapValue, SequenceValue};

// -----------------------------------------------------------------------------
// Sequences

impl<T: Inspect> Inspect for Vec<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }
}

impl<T: Inspect> SequenceValue for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|element| element as &dyn Inspect)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }
}

impl<T: Inspect, const N: usize> SequenceValue for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|element| element as &dyn Inspect)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }
}

impl<T: Inspect> SequenceValue for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn element_at(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|element| element as &dyn Inspect)
    }
}

// Sets render like sequences: an ordered walk of `[index] = element` lines.
// `HashSet` iteration order is whatever the hasher yields.

impl<T: Inspect> Inspect for BTreeSet<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }
}

impl<T: Inspect> SequenceValue for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn element_at(&self, index: usize) -> Option<&dyn Inspect> {
        self.iter().nth(index).map(|element| element as &dyn Inspect)
    }
}

impl<T: Inspect> Inspect for HashSet<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Sequence(self)
    }
}

impl<T: Inspect> SequenceValue for HashSet<T> {
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn element_at(&self, index: usize) -> Option<&dyn Inspect> {
        self.iter().nth(index).map(|element| element as &dyn Inspect)
    }
}

// -----------------------------------------------------------------------------
// Maps

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Map(self)
    }
}

impl<K: Inspect, V: Inspect> MapValue for BTreeMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entry_at(&self, index: usize) -> Option<(&dyn Inspect, &dyn Inspect)> {
        self.iter()
            .nth(index)
            .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect))
    }
}

impl<K: Inspect, V: Inspect> Inspect for HashMap<K, V> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Map(self)
    }
}

impl<K: Inspect, V: Inspect> MapValue for HashMap<K, V> {
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entry_at(&self, index: usize) -> Option<(&dyn Inspect, &dyn Inspect)> {
        self.iter()
            .nth(index)
            .map(|(key, value)| (key as &dyn Inspect, value as &dyn Inspect))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::inspect::Inspect;

    #[test]
    fn generic_names_are_shortened() {
        assert_eq!(vec![1_i32].type_name(), "Vec<i32>");
        assert_eq!([1_i32, 2].type_name(), "[i32; 2]");
        assert_eq!(
            BTreeMap::from([("a".to_string(), 1_i32)]).type_name(),
            "BTreeMap<String, i32>"
        );
    }
}
