use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use super::impl_generic_type_name;
use crate::inspect::{Inspect, ValueRef};
use crate::value::CellValue;

// -----------------------------------------------------------------------------
// Option

impl<T: Inspect> Inspect for Option<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        match self {
            Some(value) => ValueRef::Wrapped(value),
            None => ValueRef::Absent,
        }
    }
}

// -----------------------------------------------------------------------------
// Owning and shared pointers

impl<T: Inspect> Inspect for Box<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Wrapped(&**self)
    }
}

impl<T: Inspect> Inspect for Rc<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Wrapped(&**self)
    }
}

impl<T: Inspect> Inspect for Arc<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Wrapped(&**self)
    }
}

// -----------------------------------------------------------------------------
// Interior mutability

impl<T: Inspect> Inspect for RefCell<T> {
    impl_generic_type_name!();

    #[inline]
    fn classify(&self) -> ValueRef<'_> {
        ValueRef::Cell(self)
    }
}

impl<T: Inspect> CellValue for RefCell<T> {
    fn with_inner(&self, visit: &mut dyn FnMut(&dyn Inspect)) {
        let inner = self.borrow();
        visit(&*inner);
    }
}
