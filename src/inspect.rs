use std::any::{Any, TypeId};
use std::borrow::Cow;

use crate::value::{AtomValue, CellValue, MapValue, SequenceValue, StructValue};

// -----------------------------------------------------------------------------
// Inspect

/// The entry point for runtime inspection of printable values.
///
/// Every value that can appear in a printed object graph implements this
/// trait: primitives and other "final" types, containers, wrappers, and user
/// types via [the derive macro].
///
/// An implementation answers three questions about a value:
///
/// - what to call it in a composite header ([`type_name`]),
/// - what its runtime type identity is ([`ty_id`], used for type-keyed
///   configuration rules),
/// - what shape it has ([`classify`]).
///
/// # Implementation Guide
///
/// Use [the derive macro] for your own data types; it implements `Inspect`
/// together with the matching shape trait ([`StructValue`] for structs with
/// named fields, [`AtomValue`] for unit-variant enums).
///
/// Manual implementations are only needed for types from foreign crates.
/// Implement the shape trait that fits the type and return the matching
/// [`ValueRef`] variant from `classify`:
///
/// ```rust
/// use std::borrow::Cow;
/// use objprint::{Inspect, ValueRef, value::AtomValue};
///
/// struct Celsius(f64);
///
/// impl Inspect for Celsius {
///     fn type_name(&self) -> Cow<'static, str> {
///         Cow::Borrowed("Celsius")
///     }
///
///     fn classify(&self) -> ValueRef<'_> {
///         ValueRef::Atom(self)
///     }
/// }
///
/// impl AtomValue for Celsius {
///     fn literal(&self) -> String {
///         format!("{}°C", self.0)
///     }
/// }
/// ```
///
/// Note that `Inspect` is deliberately not `Send + Sync`: cyclic object
/// graphs are built with `Rc`, and those must be printable too.
///
/// [the derive macro]: derive@crate::Inspect
/// [`type_name`]: Inspect::type_name
/// [`ty_id`]: Inspect::ty_id
/// [`classify`]: Inspect::classify
pub trait Inspect: Any {
    /// Short display name used for composite headers, e.g. `Person` or
    /// `Vec<Person>` — without module paths.
    fn type_name(&self) -> Cow<'static, str>;

    /// Returns the [`TypeId`] of the underlying value.
    ///
    /// Calling `Any::type_id` on a `&dyn Inspect` reference would answer for
    /// the reference itself; this method always answers for the value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Classifies this value's runtime shape.
    ///
    /// The classification is performed once per encountered value and drives
    /// all rendering dispatch.
    fn classify(&self) -> ValueRef<'_>;
}

impl dyn Inspect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use objprint::Inspect;
    /// let x = 10_i32;
    /// let r: &dyn Inspect = &x;
    ///
    /// assert!(r.is::<i32>());
    /// assert!(!r.is::<u32>());
    /// ```
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// Returns `None` if the underlying value is not of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use objprint::Inspect;
    /// let x = 10_i32;
    /// let r: &dyn Inspect = &x;
    ///
    /// assert_eq!(r.downcast_ref::<i32>(), Some(&10));
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

// -----------------------------------------------------------------------------
// ValueRef

/// A closed classification of a value's runtime shape.
///
/// Produced by [`Inspect::classify`] and matched by the render engine. The
/// engine dispatches in priority order: key-value containers, ordered
/// containers, atomic values, plain aggregates.
#[derive(Clone, Copy)]
pub enum ValueRef<'a> {
    /// An absent optional; renders as the `null` literal.
    Absent,
    /// A "final" value: rendered as a single token, never recursed into.
    Atom(&'a dyn AtomValue),
    /// A key-value container; renders one `[key] = value` line per entry.
    Map(&'a dyn MapValue),
    /// An ordered container; renders one `[index] = element` line per
    /// element.
    Sequence(&'a dyn SequenceValue),
    /// A plain aggregate; renders one `name = value` line per member.
    Struct(&'a dyn StructValue),
    /// A transparent wrapper (`Option::Some`, `Box`, `Rc`, `Arc`); rendering
    /// proceeds with the inner value.
    Wrapped(&'a dyn Inspect),
    /// An interior-mutable value; rendering borrows the contents for the
    /// duration of their traversal.
    Cell(&'a dyn CellValue),
}
