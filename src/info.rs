//! Static member descriptors for derived types.

use std::any::TypeId;

// -----------------------------------------------------------------------------
// MemberDescriptor

/// Identity of one readable member of a type: its name and its declared type.
///
/// Descriptors are generated per field by [the derive macro] into a `static`
/// array. The declared type is captured through deferred function pointers so
/// the array can be built in a constant context.
///
/// Member-keyed configuration rules (exclusions, formatters, locales) are
/// keyed by declaring type plus descriptor name — stable identities, never
/// runtime object identity.
///
/// # Examples
///
/// ```
/// use objprint::{Inspect, info::Members};
///
/// #[derive(Inspect)]
/// struct Foo {
///     value: f32,
/// }
///
/// let descriptor = &Foo::members()[0];
///
/// assert_eq!(descriptor.name(), "value");
/// assert!(descriptor.type_is::<f32>());
/// ```
///
/// [the derive macro]: derive@crate::Inspect
#[derive(Clone, Copy, Debug)]
pub struct MemberDescriptor {
    name: &'static str,
    ty_id: fn() -> TypeId,
    ty_name: fn() -> &'static str,
}

impl MemberDescriptor {
    /// Creates a descriptor for the member `name` declared with type `F`.
    pub const fn new<F: 'static>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<F>,
            ty_name: std::any::type_name::<F>,
        }
    }

    /// Returns the member name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the declared member type.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        (self.ty_id)()
    }

    /// Returns the full path of the declared member type.
    #[inline]
    pub fn ty_name(&self) -> &'static str {
        (self.ty_name)()
    }

    /// Checks whether the declared member type is `T`.
    #[inline]
    pub fn type_is<T: 'static>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }
}

// -----------------------------------------------------------------------------
// Members

/// Static member enumeration for a derived type.
///
/// The configuration builder validates member selectors against this list;
/// the render engine reads the same descriptors through
/// [`StructValue::descriptors`](crate::value::StructValue::descriptors).
/// Descriptors appear in field declaration order.
pub trait Members {
    /// Descriptors for every readable member, in declaration order.
    fn members() -> &'static [MemberDescriptor];
}

#[cfg(test)]
mod tests {
    use super::MemberDescriptor;

    #[test]
    fn descriptor_identity() {
        let descriptor = MemberDescriptor::new::<String>("name");

        assert_eq!(descriptor.name(), "name");
        assert!(descriptor.type_is::<String>());
        assert!(!descriptor.type_is::<i32>());
        assert_eq!(descriptor.ty_name(), "alloc::string::String");
    }
}
