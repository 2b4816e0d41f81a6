//! Inspection impls for std and ecosystem types.
//!
//! Covers the "final" types (primitives, text, durations, and — behind the
//! `chrono`/`uuid` features — date-times and UUIDs), the std containers, and
//! the transparent wrappers.

mod atoms;
mod collections;
mod wrappers;

/// Implements `Inspect::type_name` for a generic type by shortening the
/// compiler-provided full path, generic arguments included.
macro_rules! impl_generic_type_name {
    () => {
        #[inline]
        fn type_name(&self) -> ::std::borrow::Cow<'static, str> {
            crate::util::short_type_name(::std::any::type_name::<Self>())
        }
    };
}

pub(crate) use impl_generic_type_name;
