//! Derive macro for [`objprint`]'s inspection traits.
//!
//! See [`Inspect`].
//!
//! [`objprint`]: https://docs.rs/objprint

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;

/// Derives the inspection traits that make a type printable.
///
/// # Structs
///
/// A struct with named fields implements `Inspect` (classified as a plain
/// aggregate), `StructValue` (member access in declaration order), and
/// `Members` (static member descriptors used to validate builder selectors).
/// Every field type must itself implement `Inspect`.
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// struct Person {
///     name: String,
///     age: i32,
/// }
/// ```
///
/// # Enums
///
/// An enum whose variants are all unit variants implements `Inspect` and
/// `AtomValue`: it is a final value rendering as the variant name.
///
/// ```rust, ignore
/// #[derive(Inspect)]
/// enum Status {
///     Active,
///     Disabled,
/// }
/// ```
///
/// # Rejected shapes
///
/// Tuple and unit structs, enum variants carrying data, unions, and generic
/// types are rejected with a compile error: the printing surface works on
/// named members of concrete types.
#[proc_macro_derive(Inspect)]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
