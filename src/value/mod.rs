//! Shape traits backing [`ValueRef`](crate::ValueRef).
//!
//! Each trait exposes the data-access surface the render engine needs for
//! one shape of value:
//!
//! - [`AtomValue`]: "final" values rendered as a single token.
//! - [`StructValue`]: plain aggregates with named members.
//! - [`SequenceValue`]: ordered containers (e.g. `Vec<T>`).
//! - [`MapValue`]: key-value containers (e.g. `BTreeMap<K, V>`).
//! - [`CellValue`]: interior-mutable values traversed through a scoped
//!   borrow.
//!
//! Implementations for std and ecosystem types live in
//! [`impls`](crate::impls); user types get theirs from
//! [the derive macro](derive@crate::Inspect).

mod atom;
mod composite;

pub use atom::AtomValue;
pub use composite::{CellValue, ElementIter, EntryIter, MapValue, SequenceValue, StructValue};
