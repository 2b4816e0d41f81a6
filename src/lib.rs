#![doc = include_str!("../README.md")]

// `::objprint` paths emitted by the derive macro must also resolve inside
// this crate's own tests and doctests.
extern crate self as objprint;

// -----------------------------------------------------------------------------
// Modules

mod config;
mod ext;
mod inspect;
mod locale;
mod rules;
mod session;
mod util;

pub mod impls;
pub mod info;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use config::{MemberRule, Printer, SelectorError, TextMemberRule, TypeRule};
pub use ext::PrintToString;
pub use inspect::{Inspect, ValueRef};
pub use locale::Locale;

pub use objprint_derive::Inspect;
