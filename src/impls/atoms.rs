use std::borrow::Cow;
use std::time::Duration;

use crate::inspect::{Inspect, ValueRef};
use crate::locale::Locale;
use crate::value::AtomValue;

// -----------------------------------------------------------------------------
// Auxiliary macros

/// Implements [`Inspect`] for a final type with a fixed display name.
macro_rules! impl_atom_inspect {
    ($ty:ty => $name:literal) => {
        impl Inspect for $ty {
            #[inline]
            fn type_name(&self) -> Cow<'static, str> {
                Cow::Borrowed($name)
            }

            #[inline]
            fn classify(&self) -> ValueRef<'_> {
                ValueRef::Atom(self)
            }
        }
    };
}

macro_rules! impl_signed_atom {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl_atom_inspect!($ty => $name);

        impl AtomValue for $ty {
            #[inline]
            fn literal(&self) -> String {
                self.to_string()
            }

            #[inline]
            fn format_with(&self, locale: &Locale) -> Option<String> {
                Some(locale.signed(*self as i128))
            }
        }
    )*};
}

macro_rules! impl_unsigned_atom {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl_atom_inspect!($ty => $name);

        impl AtomValue for $ty {
            #[inline]
            fn literal(&self) -> String {
                self.to_string()
            }

            #[inline]
            fn format_with(&self, locale: &Locale) -> Option<String> {
                Some(locale.unsigned(*self as u128))
            }
        }
    )*};
}

macro_rules! impl_float_atom {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl_atom_inspect!($ty => $name);

        impl AtomValue for $ty {
            #[inline]
            fn literal(&self) -> String {
                self.to_string()
            }

            #[inline]
            fn format_with(&self, locale: &Locale) -> Option<String> {
                Some(locale.float(f64::from(*self)))
            }
        }
    )*};
}

/// Final types without locale-aware rendering.
macro_rules! impl_plain_atom {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl_atom_inspect!($ty => $name);

        impl AtomValue for $ty {
            #[inline]
            fn literal(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

// -----------------------------------------------------------------------------
// Numbers

impl_signed_atom! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
}

impl_unsigned_atom! {
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
}

impl_float_atom! {
    f32 => "f32",
    f64 => "f64",
}

// -----------------------------------------------------------------------------
// Text and friends

impl_plain_atom! {
    bool => "bool",
    char => "char",
    String => "String",
    &'static str => "str",
}

// -----------------------------------------------------------------------------
// Durations

impl_atom_inspect!(Duration => "Duration");

impl AtomValue for Duration {
    #[inline]
    fn literal(&self) -> String {
        format!("{self:?}")
    }
}

// -----------------------------------------------------------------------------
// Date and time (chrono)

#[cfg(feature = "chrono")]
mod chrono_atoms {
    use super::*;
    use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

    impl_plain_atom! {
        NaiveDate => "NaiveDate",
        NaiveDateTime => "NaiveDateTime",
        TimeDelta => "TimeDelta",
    }

    impl_atom_inspect!(DateTime<Utc> => "DateTime<Utc>");

    impl AtomValue for DateTime<Utc> {
        #[inline]
        fn literal(&self) -> String {
            self.to_string()
        }
    }
}

// -----------------------------------------------------------------------------
// UUIDs

#[cfg(feature = "uuid")]
mod uuid_atoms {
    use super::*;
    use uuid::Uuid;

    impl_plain_atom! {
        Uuid => "Uuid",
    }
}
