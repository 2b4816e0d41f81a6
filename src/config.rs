use std::any::TypeId;
use std::error;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::info::{MemberDescriptor, Members};
use crate::inspect::Inspect;
use crate::locale::Locale;
use crate::rules::{FormatFn, MemberKey, RuleSet};
use crate::session::Session;

// -----------------------------------------------------------------------------
// SelectorError

/// A rejected member selector.
///
/// Member selectors are validated eagerly against the owner type's derived
/// descriptors, so a bad selection fails at configuration time, not during
/// printing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// The owner type has no member with the given name.
    UnknownMember {
        owner: &'static str,
        member: String,
    },
    /// The member exists but its declared type differs from the selector's
    /// type parameter.
    MemberTypeMismatch {
        member: &'static str,
        selected: &'static str,
        declared: &'static str,
    },
    /// A text-member selector named a member not declared as `String`.
    NotText {
        member: &'static str,
        declared: &'static str,
    },
}

impl fmt::Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMember { owner, member } => {
                write!(f, "type `{owner}` has no member named `{member}`")
            }
            Self::MemberTypeMismatch {
                member,
                selected,
                declared,
            } => {
                write!(
                    f,
                    "member `{member}` is declared as `{declared}`, not `{selected}`"
                )
            }
            Self::NotText { member, declared } => {
                write!(
                    f,
                    "member `{member}` is declared as `{declared}`, not `String`"
                )
            }
        }
    }
}

impl error::Error for SelectorError {}

// -----------------------------------------------------------------------------
// Printer

/// A fluent, owner-typed printing configuration.
///
/// A `Printer<T>` accumulates exclusion, formatter, truncation and locale
/// rules, then renders values of `T` with [`print`](Printer::print). Rules
/// are keyed by type or by (declaring type, member name), so rules registered
/// for a nested type's members apply at any depth of the printed graph.
///
/// Type-level operations are infallible; member selectors return a
/// [`SelectorError`] for names the owner type does not have (or declares
/// with a different type).
///
/// # Examples
///
/// ```
/// use objprint::{Inspect, Printer};
///
/// #[derive(Inspect)]
/// struct Account {
///     owner: String,
///     balance: i64,
/// }
///
/// let printer = Printer::<Account>::new()
///     .member::<i64>("balance")?
///     .format(|cents| format!("{}.{:02}", cents / 100, cents % 100));
///
/// let account = Account {
///     owner: "ada".to_string(),
///     balance: 1250,
/// };
///
/// assert_eq!(
///     printer.print(&account),
///     "Account\n\towner = ada\n\tbalance = 12.50"
/// );
/// # Ok::<(), objprint::SelectorError>(())
/// ```
pub struct Printer<T> {
    rules: RuleSet,
    _owner: PhantomData<fn(&T)>,
}

impl<T> Default for Printer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Printer<T> {
    /// Creates a printer with an empty configuration.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::default(),
            _owner: PhantomData,
        }
    }

    /// Excludes every member whose *declared* type is `P`, anywhere in the
    /// printed graph.
    ///
    /// Excluding a type no member actually has is a no-op.
    #[must_use]
    pub fn exclude_type<P: 'static>(mut self) -> Self {
        self.rules.excluded_types.insert(TypeId::of::<P>());
        self
    }

    /// Opens a type-level rule for values whose *runtime* type is `P`.
    pub fn for_type<P: Inspect>(self) -> TypeRule<T, P> {
        TypeRule {
            parent: self,
            _target: PhantomData,
        }
    }
}

impl<T> Printer<T> {
    /// Excludes the named member of the (possibly nested) type `O` from the
    /// output entirely. Member rules are keyed by declaring type, so they
    /// apply wherever an `O` appears in the printed graph.
    pub fn exclude_member_of<O: Members + 'static>(
        mut self,
        name: &str,
    ) -> Result<Self, SelectorError> {
        let descriptor = descriptor_of::<O>(name)?;
        self.rules
            .excluded_members
            .insert((TypeId::of::<O>(), descriptor.name()));
        Ok(self)
    }

    /// Opens a member-level rule for the named member of the (possibly
    /// nested) type `O`, declared as `F`.
    pub fn member_of<O: Members + 'static, F: Inspect>(
        self,
        name: &str,
    ) -> Result<MemberRule<T, F>, SelectorError> {
        let descriptor = descriptor_of::<O>(name)?;
        if !descriptor.type_is::<F>() {
            return Err(SelectorError::MemberTypeMismatch {
                member: descriptor.name(),
                selected: std::any::type_name::<F>(),
                declared: descriptor.ty_name(),
            });
        }
        Ok(MemberRule {
            parent: self,
            key: (TypeId::of::<O>(), descriptor.name()),
            _member: PhantomData,
        })
    }

    /// Opens a text-member rule for the named member of the (possibly
    /// nested) type `O`, which must be declared as `String`. Only text
    /// members support truncation.
    pub fn text_member_of<O: Members + 'static>(
        self,
        name: &str,
    ) -> Result<TextMemberRule<T>, SelectorError> {
        let descriptor = descriptor_of::<O>(name)?;
        if !descriptor.type_is::<String>() {
            return Err(SelectorError::NotText {
                member: descriptor.name(),
                declared: descriptor.ty_name(),
            });
        }
        Ok(TextMemberRule {
            parent: self,
            key: (TypeId::of::<O>(), descriptor.name()),
        })
    }
}

impl<T: Members + 'static> Printer<T> {
    /// Excludes the named member of `T` from the output entirely.
    #[inline]
    pub fn exclude_member(self, name: &str) -> Result<Self, SelectorError> {
        self.exclude_member_of::<T>(name)
    }

    /// Opens a member-level rule for the named member of `T`, declared as
    /// `F`.
    #[inline]
    pub fn member<F: Inspect>(self, name: &str) -> Result<MemberRule<T, F>, SelectorError> {
        self.member_of::<T, F>(name)
    }

    /// Opens a text-member rule for the named member of `T`, which must be
    /// declared as `String`. Only text members support truncation.
    #[inline]
    pub fn text_member(self, name: &str) -> Result<TextMemberRule<T>, SelectorError> {
        self.text_member_of::<T>(name)
    }
}

impl<T: Inspect> Printer<T> {
    /// Renders `value` as an indented textual tree.
    ///
    /// Every call runs with fresh traversal state; reusing one printer for
    /// many values — or the same value twice — is by design.
    pub fn print(&self, value: &T) -> String {
        Session::new(&self.rules).render(value, 0)
    }
}

// -----------------------------------------------------------------------------
// TypeRule

/// A pending type-level rule; completes back into the owning [`Printer`].
pub struct TypeRule<T, P> {
    parent: Printer<T>,
    _target: PhantomData<fn(&P)>,
}

impl<T, P: Inspect> TypeRule<T, P> {
    /// Registers a custom formatter for runtime values of type `P`. Its
    /// output is used verbatim as the value text.
    pub fn format<F>(mut self, format: F) -> Printer<T>
    where
        F: Fn(&P) -> String + Send + Sync + 'static,
    {
        self.parent
            .rules
            .type_formatters
            .insert(TypeId::of::<P>(), erase(format));
        self.parent
    }

    /// Registers a locale for runtime values of type `P`.
    ///
    /// Applies only where the value supports locale-aware rendering; other
    /// values fall through to the next rule.
    pub fn with_locale(mut self, locale: Locale) -> Printer<T> {
        self.parent
            .rules
            .type_locales
            .insert(TypeId::of::<P>(), locale);
        self.parent
    }
}

// -----------------------------------------------------------------------------
// MemberRule

/// A pending member-level rule; completes back into the owning [`Printer`].
pub struct MemberRule<T, F> {
    parent: Printer<T>,
    key: MemberKey,
    _member: PhantomData<fn(&F)>,
}

impl<T, F: Inspect> MemberRule<T, F> {
    /// Registers a custom formatter for this member. The closure receives
    /// the declared member value; its output is used verbatim.
    ///
    /// A member formatter always beats a type formatter for the same value,
    /// whatever the registration order.
    pub fn format<G>(mut self, format: G) -> Printer<T>
    where
        G: Fn(&F) -> String + Send + Sync + 'static,
    {
        self.parent
            .rules
            .member_formatters
            .insert(self.key, erase(format));
        self.parent
    }

    /// Registers a locale for this member, overriding any type-level locale.
    pub fn with_locale(mut self, locale: Locale) -> Printer<T> {
        self.parent.rules.member_locales.insert(self.key, locale);
        self.parent
    }
}

// -----------------------------------------------------------------------------
// TextMemberRule

/// A pending rule for a `String` member; the only place truncation lives.
pub struct TextMemberRule<T> {
    parent: Printer<T>,
    key: MemberKey,
}

impl<T> TextMemberRule<T> {
    /// Registers a custom formatter receiving the string contents.
    pub fn format<G>(mut self, format: G) -> Printer<T>
    where
        G: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.parent
            .rules
            .member_formatters
            .insert(self.key, erase(move |text: &String| format(text)));
        self.parent
    }

    /// Truncates this member's rendered text to at most `max_chars`
    /// characters.
    ///
    /// Truncation layers on top of whichever formatter applies to the member
    /// — member formatter, type formatter, or none — and never pads short
    /// strings.
    pub fn trim(mut self, max_chars: usize) -> Printer<T> {
        self.parent.rules.member_trims.insert(self.key, max_chars);
        self.parent
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn descriptor_of<O: Members + 'static>(
    name: &str,
) -> Result<&'static MemberDescriptor, SelectorError> {
    O::members()
        .iter()
        .find(|descriptor| descriptor.name() == name)
        .ok_or_else(|| SelectorError::UnknownMember {
            owner: std::any::type_name::<O>(),
            member: name.to_owned(),
        })
}

/// Type-erases a typed formatter into a [`FormatFn`].
///
/// The downcast cannot fail for rules registered through the builder: type
/// formatters are looked up under `TypeId::of::<P>`, and member formatters
/// are validated against the member's declared type at registration.
fn erase<P, F>(format: F) -> FormatFn
where
    P: Inspect,
    F: Fn(&P) -> String + Send + Sync + 'static,
{
    Arc::new(move |value: &dyn Inspect| {
        let Some(value) = value.downcast_ref::<P>() else {
            panic!(
                "formatter for `{}` invoked with a value of another type",
                std::any::type_name::<P>()
            );
        };
        format(value)
    })
}

#[cfg(test)]
mod tests {
    use super::{Printer, SelectorError};
    use crate::Inspect;

    #[derive(Inspect)]
    struct Sample {
        label: String,
        count: i32,
    }

    #[test]
    fn unknown_member_is_rejected() {
        let error = Printer::<Sample>::new().exclude_member("missing").err();

        assert_eq!(
            error,
            Some(SelectorError::UnknownMember {
                owner: std::any::type_name::<Sample>(),
                member: "missing".to_string(),
            })
        );
    }

    #[test]
    fn mismatched_member_type_is_rejected() {
        let error = Printer::<Sample>::new().member::<String>("count").err();

        assert!(matches!(
            error,
            Some(SelectorError::MemberTypeMismatch {
                member: "count",
                ..
            })
        ));
    }

    #[test]
    fn text_selector_requires_a_string_member() {
        let error = Printer::<Sample>::new().text_member("count").err();

        assert!(matches!(
            error,
            Some(SelectorError::NotText { member: "count", .. })
        ));

        assert!(Printer::<Sample>::new().text_member("label").is_ok());
    }
}
